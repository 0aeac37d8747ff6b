//! Gradient keyframe table resolved from beam orientation and direction.
//!
//! The highlight always travels along the dominant axis. Reversing flips the
//! travel direction; the other axis stays pinned at its origin.

use std::fmt;

use super::interpolation::Percentage;
use crate::error::BeamError;
use crate::geometry::Orientation;

/// A `[from, to]` pair describing one gradient coordinate over a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframePair {
    /// Value at the start of a cycle.
    pub from: Percentage,
    /// Value at the end of a cycle.
    pub to: Percentage,
}

impl KeyframePair {
    /// Pair from raw percentage magnitudes.
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self {
            from: Percentage(from),
            to: Percentage(to),
        }
    }

    /// Parse a pair from percentage strings such as `["90%", "-10%"]`.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::InvalidPercentage`] if either string is not a
    /// percentage.
    pub fn parse(from: &str, to: &str) -> Result<Self, BeamError> {
        Ok(Self {
            from: from.parse()?,
            to: to.parse()?,
        })
    }

    /// Value at eased progress `t`.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f64) -> Percentage {
        self.from.lerp(self.to, t)
    }
}

impl fmt::Display for KeyframePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// The four animated `linearGradient` coordinates.
///
/// Always holds all four keys, and is only ever replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCoordinates {
    /// Keyframes for `x1`.
    pub x1: KeyframePair,
    /// Keyframes for `x2`.
    pub x2: KeyframePair,
    /// Keyframes for `y1`.
    pub y1: KeyframePair,
    /// Keyframes for `y2`.
    pub y2: KeyframePair,
}

impl GradientCoordinates {
    /// Table shown before any geometry has been computed.
    pub const PLACEHOLDER: Self = Self {
        x1: KeyframePair::new(100.0, 0.0),
        x2: KeyframePair::new(100.0, 0.0),
        y1: KeyframePair::new(0.0, 0.0),
        y2: KeyframePair::new(0.0, 0.0),
    };

    /// Resolve the keyframe table for a beam orientation and direction.
    #[must_use]
    pub const fn resolve(orientation: Orientation, reverse: bool) -> Self {
        let pinned = KeyframePair::new(0.0, 0.0);
        let (leading, trailing) = if reverse {
            (KeyframePair::new(90.0, -10.0), KeyframePair::new(100.0, 0.0))
        } else {
            (KeyframePair::new(10.0, 110.0), KeyframePair::new(0.0, 100.0))
        };

        match orientation {
            Orientation::Horizontal => Self {
                x1: leading,
                x2: trailing,
                y1: pinned,
                y2: pinned,
            },
            Orientation::Vertical => Self {
                x1: pinned,
                x2: pinned,
                y1: leading,
                y2: trailing,
            },
        }
    }

    /// Interpolate all four coordinates at eased progress `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> [Percentage; 4] {
        [self.x1.at(t), self.x2.at(t), self.y1.at(t), self.y2.at(t)]
    }
}

impl Default for GradientCoordinates {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}
