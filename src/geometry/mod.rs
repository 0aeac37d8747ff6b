//! Layout-space geometry: rectangles, orientation, and the beam path.
//!
//! All coordinates are device-independent floating point units. Rectangles
//! are read fresh from the layout on every recomputation and never mutated.

mod path;

use glam::DVec2;
pub use path::{AnchorOffsets, BeamPath, PathGeometry};

/// An axis-aligned rectangle in the shared layout coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the layout origin to the left edge.
    pub left: f64,
    /// Distance from the layout origin to the top edge.
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Center point expressed relative to `container`'s top-left corner.
    #[inline]
    #[must_use]
    pub fn center_in(&self, container: &Self) -> DVec2 {
        DVec2::new(
            self.left - container.left + self.width / 2.0,
            self.top - container.top + self.height / 2.0,
        )
    }

    /// Whether the rectangle has no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Size of the drawing surface the path is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SvgDimensions {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

impl From<Rect> for SvgDimensions {
    fn from(rect: Rect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Dominant travel axis between the two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Horizontal delta is at least as large as vertical delta.
    #[default]
    Horizontal,
    /// Vertical delta strictly dominates.
    Vertical,
}

impl Orientation {
    /// Orientation of the segment `start → start + delta`. Ties resolve to
    /// horizontal.
    #[must_use]
    pub fn from_delta(delta: DVec2) -> Self {
        if delta.y.abs() > delta.x.abs() {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Whether the dominant axis is vertical.
    #[inline]
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }
}
