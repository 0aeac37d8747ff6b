//! Percentage values and the per-frame interpolation between them.

use std::fmt;
use std::str::FromStr;

use crate::error::BeamError;

/// A gradient coordinate expressed as a percentage of the drawing surface.
///
/// Renders as `"{value}%"`, using the shortest representation of the number
/// (`10%`, `106.875%`, `-10%`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(pub f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// The numeric magnitude, without the `%`.
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// `self + (end - self) * progress`. No clamping; callers keep
    /// `progress` in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn lerp(self, end: Self, progress: f64) -> Self {
        Self(self.0 + (end.0 - self.0) * progress)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", format_number(self.0))
    }
}

impl FromStr for Percentage {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(BeamError::InvalidPercentage(s.to_owned())),
        }
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Interpolate between two percentage strings and render the result.
///
/// `interpolate_percentage("10%", "110%", 0.5)` is `"60%"`.
///
/// # Errors
///
/// Returns [`BeamError::InvalidPercentage`] if either endpoint does not
/// parse.
pub fn interpolate_percentage(
    start: &str,
    end: &str,
    progress: f64,
) -> Result<String, BeamError> {
    let start: Percentage = start.parse()?;
    let end: Percentage = end.parse()?;
    Ok(start.lerp(end, progress).to_string())
}

/// Format a coordinate the way path and gradient attributes expect it:
/// integers without a fractional part and no negative zero.
pub(crate) fn format_number(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_shortest_form() {
        assert_eq!(Percentage(10.0).to_string(), "10%");
        assert_eq!(Percentage(-10.0).to_string(), "-10%");
        assert_eq!(Percentage(106.875).to_string(), "106.875%");
        assert_eq!(Percentage(-0.0).to_string(), "0%");
    }

    #[test]
    fn test_parse() {
        assert_eq!("90%".parse::<Percentage>().ok(), Some(Percentage(90.0)));
        assert_eq!(" -10% ".parse::<Percentage>().ok(), Some(Percentage(-10.0)));
        assert_eq!("42".parse::<Percentage>().ok(), Some(Percentage(42.0)));
        assert!("abc%".parse::<Percentage>().is_err());
        assert!("inf%".parse::<Percentage>().is_err());
        assert!("".parse::<Percentage>().is_err());
    }

    #[test]
    fn test_interpolate_endpoints() {
        for a in ["0%", "10%", "-10%", "110%", "33.5%"] {
            for b in ["0%", "100%", "-10%"] {
                assert_eq!(interpolate_percentage(a, b, 0.0).unwrap(), a);
                assert_eq!(interpolate_percentage(a, b, 1.0).unwrap(), b);
            }
        }
    }

    #[test]
    fn test_interpolate_same_endpoint_is_constant() {
        for p in [0.0, 0.1, 0.5, 0.968_75, 1.0] {
            assert_eq!(interpolate_percentage("90%", "90%", p).unwrap(), "90%");
        }
    }

    #[test]
    fn test_interpolate_midway() {
        assert_eq!(interpolate_percentage("10%", "110%", 0.5).unwrap(), "60%");
        assert_eq!(
            interpolate_percentage("90%", "-10%", 0.968_75).unwrap(),
            "-6.875%"
        );
    }

    #[test]
    fn test_interpolate_rejects_garbage() {
        let err = interpolate_percentage("wide", "0%", 0.5).unwrap_err();
        assert!(matches!(err, BeamError::InvalidPercentage(ref s) if s == "wide"));
    }
}
