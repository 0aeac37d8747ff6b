//! Path construction between the two anchor centers.

use std::fmt;

use glam::DVec2;

use super::{Orientation, Rect, SvgDimensions};
use crate::animation::interpolation::format_number;

/// Pixel nudges applied to the computed anchor centers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorOffsets {
    /// Added to the start anchor center.
    pub start: DVec2,
    /// Added to the end anchor center.
    pub end: DVec2,
}

/// A single-segment path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BeamPath {
    /// `M start L end`.
    Line {
        /// Start anchor center.
        start: DVec2,
        /// End anchor center.
        end: DVec2,
    },
    /// `M start Q control end`.
    Quadratic {
        /// Start anchor center.
        start: DVec2,
        /// Quadratic control point.
        control: DVec2,
        /// End anchor center.
        end: DVec2,
    },
}

impl BeamPath {
    /// Build the path between two points.
    ///
    /// A curvature of exactly zero yields a straight line. Otherwise the
    /// control point is the midpoint pushed `-curvature` along the axis
    /// orthogonal to `orientation`.
    #[must_use]
    pub fn between(
        start: DVec2,
        end: DVec2,
        orientation: Orientation,
        curvature: f64,
    ) -> Self {
        if curvature == 0.0 {
            return Self::Line { start, end };
        }

        let mid = (start + end) / 2.0;
        let shift = match orientation {
            Orientation::Vertical => DVec2::new(-curvature, 0.0),
            Orientation::Horizontal => DVec2::new(0.0, -curvature),
        };
        Self::Quadratic {
            start,
            control: mid + shift,
            end,
        }
    }

    /// Path start point.
    #[must_use]
    pub fn start(&self) -> DVec2 {
        match *self {
            Self::Line { start, .. } | Self::Quadratic { start, .. } => start,
        }
    }

    /// Path end point.
    #[must_use]
    pub fn end(&self) -> DVec2 {
        match *self {
            Self::Line { end, .. } | Self::Quadratic { end, .. } => end,
        }
    }

    /// Control point, if the path is curved.
    #[must_use]
    pub fn control(&self) -> Option<DVec2> {
        match *self {
            Self::Line { .. } => None,
            Self::Quadratic { control, .. } => Some(control),
        }
    }
}

impl Default for BeamPath {
    fn default() -> Self {
        Self::Line {
            start: DVec2::ZERO,
            end: DVec2::ZERO,
        }
    }
}

struct Coord(DVec2);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_number(self.0.x), format_number(self.0.y))
    }
}

impl fmt::Display for BeamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Line { start, end } => {
                write!(f, "M {} L {}", Coord(start), Coord(end))
            }
            Self::Quadratic {
                start,
                control,
                end,
            } => write!(
                f,
                "M {} Q {} {}",
                Coord(start),
                Coord(control),
                Coord(end)
            ),
        }
    }
}

/// Everything derived from one layout snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathGeometry {
    /// The beam path, in container-relative coordinates.
    pub path: BeamPath,
    /// Drawing surface size (the container's size).
    pub dimensions: SvgDimensions,
    /// Dominant travel axis.
    pub orientation: Orientation,
}

impl PathGeometry {
    /// Compute the beam between `from` and `to` inside `container`.
    ///
    /// Degenerate rectangles still produce a (possibly zero-length) path.
    #[must_use]
    pub fn build(
        container: &Rect,
        from: &Rect,
        to: &Rect,
        offsets: &AnchorOffsets,
        curvature: f64,
    ) -> Self {
        let start = from.center_in(container) + offsets.start;
        let end = to.center_in(container) + offsets.end;
        let orientation = Orientation::from_delta(end - start);

        Self {
            path: BeamPath::between(start, end, orientation, curvature),
            dimensions: SvgDimensions::from(*container),
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_rects() -> (Rect, Rect, Rect) {
        (
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Rect::new(10.0, 40.0, 20.0, 20.0),
            Rect::new(170.0, 40.0, 20.0, 20.0),
        )
    }

    #[test]
    fn test_straight_line_scenario() {
        let (c, a, b) = scenario_rects();
        let geom = PathGeometry::build(&c, &a, &b, &AnchorOffsets::default(), 0.0);
        assert_eq!(geom.path.to_string(), "M 20,50 L 180,50");
        assert_eq!(geom.orientation, Orientation::Horizontal);
        assert_eq!(
            geom.dimensions,
            SvgDimensions {
                width: 200.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn test_curved_scenario() {
        let (c, a, b) = scenario_rects();
        let geom = PathGeometry::build(&c, &a, &b, &AnchorOffsets::default(), 30.0);
        assert_eq!(geom.path.control(), Some(DVec2::new(100.0, 20.0)));
        assert_eq!(geom.path.to_string(), "M 20,50 Q 100,20 180,50");
    }

    #[test]
    fn test_vertical_curve_shifts_x() {
        let start = DVec2::new(50.0, 0.0);
        let end = DVec2::new(50.0, 100.0);
        let path = BeamPath::between(start, end, Orientation::Vertical, 15.0);
        assert_eq!(path.control(), Some(DVec2::new(35.0, 50.0)));
    }

    #[test]
    fn test_negative_curvature_mirrors_control_point() {
        let start = DVec2::new(3.0, 7.0);
        let end = DVec2::new(91.0, 20.0);
        let orientation = Orientation::from_delta(end - start);
        let mid = (start + end) / 2.0;

        let up = BeamPath::between(start, end, orientation, 12.5).control().unwrap();
        let down = BeamPath::between(start, end, orientation, -12.5).control().unwrap();
        assert_eq!(up - mid, -(down - mid));
        assert_eq!((up - mid).length(), 12.5);
    }

    #[test]
    fn test_container_offset_and_anchor_offsets() {
        let container = Rect::new(100.0, 200.0, 300.0, 300.0);
        let from = Rect::new(110.0, 210.0, 20.0, 20.0);
        let to = Rect::new(110.0, 410.0, 20.0, 20.0);
        let offsets = AnchorOffsets {
            start: DVec2::new(5.0, -5.0),
            end: DVec2::new(0.0, 2.5),
        };
        let geom = PathGeometry::build(&container, &from, &to, &offsets, 0.0);
        assert_eq!(geom.path.to_string(), "M 25,15 L 20,222.5");
        assert!(geom.orientation.is_vertical());
    }

    #[test]
    fn test_coincident_anchors_produce_zero_length_path() {
        let container = Rect::new(0.0, 0.0, 0.0, 0.0);
        let anchor = Rect::new(0.0, 0.0, 0.0, 0.0);
        let geom =
            PathGeometry::build(&container, &anchor, &anchor, &AnchorOffsets::default(), 40.0);
        assert_eq!(geom.path.start(), geom.path.end());
        assert_eq!(geom.path.to_string(), "M 0,0 Q 0,-40 0,0");
    }

    #[test]
    fn test_fractional_rects_keep_exact_coordinates() {
        let container = Rect::new(148.63, 0.0, 640.0, 100.0);
        let from = Rect::new(255.07, 30.0, 90.45, 40.0);
        let to = Rect::new(387.44, 30.0, 44.76, 40.0);
        let offsets = AnchorOffsets {
            start: DVec2::new(0.1, 0.0),
            end: DVec2::new(-0.3, 0.0),
        };
        let geom = PathGeometry::build(&container, &from, &to, &offsets, 0.0);

        let start_x = from.left - container.left + from.width / 2.0 + offsets.start.x;
        let end_x = to.left - container.left + to.width / 2.0 + offsets.end.x;
        assert_eq!(geom.path.start().x, start_x);
        assert_eq!(geom.path.end().x, end_x);
        assert_eq!(geom.path.to_string(), format!("M {start_x},50 L {end_x},50"));
    }
}
