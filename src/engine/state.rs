//! The derived snapshot a beam keeps between recomputations.

use crate::animation::GradientCoordinates;
use crate::geometry::{BeamPath, Orientation, PathGeometry, SvgDimensions};

/// Path and gradient table derived from one layout snapshot.
///
/// Replaced as a whole on every recomputation, so the path and the gradient
/// table always describe the same geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PathState {
    /// The beam path, in container-relative coordinates.
    pub path: BeamPath,
    /// Drawing surface size.
    pub dimensions: SvgDimensions,
    /// Dominant travel axis of `path`.
    pub orientation: Orientation,
    /// Keyframe table for the gradient highlight.
    pub gradient: GradientCoordinates,
}

impl PathState {
    /// Snapshot for freshly built geometry and a direction flag.
    #[must_use]
    pub fn from_geometry(geometry: PathGeometry, reverse: bool) -> Self {
        Self {
            path: geometry.path,
            dimensions: geometry.dimensions,
            orientation: geometry.orientation,
            gradient: GradientCoordinates::resolve(geometry.orientation, reverse),
        }
    }

    /// The path command string.
    #[must_use]
    pub fn path_data(&self) -> String {
        self.path.to_string()
    }
}

impl Default for PathState {
    fn default() -> Self {
        Self {
            path: BeamPath::default(),
            dimensions: SvgDimensions::default(),
            orientation: Orientation::default(),
            gradient: GradientCoordinates::PLACEHOLDER,
        }
    }
}
