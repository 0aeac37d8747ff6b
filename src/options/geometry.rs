use glam::DVec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::AnchorOffsets;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Path shape and anchor offsets.
pub struct GeometryOptions {
    /// Control point displacement from the midpoint. 0 draws a straight line.
    #[schemars(title = "Curvature", range(min = -200.0, max = 200.0), extend("step" = 1.0))]
    pub curvature: f64,
    /// Horizontal nudge of the start anchor, in pixels.
    #[schemars(title = "Start X Offset")]
    pub start_x_offset: f64,
    /// Vertical nudge of the start anchor, in pixels.
    #[schemars(title = "Start Y Offset")]
    pub start_y_offset: f64,
    /// Horizontal nudge of the end anchor, in pixels.
    #[schemars(title = "End X Offset")]
    pub end_x_offset: f64,
    /// Vertical nudge of the end anchor, in pixels.
    #[schemars(title = "End Y Offset")]
    pub end_y_offset: f64,
}

impl GeometryOptions {
    /// Offsets in the form the path builder consumes.
    #[must_use]
    pub fn offsets(&self) -> AnchorOffsets {
        AnchorOffsets {
            start: DVec2::new(self.start_x_offset, self.start_y_offset),
            end: DVec2::new(self.end_x_offset, self.end_y_offset),
        }
    }
}
