//! Rendering boundary.
//!
//! The beam hands its path snapshot and per-frame gradient coordinates to a
//! [`RenderSink`]; how they reach the screen is up to the sink.

mod svg;

use std::fmt;

pub use svg::SvgSink;

use crate::animation::Percentage;
use crate::engine::PathState;

/// The four gradient coordinate attributes for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GradientFrame {
    /// `x1` attribute value, e.g. `"106.875%"`.
    pub x1: String,
    /// `x2` attribute value.
    pub x2: String,
    /// `y1` attribute value.
    pub y1: String,
    /// `y2` attribute value.
    pub y2: String,
}

impl From<[Percentage; 4]> for GradientFrame {
    fn from([x1, x2, y1, y2]: [Percentage; 4]) -> Self {
        Self {
            x1: x1.to_string(),
            x2: x2.to_string(),
            y1: y1.to_string(),
            y2: y2.to_string(),
        }
    }
}

impl fmt::Display for GradientFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x1={} x2={} y1={} y2={}",
            self.x1, self.x2, self.y1, self.y2
        )
    }
}

/// Receives everything the beam produces.
pub trait RenderSink {
    /// A new path snapshot was computed.
    fn update_path(&mut self, state: &PathState);

    /// The gradient moved for this frame.
    fn update_gradient(&mut self, frame: &GradientFrame);
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn update_path(&mut self, state: &PathState) {
        (**self).update_path(state);
    }

    fn update_gradient(&mut self, frame: &GradientFrame) {
        (**self).update_gradient(frame);
    }
}
