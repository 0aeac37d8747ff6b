//! Gradient highlight animation: keyframe tables, percentage interpolation,
//! and the looping cycle driver.

pub mod driver;
pub mod gradient;
pub mod interpolation;

pub use driver::{AnimationDriver, CyclePhase, FrameProgress};
pub use gradient::{GradientCoordinates, KeyframePair};
pub use interpolation::{interpolate_percentage, Percentage};
