use std::time::Duration;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Lower bound of the randomly chosen cycle duration, in seconds.
pub const RANDOM_DURATION_MIN: f64 = 4.0;
/// Upper bound (exclusive) of the randomly chosen cycle duration, in seconds.
pub const RANDOM_DURATION_MAX: f64 = 7.0;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing and direction of the travelling highlight.
pub struct AnimationOptions {
    /// Run the highlight from the end anchor back to the start anchor.
    #[schemars(title = "Reverse")]
    pub reverse: bool,
    /// Seconds to wait at the start of every cycle.
    #[schemars(title = "Delay", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub delay: f64,
    /// Seconds per cycle. Unset picks a random value in [4, 7) per beam.
    #[schemars(title = "Duration")]
    pub duration: Option<f64>,
    /// Curve applied to cycle progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Concrete cycle duration, drawing a random one if none is configured.
    #[must_use]
    pub fn resolve_duration(&self) -> Duration {
        self.resolve_duration_with(&mut rand::rng())
    }

    /// Like [`resolve_duration`](Self::resolve_duration) with an explicit
    /// random source.
    #[must_use]
    pub fn resolve_duration_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let secs = self.duration.unwrap_or_else(|| {
            let secs = rng.random_range(RANDOM_DURATION_MIN..RANDOM_DURATION_MAX);
            log::debug!("no beam duration configured, picked {secs:.3}s");
            secs
        });
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }

    /// Per-cycle delay, negative values treated as none.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay).unwrap_or(Duration::ZERO)
    }
}
