//! Easing functions for beam animation.
//!
//! Maps linear cycle progress onto the curve the gradient highlight follows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Exponential ease-out: `1 - 2^(-10t)`, landing exactly on 1 at `t = 1`.
    #[default]
    ExponentialOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::ExponentialOut => exponential_out(t),
        }
    }
}

/// `1 - 2^(-10t)`, special-cased at 1 so the curve does not stop short.
#[inline]
#[must_use]
pub fn exponential_out(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - (-10.0 * t).exp2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_endpoints_are_exact() {
        assert_eq!(exponential_out(0.0), 0.0);
        assert_eq!(exponential_out(1.0), 1.0);
    }

    #[test]
    fn test_exponential_midpoint() {
        // 1 - 2^-5
        assert_eq!(exponential_out(0.5), 0.968_75);
    }

    #[test]
    fn test_exponential_is_monotonic() {
        let mut prev = exponential_out(0.0);
        for i in 1..=1000 {
            let v = exponential_out(f64::from(i) / 1000.0);
            assert!(v >= prev, "not monotonic at step {i}: {v} < {prev}");
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_input_clamping() {
        let expo = EasingFunction::ExponentialOut;
        assert_eq!(expo.evaluate(-0.5), 0.0);
        assert_eq!(expo.evaluate(1.5), 1.0);
        assert_eq!(EasingFunction::Linear.evaluate(-2.0), 0.0);
    }

    #[test]
    fn test_default_is_exponential_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::ExponentialOut);
    }
}
