//! Shared numeric helpers.

pub mod easing;
