//! Perpetual cycle driver for the travelling highlight.
//!
//! The driver alternates between [`CyclePhase::Idle`] and
//! [`CyclePhase::Running`]. The first frame after the loop starts, or after
//! a cycle completes, opens a new cycle at `now + delay`. Completing a cycle
//! drops back to idle but the next frame is still requested, so playback
//! loops until [`cancel`](AnimationDriver::cancel) releases the frame.

use std::time::Duration;

use crate::scheduler::{duration_ms, FrameHandle, Scheduler};
use crate::util::easing::EasingFunction;

/// Whether a cycle is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CyclePhase {
    /// No cycle open; the next frame starts one.
    #[default]
    Idle,
    /// A cycle is open.
    Running {
        /// Timestamp (ms) at which progress starts counting, delay included.
        start_time: f64,
    },
}

/// Progress computed for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameProgress {
    /// Milliseconds since the cycle start. Negative during the delay.
    pub elapsed: f64,
    /// Linear progress clamped to `[0, 1]`.
    pub t: f64,
    /// `t` after easing.
    pub eased_t: f64,
    /// Whether this frame closed the cycle.
    pub cycle_complete: bool,
}

/// Drives cycle timing and owns the pending frame request.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    delay_ms: f64,
    duration_ms: f64,
    easing: EasingFunction,
    phase: CyclePhase,
    frame: Option<FrameHandle>,
}

impl AnimationDriver {
    /// Driver with the given per-cycle delay, duration and easing.
    #[must_use]
    pub fn new(delay: Duration, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            delay_ms: duration_ms(delay),
            duration_ms: duration_ms(duration),
            easing,
            phase: CyclePhase::Idle,
            frame: None,
        }
    }

    /// Cycle length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_ms / 1000.0)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Whether the loop holds a frame request.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Begin the loop. Does nothing if a frame is already requested.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        if self.frame.is_none() {
            self.frame = Some(scheduler.request_frame());
        }
    }

    /// Claim a delivered frame. Returns `false` for frames this driver did
    /// not request or has since cancelled.
    pub fn take_frame(&mut self, handle: FrameHandle) -> bool {
        if self.frame == Some(handle) {
            self.frame = None;
            true
        } else {
            false
        }
    }

    /// Request the next frame of the loop.
    pub fn schedule_next(&mut self, scheduler: &mut dyn Scheduler) {
        self.frame = Some(scheduler.request_frame());
    }

    /// Release the pending frame and return to idle. Safe to call at any
    /// time, any number of times.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        self.phase = CyclePhase::Idle;
    }

    /// Compute progress at `now` and advance the state machine.
    pub fn advance(&mut self, now: f64) -> FrameProgress {
        let start_time = match self.phase {
            CyclePhase::Running { start_time } => start_time,
            CyclePhase::Idle => {
                let start_time = now + self.delay_ms;
                self.phase = CyclePhase::Running { start_time };
                log::trace!("beam cycle opened, progress starts at {start_time}ms");
                start_time
            }
        };

        let elapsed = now - start_time;
        let t = if elapsed < 0.0 {
            0.0
        } else if self.duration_ms > 0.0 {
            (elapsed / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        let eased_t = self.easing.evaluate(t);

        let cycle_complete = elapsed >= self.duration_ms;
        if cycle_complete {
            self.phase = CyclePhase::Idle;
        }

        FrameProgress {
            elapsed,
            t,
            eased_t,
            cycle_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ManualScheduler, Wakeup};

    fn driver(delay_ms: u64, duration_ms: u64) -> AnimationDriver {
        AnimationDriver::new(
            Duration::from_millis(delay_ms),
            Duration::from_millis(duration_ms),
            EasingFunction::ExponentialOut,
        )
    }

    #[test]
    fn test_midpoint_progress() {
        let mut d = driver(0, 1000);
        let first = d.advance(2000.0);
        assert_eq!(first.t, 0.0);
        assert_eq!(first.eased_t, 0.0);

        let mid = d.advance(2500.0);
        assert_eq!(mid.t, 0.5);
        assert_eq!(mid.eased_t, 0.968_75);
        assert!(!mid.cycle_complete);
        assert_eq!(d.phase(), CyclePhase::Running { start_time: 2000.0 });
    }

    #[test]
    fn test_delay_clamps_progress_to_zero() {
        let mut d = driver(500, 1000);
        let first = d.advance(0.0);
        assert_eq!(first.elapsed, -500.0);
        assert_eq!(first.t, 0.0);
        assert_eq!(first.eased_t, 0.0);

        let during_delay = d.advance(250.0);
        assert_eq!(during_delay.t, 0.0);
        assert!(!during_delay.cycle_complete);

        let mid = d.advance(1000.0);
        assert_eq!(mid.t, 0.5);
    }

    #[test]
    fn test_cycle_completes_and_restarts() {
        let mut d = driver(0, 1000);
        let _ = d.advance(0.0);

        let last = d.advance(1000.0);
        assert_eq!(last.t, 1.0);
        assert_eq!(last.eased_t, 1.0);
        assert!(last.cycle_complete);
        assert_eq!(d.phase(), CyclePhase::Idle);

        let next = d.advance(1016.0);
        assert_eq!(next.t, 0.0);
        assert_eq!(d.phase(), CyclePhase::Running { start_time: 1016.0 });
    }

    #[test]
    fn test_late_frame_overshoot_is_capped() {
        let mut d = driver(0, 100);
        let _ = d.advance(0.0);
        let late = d.advance(5000.0);
        assert_eq!(late.t, 1.0);
        assert!(late.cycle_complete);
    }

    #[test]
    fn test_zero_duration_completes_every_frame() {
        let mut d = driver(0, 0);
        let p = d.advance(10.0);
        assert_eq!(p.t, 1.0);
        assert!(p.cycle_complete);

        let mut delayed = driver(500, 0);
        let p = delayed.advance(0.0);
        assert_eq!(p.t, 0.0);
        assert_eq!(p.eased_t, 0.0);
        assert!(!p.cycle_complete);
        let p = delayed.advance(500.0);
        assert_eq!(p.t, 1.0);
        assert!(p.cycle_complete);
    }

    #[test]
    fn test_frame_ownership_and_cancel() {
        let mut sched = ManualScheduler::new();
        let mut d = driver(0, 1000);
        d.start(&mut sched);
        d.start(&mut sched);
        assert!(d.is_running());

        let wakeups = sched.advance_by(Duration::from_millis(16));
        assert_eq!(wakeups.len(), 1, "double start must not double the loop");
        let Wakeup::Frame { handle, .. } = wakeups[0] else {
            unreachable!("manual scheduler only had a frame pending");
        };
        assert!(d.take_frame(handle));
        assert!(!d.take_frame(handle));

        d.schedule_next(&mut sched);
        d.cancel(&mut sched);
        d.cancel(&mut sched);
        assert!(!d.is_running());
        assert!(sched.is_idle());
    }
}
