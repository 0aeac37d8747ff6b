//! Deterministic scheduler driven by an explicit virtual clock.

use std::time::Duration;

use super::{duration_ms, FrameHandle, Scheduler, TaskQueue, TimerHandle, Wakeup};

/// Scheduler whose clock only moves when told to.
///
/// Every advance runs one frame at the new time (if any frame was
/// requested) after firing the timers that came due.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: f64,
    queue: TaskQueue,
}

impl ManualScheduler {
    /// Scheduler starting at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler starting at `now` milliseconds.
    #[must_use]
    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            queue: TaskQueue::default(),
        }
    }

    /// Move the clock to `now` (never backwards) and return what came due.
    pub fn advance_to(&mut self, now: f64) -> Vec<Wakeup> {
        self.now = self.now.max(now);
        self.queue.drain_due(self.now, true)
    }

    /// Move the clock forward by `delta` and return what came due.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<Wakeup> {
        self.advance_to(self.now + duration_ms(delta))
    }

    /// Whether any frame request is outstanding.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.queue.has_frames()
    }

    /// Number of timers that have neither fired nor been cleared.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.queue.timers.len()
    }

    /// Whether nothing at all is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.queue.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.cancel_frame(handle);
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        self.queue.set_timeout(self.now, delay)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.queue.clear_timeout(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_share_timestamp() {
        let mut sched = ManualScheduler::starting_at(1000.0);
        let a = sched.request_frame();
        let b = sched.request_frame();

        let wakeups = sched.advance_by(Duration::from_millis(16));
        assert_eq!(
            wakeups,
            vec![
                Wakeup::Frame {
                    handle: a,
                    timestamp: 1016.0
                },
                Wakeup::Frame {
                    handle: b,
                    timestamp: 1016.0
                },
            ]
        );
        assert!(!sched.has_pending_frame());
    }

    #[test]
    fn test_timer_waits_for_deadline() {
        let mut sched = ManualScheduler::new();
        let handle = sched.set_timeout(Duration::from_millis(100));

        assert!(sched.advance_by(Duration::from_millis(99)).is_empty());
        assert_eq!(
            sched.advance_by(Duration::from_millis(1)),
            vec![Wakeup::Timer { handle }]
        );
        assert!(sched.is_idle());
    }

    #[test]
    fn test_cleared_timer_never_fires() {
        let mut sched = ManualScheduler::new();
        let handle = sched.set_timeout(Duration::from_millis(10));
        sched.clear_timeout(handle);
        sched.clear_timeout(handle);
        assert!(sched.advance_by(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut sched = ManualScheduler::starting_at(50.0);
        let _ = sched.advance_to(10.0);
        assert_eq!(sched.now(), 50.0);
    }
}
