//! Cooperative scheduling abstraction for frame callbacks and timers.
//!
//! The beam never owns a thread. It asks a [`Scheduler`] for the next
//! animation frame or for a one-shot timer, and the host loop hands the
//! resulting [`Wakeup`]s back to whichever instance owns them. Everything
//! runs on a single thread; each wakeup is processed to completion before
//! the next one is delivered.

mod manual;
mod realtime;

use std::time::Duration;

pub use manual::ManualScheduler;
pub use realtime::RealtimeScheduler;
use rustc_hash::FxHashMap;

/// Handle to a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

/// Handle to a pending one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A scheduled callback that has come due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wakeup {
    /// An animation frame is ready.
    Frame {
        /// The handle returned by [`Scheduler::request_frame`].
        handle: FrameHandle,
        /// Frame timestamp in milliseconds, shared by every callback of
        /// the same frame.
        timestamp: f64,
    },
    /// A timer elapsed without being cleared.
    Timer {
        /// The handle returned by [`Scheduler::set_timeout`].
        handle: TimerHandle,
    },
}

/// Host-provided frame and timer scheduling.
///
/// Cancelling a handle that is unknown, already fired, or already cancelled
/// must be a no-op.
pub trait Scheduler {
    /// Current monotonic time in milliseconds.
    fn now(&self) -> f64;

    /// Ask for a callback on the next animation frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a frame request.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Ask for a callback after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> TimerHandle;

    /// Withdraw a timer.
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// `delay` in milliseconds.
pub(crate) fn duration_ms(delay: Duration) -> f64 {
    delay.as_nanos() as f64 / 1_000_000.0
}

/// Pending frame requests and timers, shared by the concrete schedulers.
#[derive(Debug, Default)]
struct TaskQueue {
    next_id: u64,
    frames: Vec<FrameHandle>,
    /// Timer deadline in milliseconds, keyed by handle.
    timers: FxHashMap<TimerHandle, f64>,
}

impl TaskQueue {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|&pending| pending != handle);
    }

    fn set_timeout(&mut self, now: f64, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        let _ = self.timers.insert(handle, now + duration_ms(delay));
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        let _ = self.timers.remove(&handle);
    }

    /// Earliest pending timer deadline.
    fn next_deadline(&self) -> Option<f64> {
        self.timers.values().copied().reduce(f64::min)
    }

    fn has_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }

    /// Timers due at `now` (in registration order), then one frame at `now`
    /// if `run_frame` is set.
    ///
    /// Frame requests made while the returned wakeups are being processed
    /// land in the next frame.
    fn drain_due(&mut self, now: f64, run_frame: bool) -> Vec<Wakeup> {
        let mut due: Vec<TimerHandle> = self
            .timers
            .iter()
            .filter(|&(_, &deadline)| deadline <= now)
            .map(|(&handle, _)| handle)
            .collect();
        due.sort_unstable();

        let mut wakeups = Vec::with_capacity(due.len() + self.frames.len());
        for handle in due {
            let _ = self.timers.remove(&handle);
            wakeups.push(Wakeup::Timer { handle });
        }

        if run_frame {
            wakeups.extend(self.frames.drain(..).map(|handle| Wakeup::Frame {
                handle,
                timestamp: now,
            }));
        }
        wakeups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_unknown_handles_is_noop() {
        let mut queue = TaskQueue::default();
        queue.cancel_frame(FrameHandle(42));
        queue.clear_timeout(TimerHandle(42));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_timers_fire_in_registration_order_before_frames() {
        let mut queue = TaskQueue::default();
        let frame = queue.request_frame();
        let late = queue.set_timeout(0.0, Duration::from_millis(20));
        let early = queue.set_timeout(0.0, Duration::from_millis(10));

        let wakeups = queue.drain_due(25.0, true);
        assert_eq!(
            wakeups,
            vec![
                Wakeup::Timer { handle: late },
                Wakeup::Timer { handle: early },
                Wakeup::Frame {
                    handle: frame,
                    timestamp: 25.0
                },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_next_deadline() {
        let mut queue = TaskQueue::default();
        assert_eq!(queue.next_deadline(), None);
        let _ = queue.set_timeout(5.0, Duration::from_millis(100));
        let _ = queue.set_timeout(5.0, Duration::from_millis(40));
        assert_eq!(queue.next_deadline(), Some(45.0));
    }
}
