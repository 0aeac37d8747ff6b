//! Wall-clock scheduler with frame pacing, for native host loops.

use web_time::{Duration, Instant};

use super::{FrameHandle, Scheduler, TaskQueue, TimerHandle, Wakeup};

/// Scheduler backed by a monotonic wall clock.
///
/// Frames are paced to a target FPS (0 = unlimited); timers fire at their
/// deadline. [`wait_next`](Self::wait_next) blocks the calling thread until
/// something comes due.
#[derive(Debug)]
pub struct RealtimeScheduler {
    origin: Instant,
    queue: TaskQueue,
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f64,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f64,
}

impl RealtimeScheduler {
    /// Create a scheduler with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        let origin = Instant::now();

        Self {
            origin,
            queue: TaskQueue::default(),
            target_fps,
            min_frame_duration,
            last_frame: origin,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Target frame rate this scheduler paces to.
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Smoothed frames per second actually delivered.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.smoothed_fps
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Sleep until the next frame boundary or timer deadline, then return
    /// what came due. Returns immediately with nothing if nothing is
    /// scheduled.
    pub fn wait_next(&mut self) -> Vec<Wakeup> {
        let next_frame = self
            .queue
            .has_frames()
            .then(|| self.last_frame + self.min_frame_duration);
        let next_timer = self
            .queue
            .next_deadline()
            .map(|ms| self.origin + Duration::from_secs_f64(ms.max(0.0) / 1000.0));

        let Some(wake_at) = [next_frame, next_timer].into_iter().flatten().min()
        else {
            return Vec::new();
        };

        let now = Instant::now();
        if wake_at > now {
            std::thread::sleep(wake_at - now);
        }

        let now = Instant::now();
        let run_frame = next_frame.is_some_and(|at| at <= now);
        let wakeups = self.queue.drain_due(self.elapsed_ms(now), run_frame);
        if run_frame {
            self.end_frame(now);
        }
        wakeups
    }

    fn elapsed_ms(&self, now: Instant) -> f64 {
        now.duration_since(self.origin).as_secs_f64() * 1000.0
    }

    fn end_frame(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f64();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }
}

impl Default for RealtimeScheduler {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Scheduler for RealtimeScheduler {
    fn now(&self) -> f64 {
        self.elapsed_ms(Instant::now())
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.queue.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.cancel_frame(handle);
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        let now = self.now();
        self.queue.set_timeout(now, delay)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.queue.clear_timeout(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_returns_immediately() {
        let mut sched = RealtimeScheduler::new(60);
        assert!(sched.wait_next().is_empty());
    }

    #[test]
    fn test_frame_timestamps_increase() {
        let mut sched = RealtimeScheduler::new(0);
        let _ = sched.request_frame();
        let first = sched.wait_next();
        let _ = sched.request_frame();
        std::thread::sleep(Duration::from_millis(2));
        let second = sched.wait_next();

        let stamp = |w: &[Wakeup]| match w.first() {
            Some(Wakeup::Frame { timestamp, .. }) => *timestamp,
            other => panic!("expected a frame, got {other:?}"),
        };
        assert!(stamp(&second) > stamp(&first));
    }

    #[test]
    fn test_timer_fires_after_deadline() {
        let mut sched = RealtimeScheduler::new(60);
        let handle = sched.set_timeout(Duration::from_millis(5));
        let start = Instant::now();
        let wakeups = sched.wait_next();
        assert!(start.elapsed() >= Duration::from_millis(4));
        assert_eq!(wakeups, vec![Wakeup::Timer { handle }]);
    }
}
