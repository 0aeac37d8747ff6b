//! Debounced recomputation on layout resize.

use std::time::Duration;

use super::ConnectionBeam;
use crate::layout::SubscriptionId;
use crate::render::RenderSink;
use crate::scheduler::{Scheduler, TimerHandle};

/// Quiet period after the last resize signal before the path is rebuilt.
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Coalesces bursts of resize signals into a single delayed recomputation.
///
/// At most one timer is pending at a time: every signal clears the previous
/// timer before arming a new one.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet_period: Duration,
    pending: Option<TimerHandle>,
}

impl ResizeDebouncer {
    /// Debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Quiet period between the last signal and the recomputation.
    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Whether a recomputation is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Register one resize signal.
    pub fn notify(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.clear_timeout(handle);
        }
        self.pending = Some(scheduler.set_timeout(self.quiet_period));
    }

    /// Claim a fired timer. Returns `true` only for the currently armed one.
    pub fn take(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Disarm. A no-op when nothing is pending.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.clear_timeout(handle);
        }
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_PERIOD)
    }
}

impl<R: RenderSink> ConnectionBeam<R> {
    /// Feed one resize signal into the debouncer.
    ///
    /// Ignored while the beam is stopped.
    pub fn notify_resize(&mut self, scheduler: &mut dyn Scheduler) {
        if self.subscription.is_none() {
            log::debug!("resize signal ignored, beam is not started");
            return;
        }
        self.debouncer.notify(scheduler);
    }

    /// Route a resize broadcast. Returns `false` if `id` is not this beam's
    /// subscription.
    pub fn handle_resize(
        &mut self,
        id: SubscriptionId,
        scheduler: &mut dyn Scheduler,
    ) -> bool {
        if self.subscription != Some(id) {
            return false;
        }
        self.notify_resize(scheduler);
        true
    }

    /// The debounce timer fired: rebuild the snapshot from current layout.
    pub(super) fn on_resize_timer(&mut self, handle: TimerHandle) -> bool {
        if !self.debouncer.take(handle) {
            return false;
        }
        if let Err(e) = self.recompute() {
            log::error!("beam recomputation after resize failed: {e}");
        }
        true
    }
}
