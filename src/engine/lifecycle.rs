//! Start, stop and wakeup routing.

use super::ConnectionBeam;
use crate::error::BeamError;
use crate::layout::ResizeSource;
use crate::render::RenderSink;
use crate::scheduler::{Scheduler, Wakeup};

impl<R: RenderSink> ConnectionBeam<R> {
    /// Compute the initial path, subscribe to resizes, and begin the
    /// perpetual highlight loop.
    ///
    /// Calling `start` on a running beam does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::MissingAnchor`] if either anchor was never
    /// attached. Nothing is scheduled in that case.
    pub fn start(
        &mut self,
        scheduler: &mut dyn Scheduler,
        resize: &mut dyn ResizeSource,
    ) -> Result<(), BeamError> {
        if self.is_running() {
            return Ok(());
        }
        if let Err(e) = self.recompute() {
            log::error!("connection beam cannot start: {e}");
            return Err(e);
        }

        let subscription = resize.subscribe();
        self.subscription = Some(subscription);
        self.driver.start(scheduler);
        log::info!(
            "connection beam started ({subscription}, {:.3}s cycle)",
            self.duration().as_secs_f64()
        );
        Ok(())
    }

    /// Cancel the pending frame and resize timer and drop the resize
    /// subscription. Safe to call repeatedly or on a beam never started.
    pub fn stop(
        &mut self,
        scheduler: &mut dyn Scheduler,
        resize: &mut dyn ResizeSource,
    ) {
        let was_running = self.is_running();
        self.driver.cancel(scheduler);
        self.debouncer.cancel(scheduler);
        if let Some(subscription) = self.subscription.take() {
            resize.unsubscribe(subscription);
        }
        if was_running {
            log::info!("connection beam stopped");
        }
    }

    /// Whether the highlight loop is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Whether any frame or timer is still outstanding.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.driver.is_running() || self.debouncer.is_pending()
    }

    /// Process a wakeup from the scheduler. Returns `false` if the wakeup
    /// belongs to someone else.
    pub fn handle_wakeup(
        &mut self,
        wakeup: &Wakeup,
        scheduler: &mut dyn Scheduler,
    ) -> bool {
        match *wakeup {
            Wakeup::Frame { handle, timestamp } => {
                self.on_frame(handle, timestamp, scheduler)
            }
            Wakeup::Timer { handle } => self.on_resize_timer(handle),
        }
    }
}
