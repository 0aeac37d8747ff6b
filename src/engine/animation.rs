//! Per-frame animation for ConnectionBeam

use super::ConnectionBeam;
use crate::render::{GradientFrame, RenderSink};
use crate::scheduler::{FrameHandle, Scheduler};

impl<R: RenderSink> ConnectionBeam<R> {
    /// Run one frame of the highlight loop.
    ///
    /// Interpolates the current keyframe table at the eased progress, emits
    /// the four coordinates, and requests the next frame whether or not the
    /// cycle just completed.
    pub(super) fn on_frame(
        &mut self,
        handle: FrameHandle,
        timestamp: f64,
        scheduler: &mut dyn Scheduler,
    ) -> bool {
        if !self.driver.take_frame(handle) {
            return false;
        }

        let progress = self.driver.advance(timestamp);
        let frame = GradientFrame::from(self.state.gradient.at(progress.eased_t));
        log::trace!("beam frame t={:.4} eased={:.4}: {frame}", progress.t, progress.eased_t);
        self.sink.update_gradient(&frame);

        if progress.cycle_complete {
            log::trace!("beam cycle complete at {timestamp}ms");
        }
        self.driver.schedule_next(scheduler);
        true
    }
}
