//! The connection beam instance.
//!
//! A [`ConnectionBeam`] owns the derived [`PathState`], the looping
//! [`AnimationDriver`](crate::animation::AnimationDriver) and the
//! [`ResizeDebouncer`]. It borrows a [`Scheduler`](crate::scheduler::Scheduler)
//! and a [`ResizeSource`](crate::layout::ResizeSource) from the host for
//! each call, so all state stays with the instance and nothing is shared
//! behind locks.

mod animation;
mod construction;
mod lifecycle;
mod resize;
mod state;

pub use resize::{ResizeDebouncer, RESIZE_QUIET_PERIOD};
pub use state::PathState;

use crate::animation::AnimationDriver;
use crate::layout::{ElementRef, SubscriptionId};
use crate::options::BeamOptions;
use crate::render::RenderSink;

/// An animated gradient beam between two layout elements.
///
/// Lifecycle: construct, attach anchors, [`start`](Self::start), feed
/// scheduler wakeups to [`handle_wakeup`](Self::handle_wakeup) and resize
/// broadcasts to [`handle_resize`](Self::handle_resize), and finally
/// [`stop`](Self::stop) before dropping.
pub struct ConnectionBeam<R: RenderSink> {
    container: ElementRef,
    from: Option<ElementRef>,
    to: Option<ElementRef>,
    options: BeamOptions,
    sink: R,
    state: PathState,
    driver: AnimationDriver,
    debouncer: ResizeDebouncer,
    subscription: Option<SubscriptionId>,
}

impl<R: RenderSink> std::fmt::Debug for ConnectionBeam<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionBeam")
            .field("has_from", &self.from.is_some())
            .field("has_to", &self.to.is_some())
            .field("path", &self.state.path_data())
            .field("driver", &self.driver)
            .field("debouncer", &self.debouncer)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

impl<R: RenderSink> Drop for ConnectionBeam<R> {
    fn drop(&mut self) {
        if self.has_pending_work() || self.subscription.is_some() {
            log::warn!(
                "connection beam dropped without stop(); its scheduled \
                 frame or timer will fire into nothing"
            );
        }
    }
}
