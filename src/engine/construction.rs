//! Construction, configuration and geometry recomputation.

use std::time::Duration;

use super::{ConnectionBeam, PathState, ResizeDebouncer};
use crate::animation::AnimationDriver;
use crate::error::{AnchorRole, BeamError};
use crate::geometry::PathGeometry;
use crate::layout::ElementRef;
use crate::options::BeamOptions;
use crate::render::RenderSink;

impl<R: RenderSink> ConnectionBeam<R> {
    /// A beam drawn inside `container`. Anchors are attached with
    /// [`with_anchors`](Self::with_anchors) or
    /// [`set_anchors`](Self::set_anchors) before [`start`](Self::start).
    ///
    /// An unset duration is resolved to a random value here, once.
    #[must_use]
    pub fn new(container: ElementRef, options: BeamOptions, sink: R) -> Self {
        let duration = options.animation.resolve_duration();
        let driver = AnimationDriver::new(
            options.animation.delay(),
            duration,
            options.animation.easing,
        );
        log::debug!(
            "beam created: {:.3}s cycle, {:.3}s delay",
            duration.as_secs_f64(),
            options.animation.delay().as_secs_f64()
        );

        Self {
            container,
            from: None,
            to: None,
            options,
            sink,
            state: PathState::default(),
            driver,
            debouncer: ResizeDebouncer::default(),
            subscription: None,
        }
    }

    /// Attach both anchors (builder form).
    #[must_use]
    pub fn with_anchors(mut self, from: ElementRef, to: ElementRef) -> Self {
        self.set_anchors(from, to);
        self
    }

    /// Attach or replace both anchors. Takes effect on the next
    /// recomputation.
    pub fn set_anchors(&mut self, from: ElementRef, to: ElementRef) {
        self.from = Some(from);
        self.to = Some(to);
    }

    /// Flip the highlight direction. Rebuilds the snapshot right away when
    /// both anchors are attached.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.options.animation.reverse = reverse;
        self.refresh_if_anchored();
    }

    /// Change the path curvature. Rebuilds the snapshot right away when
    /// both anchors are attached.
    pub fn set_curvature(&mut self, curvature: f64) {
        self.options.geometry.curvature = curvature;
        self.refresh_if_anchored();
    }

    /// Current configuration.
    #[must_use]
    pub fn options(&self) -> &BeamOptions {
        &self.options
    }

    /// Latest path snapshot.
    #[must_use]
    pub fn state(&self) -> &PathState {
        &self.state
    }

    /// Resolved cycle duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.driver.duration()
    }

    /// The render sink.
    #[must_use]
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// Both anchors, or the configuration error naming the missing one.
    pub(super) fn anchors(&self) -> Result<(ElementRef, ElementRef), BeamError> {
        let from = self
            .from
            .clone()
            .ok_or(BeamError::MissingAnchor(AnchorRole::From))?;
        let to = self
            .to
            .clone()
            .ok_or(BeamError::MissingAnchor(AnchorRole::To))?;
        Ok((from, to))
    }

    /// Rebuild the snapshot from current layout and hand it to the sink.
    pub(super) fn recompute(&mut self) -> Result<(), BeamError> {
        let (from, to) = self.anchors()?;
        self.refresh(&from, &to);
        Ok(())
    }

    fn refresh_if_anchored(&mut self) {
        if let Ok((from, to)) = self.anchors() {
            self.refresh(&from, &to);
        }
    }

    fn refresh(&mut self, from: &ElementRef, to: &ElementRef) {
        let container = self.container.bounding_rect();
        let from_rect = from.bounding_rect();
        let to_rect = to.bounding_rect();
        if from_rect.is_degenerate() || to_rect.is_degenerate() {
            log::debug!("beam anchor has no area, drawing anyway");
        }

        let geometry = PathGeometry::build(
            &container,
            &from_rect,
            &to_rect,
            &self.options.geometry.offsets(),
            self.options.geometry.curvature,
        );
        self.state =
            PathState::from_geometry(geometry, self.options.animation.reverse);
        log::debug!(
            "beam path {} ({:?}, reverse={})",
            self.state.path,
            self.state.orientation,
            self.options.animation.reverse
        );
        self.sink.update_path(&self.state);
    }
}
