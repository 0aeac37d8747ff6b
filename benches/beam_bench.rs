//! Benchmarks for the per-frame beam work.

use std::time::Duration;

use connection_beam::animation::GradientCoordinates;
use connection_beam::engine::PathState;
use connection_beam::geometry::{AnchorOffsets, Orientation, PathGeometry, Rect};
use connection_beam::layout::{FixedElement, ResizeHub};
use connection_beam::options::BeamOptions;
use connection_beam::render::{GradientFrame, RenderSink};
use connection_beam::scheduler::ManualScheduler;
use connection_beam::util::easing::EasingFunction;
use connection_beam::ConnectionBeam;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct NullSink;

impl RenderSink for NullSink {
    fn update_path(&mut self, state: &PathState) {
        let _ = black_box(state);
    }

    fn update_gradient(&mut self, frame: &GradientFrame) {
        let _ = black_box(frame);
    }
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::ExponentialOut;
    c.bench_function("exponential_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn path_benchmark(c: &mut Criterion) {
    let container = Rect::new(0.0, 0.0, 200.0, 100.0);
    let from = Rect::new(10.0, 40.0, 20.0, 20.0);
    let to = Rect::new(170.0, 40.0, 20.0, 20.0);
    let offsets = AnchorOffsets::default();

    c.bench_function("build_curved_path", |b| {
        b.iter(|| {
            let geom = PathGeometry::build(
                black_box(&container),
                black_box(&from),
                black_box(&to),
                &offsets,
                black_box(30.0),
            );
            black_box(geom.path.to_string())
        });
    });
}

fn gradient_frame_benchmark(c: &mut Criterion) {
    let table = GradientCoordinates::resolve(Orientation::Vertical, true);
    c.bench_function("gradient_frame", |b| {
        b.iter(|| black_box(GradientFrame::from(table.at(black_box(0.37)))));
    });
}

fn beam_tick_benchmark(c: &mut Criterion) {
    let mut options = BeamOptions::default();
    options.animation.duration = Some(2.0);
    let mut beam = ConnectionBeam::new(
        FixedElement::shared(Rect::new(0.0, 0.0, 200.0, 100.0)),
        options,
        NullSink,
    )
    .with_anchors(
        FixedElement::shared(Rect::new(10.0, 40.0, 20.0, 20.0)),
        FixedElement::shared(Rect::new(170.0, 40.0, 20.0, 20.0)),
    );
    let mut scheduler = ManualScheduler::new();
    let mut hub = ResizeHub::new();
    if beam.start(&mut scheduler, &mut hub).is_err() {
        return;
    }

    c.bench_function("beam_frame", |b| {
        b.iter(|| {
            for wakeup in scheduler.advance_by(Duration::from_millis(16)) {
                let _ = black_box(beam.handle_wakeup(&wakeup, &mut scheduler));
            }
        });
    });
    beam.stop(&mut scheduler, &mut hub);
}

criterion_group!(
    benches,
    easing_benchmark,
    path_benchmark,
    gradient_frame_benchmark,
    beam_tick_benchmark
);
criterion_main!(benches);
