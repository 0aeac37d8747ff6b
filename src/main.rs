//! Headless demo: runs one beam against the wall clock, simulates a layout
//! change halfway through, and writes the final frame as an SVG document.
//!
//! Usage: `connection-beam [options.toml] [output.svg]`

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use connection_beam::geometry::Rect;
use connection_beam::layout::{FixedElement, ResizeHub};
use connection_beam::options::BeamOptions;
use connection_beam::render::SvgSink;
use connection_beam::scheduler::RealtimeScheduler;
use connection_beam::{BeamError, ConnectionBeam};

const RUN_TIME: Duration = Duration::from_secs(3);

fn main() -> Result<(), BeamError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => BeamOptions::load(Path::new(&path))?,
        None => BeamOptions::default(),
    };
    let output = args
        .next()
        .map_or_else(|| PathBuf::from("beam.svg"), PathBuf::from);

    let container = FixedElement::shared(Rect::new(0.0, 0.0, 640.0, 360.0));
    let from = FixedElement::shared(Rect::new(40.0, 160.0, 40.0, 40.0));
    let to = FixedElement::shared(Rect::new(560.0, 160.0, 40.0, 40.0));

    let sink = SvgSink::new(options.style.clone());
    let mut beam =
        ConnectionBeam::new(container, options, sink).with_anchors(from, to.clone());
    let mut scheduler = RealtimeScheduler::default();
    let mut hub = ResizeHub::new();

    beam.start(&mut scheduler, &mut hub)?;

    let started = Instant::now();
    let mut resized = false;
    while started.elapsed() < RUN_TIME {
        if !resized && started.elapsed() >= RUN_TIME / 2 {
            to.set_rect(Rect::new(300.0, 300.0, 40.0, 40.0));
            for id in hub.broadcast() {
                let _ = beam.handle_resize(id, &mut scheduler);
            }
            log::info!("simulated layout change");
            resized = true;
        }
        for wakeup in scheduler.wait_next() {
            let _ = beam.handle_wakeup(&wakeup, &mut scheduler);
        }
    }

    beam.stop(&mut scheduler, &mut hub);
    std::fs::write(&output, beam.sink().render())?;
    log::info!(
        "wrote {} after {} frames ({:.1} fps), path {}",
        output.display(),
        beam.sink().frames(),
        scheduler.fps(),
        beam.state().path
    );
    Ok(())
}
