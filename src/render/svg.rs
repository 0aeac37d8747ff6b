//! Standalone SVG document output.

use std::fmt;

use super::{GradientFrame, RenderSink};
use crate::animation::interpolation::format_number;
use crate::engine::PathState;
use crate::options::StyleOptions;

/// Sink that keeps the latest snapshot and frame and renders them as an SVG
/// document: a faint base stroke plus a gradient stroke on top.
#[derive(Debug, Clone)]
pub struct SvgSink {
    style: StyleOptions,
    gradient_id: String,
    state: PathState,
    frame: GradientFrame,
    path_updates: usize,
    frames: usize,
}

impl SvgSink {
    /// Sink with a random, per-instance gradient id.
    #[must_use]
    pub fn new(style: StyleOptions) -> Self {
        let id = format!("beam-gradient-{:016x}", rand::random::<u64>());
        Self::with_gradient_id(style, id)
    }

    /// Sink with an explicit gradient id.
    #[must_use]
    pub fn with_gradient_id(style: StyleOptions, gradient_id: String) -> Self {
        Self {
            style,
            gradient_id,
            state: PathState::default(),
            frame: GradientFrame::from(PathState::default().gradient.at(0.0)),
            path_updates: 0,
            frames: 0,
        }
    }

    /// Id of the `linearGradient` element.
    #[must_use]
    pub fn gradient_id(&self) -> &str {
        &self.gradient_id
    }

    /// Latest path snapshot received.
    #[must_use]
    pub fn state(&self) -> &PathState {
        &self.state
    }

    /// Latest gradient frame received.
    #[must_use]
    pub fn frame(&self) -> &GradientFrame {
        &self.frame
    }

    /// Number of path snapshots received.
    #[must_use]
    pub fn path_updates(&self) -> usize {
        self.path_updates
    }

    /// Number of gradient frames received.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Render the current state as an SVG document.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl RenderSink for SvgSink {
    fn update_path(&mut self, state: &PathState) {
        self.state = state.clone();
        self.path_updates += 1;
    }

    fn update_gradient(&mut self, frame: &GradientFrame) {
        self.frame.clone_from(frame);
        self.frames += 1;
    }
}

/// Attribute-safe text.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for SvgSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = format_number(self.state.dimensions.width);
        let height = format_number(self.state.dimensions.height);
        let stroke_width = format_number(self.style.path_width);
        let id = Escaped(&self.gradient_id);
        let start = Escaped(&self.style.gradient_start_color);
        let stop = Escaped(&self.style.gradient_stop_color);
        let path = &self.state.path;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            f,
            r#"  <path d="{path}" stroke="{}" stroke-width="{stroke_width}" stroke-opacity="{}" stroke-linecap="round"/>"#,
            Escaped(&self.style.path_color),
            format_number(self.style.path_opacity),
        )?;
        writeln!(
            f,
            r#"  <path d="{path}" stroke="url(#{id})" stroke-width="{stroke_width}" stroke-opacity="1" stroke-linecap="round"/>"#
        )?;
        writeln!(f, "  <defs>")?;
        writeln!(
            f,
            r#"    <linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" x2="{}" y1="{}" y2="{}">"#,
            self.frame.x1, self.frame.x2, self.frame.y1, self.frame.y2
        )?;
        writeln!(f, r#"      <stop stop-color="{start}" stop-opacity="0"/>"#)?;
        writeln!(f, r#"      <stop stop-color="{start}"/>"#)?;
        writeln!(f, r#"      <stop offset="32.5%" stop-color="{stop}"/>"#)?;
        writeln!(
            f,
            r#"      <stop offset="100%" stop-color="{stop}" stop-opacity="0"/>"#
        )?;
        writeln!(f, "    </linearGradient>")?;
        writeln!(f, "  </defs>")?;
        writeln!(f, "</svg>")
    }
}
