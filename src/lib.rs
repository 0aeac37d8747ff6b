// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated gradient beam connecting two layout elements.
//!
//! A beam is a straight or quadratic path drawn between the centers of two
//! externally owned elements, expressed in their container's coordinate
//! space, with a gradient highlight that travels along it forever.
//!
//! # Key entry points
//!
//! - [`engine::ConnectionBeam`] - one beam instance and its lifecycle
//! - [`geometry::PathGeometry`] - anchor centers, orientation and path
//! - [`animation::GradientCoordinates`] - the gradient keyframe table
//! - [`scheduler::Scheduler`] - the host frame/timer loop the beam runs on
//! - [`options::BeamOptions`] - configuration with TOML presets
//!
//! # Architecture
//!
//! Everything is single-threaded and cooperative. The host owns a
//! [`scheduler::Scheduler`] and a [`layout::ResizeSource`], lends them to
//! the beam on each call, and routes the [`scheduler::Wakeup`]s and resize
//! broadcasts back to it. Resize bursts are debounced into one
//! recomputation that replaces the path and gradient table together;
//! every frame eases the cycle progress and emits four gradient coordinates
//! to a [`render::RenderSink`].

pub mod animation;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod options;
pub mod render;
pub mod scheduler;
pub mod util;

pub use engine::ConnectionBeam;
pub use error::BeamError;
