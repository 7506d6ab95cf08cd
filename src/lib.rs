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

//! Tap-driven bounce sweep over a row of animated nodes.
//!
//! Each node draws a square, a line and a filled arc whose shapes follow a
//! single scale value. One tap animates one node through a unit of motion
//! (scale 0 to 1, or back); the sweep then moves to the next node, walking
//! the row left to right and back again.
//!
//! # Key entry points
//!
//! - [`renderer::Renderer`] - composition root: taps, ticks, redraws
//! - [`animation`] - scale state, node chain, sweep, tick scheduler
//! - [`draw`] - the [`draw::Canvas`] surface and node geometry
//! - [`options::Options`] - chain length, timing, sizing and colors
//! - `Viewer` (feature `viewer`) - winit window with a wgpu canvas
//!
//! # Architecture
//!
//! Everything runs on the event-loop thread. The loop sleeps until
//! [`renderer::Renderer::next_deadline`], runs the due ticks, and redraws
//! by recording a [`draw::DisplayList`] that [`gpu::ShapeRenderer`]
//! tessellates and submits.

pub mod animation;
pub mod draw;
pub mod error;
pub mod gpu;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::ArcSweepError;
pub use options::Options;
pub use renderer::Renderer;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
