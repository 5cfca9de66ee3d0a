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

//! Frame-rate independent cursor motion trail animator.
//!
//! Tracks a moving cursor rectangle and produces a trailing "smear"
//! quadrilateral plus an opacity, sampled once per display frame. The
//! animator owns a handful of scalars, never allocates beyond its output
//! polygon, never blocks, and takes all timing from caller-supplied
//! millisecond timestamps.
//!
//! # Key entry points
//!
//! - [`trail::CursorTrail`] - the per-cursor animation state machine
//! - [`geometry::Rect`] - cursor rectangles in and out
//! - [`options::Options`] - TOML-backed tunables with presets and schema
//! - [`replay`] - headless replay of recorded observations
//!
//! # Usage
//!
//! ```
//! use cursor_trail::{geometry::Rect, trail::CursorTrail};
//!
//! let mut trail = CursorTrail::new();
//! trail.update(Rect::new(0.0, 0.0, 10.0, 20.0), 1000);
//! trail.update(Rect::new(50.0, 0.0, 10.0, 20.0), 1016);
//! assert!(trail.needs_render());
//! let _corners = trail.trail_polygon();
//! ```

pub mod error;
pub mod geometry;
pub mod options;
pub mod replay;
pub mod trail;
pub mod util;
