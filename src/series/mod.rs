// src/series/mod.rs

//! Per-file series pipeline shared by every job kind.
//!
//! The analysis scripts this crate batches over all do the same four steps:
//! select input files, extract a numeric window from each, hand the window
//! to a numerical algorithm, and write the rendered result next to the
//! input. This module factors those steps out once:
//!
//! - [`window`] extracts a column/row-range window from a whitespace-
//!   delimited matrix file.
//! - [`solver`] is the narrow boundary to the numerical engine; concrete
//!   algorithms stay behind the [`Solver`] trait.
//! - [`output`] derives the per-input output path and writes results.
//! - [`pipeline`] runs select → window → compute → write per file.

pub mod output;
pub mod pipeline;
pub mod solver;
pub mod window;

pub use output::{output_path, write_output};
pub use pipeline::run_series_jobs;
pub use solver::{Solver, SolverOutput};
pub use window::{load_window, WindowSpec};
