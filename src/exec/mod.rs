// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the per-file analysis
//! command, using `tokio::process::Command`, and reporting a structured
//! `JobOutcome` back to the dispatcher.
//!
//! - [`job`] defines the job types and the [`JobRunner`] seam: production
//!   code uses [`ProcessRunner`], tests can substitute an implementation
//!   that doesn't spawn real processes.

pub mod job;

pub use job::{JobCommand, JobRunner, JobSpec, ProcessRunner};
