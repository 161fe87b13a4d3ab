// src/dispatch/mod.rs

//! Bounded-concurrency batch dispatching.
//!
//! This module ties together:
//! - the admission loop that keeps at most `workers` jobs in flight
//! - per-job outcome types reported back from the execution layer
//! - the end-of-run summary accumulated while draining

pub mod dispatcher;
pub mod summary;

pub use dispatcher::Dispatcher;
pub use summary::{BatchSummary, JobOutcome, JobStatus};
