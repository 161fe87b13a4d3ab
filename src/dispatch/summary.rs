// src/dispatch/summary.rs

use std::path::PathBuf;

/// Result of one job's external process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Success,
    Failed(i32), // exit code; -1 when there is none (signal, spawn error)
}

/// Per-job result reported back to the dispatcher.
///
/// A failed job is data, not control flow: it frees its slot like any other
/// completion and is surfaced only through the [`BatchSummary`].
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub file: PathBuf,
    pub status: JobStatus,
}

impl JobOutcome {
    pub fn success(file: PathBuf) -> Self {
        Self {
            file,
            status: JobStatus::Success,
        }
    }

    pub fn failed(file: PathBuf, code: i32) -> Self {
        Self {
            file,
            status: JobStatus::Failed(code),
        }
    }
}

/// End-of-run accounting across all jobs of one batch.
///
/// The summary never changes the dispatcher's exit status; it exists so a
/// caller can tell "all jobs succeeded" apart from "some jobs silently
/// failed" without inspecting each job's own output files.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Failed input files with their exit codes, in submission order (the
    /// dispatcher joins its job handles in the order it spawned them).
    pub failures: Vec<(PathBuf, i32)>,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: JobOutcome) {
        match outcome.status {
            JobStatus::Success => self.succeeded += 1,
            JobStatus::Failed(code) => {
                self.failed += 1;
                self.failures.push((outcome.file, code));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}
