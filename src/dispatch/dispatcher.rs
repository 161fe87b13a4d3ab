// src/dispatch/dispatcher.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::dispatch::summary::BatchSummary;
use crate::errors::Result;
use crate::exec::{JobCommand, JobRunner, JobSpec};

/// The admission-control loop coordinating one batch run.
///
/// Capacity is a counting semaphore with one permit per worker slot: a
/// permit is acquired *before* a job is spawned and travels with the job, so
/// the ceiling is exact and the loop wakes as soon as a slot frees, with no
/// polling. Files are admitted in the order they were selected (FIFO); no
/// ordering is guaranteed on completion.
pub struct Dispatcher {
    runner: Arc<dyn JobRunner>,
    workers: usize,
}

impl Dispatcher {
    pub fn new(runner: Arc<dyn JobRunner>, workers: usize) -> Self {
        Self { runner, workers }
    }

    /// Run one batch to completion.
    ///
    /// Every file is submitted exactly once; a job whose process fails is
    /// recorded in the summary and its slot reused, it never halts the loop
    /// or the remaining files. Control does not return until all submitted
    /// jobs have finished (in-flight jobs are never cancelled; there is no
    /// per-job timeout).
    pub async fn run(&self, files: Vec<PathBuf>, command: JobCommand) -> Result<BatchSummary> {
        info!(
            files = files.len(),
            workers = self.workers,
            what = %command.what,
            "batch dispatch started"
        );

        let slots = Arc::new(Semaphore::new(self.workers));
        let mut handles = Vec::with_capacity(files.len());

        for file in files {
            // Admission: blocks while all slots are taken. The permit is
            // released by the worker task when the job's process exits.
            let permit = slots
                .clone()
                .acquire_owned()
                .await
                .context("acquiring a worker slot")?;

            let spec = JobSpec::new(file, command.clone());
            let runner = Arc::clone(&self.runner);

            debug!(file = %spec.file.display(), "job admitted");
            handles.push(tokio::spawn(async move {
                let outcome = runner.run(spec).await;
                drop(permit);
                outcome
            }));
        }

        // Drain: the queue is empty, wait for every in-flight job.
        let mut summary = BatchSummary::default();
        for handle in handles {
            let outcome = handle.await.context("joining a job task")?;
            summary.record(outcome);
        }

        if summary.failed > 0 {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "batch finished with failures"
            );
            for (file, code) in &summary.failures {
                warn!(file = %file.display(), exit_code = code, "job failed");
            }
        } else {
            info!(total = summary.total(), "batch finished, all jobs succeeded");
        }

        Ok(summary)
    }
}
