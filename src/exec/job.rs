// src/exec/job.rs

//! Individual job process execution.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::process::Command;
use tracing::{error, info};

use crate::dispatch::JobOutcome;

/// The batch-wide command template, opaque to the dispatcher.
#[derive(Debug, Clone)]
pub struct JobCommand {
    /// Program or script identifier, e.g. `py lle_wolf.py` or `./solver`.
    pub what: String,
    /// Raw trailing arguments appended verbatim to every invocation.
    pub arguments: String,
}

impl JobCommand {
    pub fn new(what: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            arguments: arguments.into(),
        }
    }

    /// The shell line run for one input file: `<what> -f "<file>" <arguments>`.
    pub fn shell_line(&self, file: &Path) -> String {
        let mut line = format!("{} -f \"{}\"", self.what, file.display());
        if !self.arguments.is_empty() {
            line.push(' ');
            line.push_str(&self.arguments);
        }
        line
    }
}

/// One unit of work: a single input file plus the batch-wide command.
///
/// Created when selection yields a path, consumed exactly once by a runner,
/// discarded after the process exits. No retry, no requeue.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub file: PathBuf,
    pub command: JobCommand,
}

impl JobSpec {
    pub fn new(file: PathBuf, command: JobCommand) -> Self {
        Self { file, command }
    }
}

/// Trait abstracting how one job is executed.
///
/// Production code uses [`ProcessRunner`]; tests can provide their own
/// implementation that records admissions or simulates slow jobs instead of
/// spawning OS processes.
pub trait JobRunner: Send + Sync {
    /// Run the job to completion and report its outcome.
    ///
    /// Implementations must not panic on process failure; a bad job becomes
    /// a `Failed` outcome, never an abort.
    fn run(&self, spec: JobSpec) -> Pin<Box<dyn Future<Output = JobOutcome> + Send + '_>>;
}

/// Real job runner used in production: spawns the command through the
/// platform shell and waits for it to exit.
pub struct ProcessRunner;

impl JobRunner for ProcessRunner {
    fn run(&self, spec: JobSpec) -> Pin<Box<dyn Future<Output = JobOutcome> + Send + '_>> {
        Box::pin(run_process(spec))
    }
}

async fn run_process(spec: JobSpec) -> JobOutcome {
    let line = spec.command.shell_line(&spec.file);
    info!(file = %spec.file.display(), cmd = %line, "starting job process");

    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(&line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(&line);
        c
    };

    // The job's own stdout/stderr are its diagnostics; they stay attached to
    // the dispatcher's terminal, nothing here interprets them.
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            error!(file = %spec.file.display(), error = %err, "failed to spawn job process");
            return JobOutcome::failed(spec.file, -1);
        }
    };

    let status = match child.wait().await {
        Ok(status) => status,
        Err(err) => {
            error!(file = %spec.file.display(), error = %err, "failed waiting for job process");
            return JobOutcome::failed(spec.file, -1);
        }
    };

    let code = status.code().unwrap_or(-1);
    info!(
        file = %spec.file.display(),
        exit_code = code,
        success = status.success(),
        "job process exited"
    );

    if status.success() {
        JobOutcome::success(spec.file)
    } else {
        JobOutcome::failed(spec.file, code)
    }
}
