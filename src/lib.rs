// src/lib.rs

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod select;
pub mod series;

use std::sync::Arc;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::{load_effective, validate};
use crate::dispatch::{BatchSummary, Dispatcher};
use crate::errors::{BatchError, Result};
use crate::exec::{JobCommand, ProcessRunner};
use crate::select::{select_files, SelectSpec};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (CLI flags override file defaults)
/// - input file selection
/// - the bounded-concurrency dispatcher with the real process runner
pub async fn run(args: CliArgs) -> Result<BatchSummary> {
    let cfg = load_effective(args.config.as_deref())?;

    let workers = args.workers.unwrap_or(cfg.batch.workers);
    let extension = args
        .extension
        .clone()
        .unwrap_or_else(|| cfg.batch.extension.clone());
    let what = args
        .what
        .clone()
        .or_else(|| cfg.batch.what.clone())
        .unwrap_or_default();
    let arguments = args
        .arguments
        .clone()
        .or_else(|| cfg.batch.arguments.clone())
        .unwrap_or_default();

    validate_run(&args, &what, workers, &extension)?;

    let spec = SelectSpec::folder_scan(&args.folder, extension.as_str());
    let files = select_files(&spec)?;
    info!(
        files = files.len(),
        folder = %args.folder.display(),
        extension = %extension,
        "selected input files"
    );

    let command = JobCommand::new(what, arguments);
    let dispatcher = Dispatcher::new(Arc::new(ProcessRunner), workers);
    let summary = dispatcher.run(files, command).await?;

    // Per-job failures are reported in the summary but never change the
    // dispatcher's own exit status.
    Ok(summary)
}

/// Check the effective run parameters before touching any input file.
fn validate_run(args: &CliArgs, what: &str, workers: usize, extension: &str) -> Result<()> {
    if what.trim().is_empty() {
        return Err(BatchError::Config(
            "no job command given; pass --what or set `what` under [batch] in the config"
                .to_string(),
        ));
    }
    if !args.folder.is_dir() {
        return Err(BatchError::Config(format!(
            "--folder {:?} is not an existing directory",
            args.folder
        )));
    }
    validate::validate_workers(workers)?;
    validate::validate_extension(extension)?;
    Ok(())
}
