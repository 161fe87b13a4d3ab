// src/series/pipeline.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::errors::Result;
use crate::select::{select_files, SelectSpec};
use crate::series::output::write_output;
use crate::series::solver::Solver;
use crate::series::window::{load_window, WindowSpec};

/// Run select → window → compute → write for every selected file, returning
/// the written output paths in selection order.
///
/// Selection failure (no files) is fatal before any computation starts; a
/// failure on one file aborts the pipeline at that file, since unlike the
/// batch dispatcher this runs inside a single job.
pub fn run_series_jobs(
    select: &SelectSpec,
    window: &WindowSpec,
    solver: &dyn Solver,
    output_subdir: &Path,
) -> Result<Vec<PathBuf>> {
    let files = select_files(select)?;
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let series = load_window(&file, window)?;
        let result = solver
            .compute(&series)
            .with_context(|| format!("computing result for {:?}", file))?;
        let path = write_output(&file, output_subdir, &result)?;
        info!(input = %file.display(), output = %path.display(), "series job finished");
        written.push(path);
    }

    Ok(written)
}
