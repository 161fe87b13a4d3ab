// src/series/output.rs

//! Result file layout.
//!
//! Each job writes `<input stem>.txt` into an output subdirectory nested
//! inside the input file's own directory (e.g. `data/LLE/wolf/run1.txt` for
//! input `data/run1.txt` and subdirectory `LLE/wolf`). Distinct inputs in
//! the same folder therefore write distinct outputs; there is no cross-job
//! write contention by construction.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::errors::Result;
use crate::series::solver::SolverOutput;

/// Output path for one input file: `<input dir>/<subdir>/<input stem>.txt`.
pub fn output_path(input: &Path, subdir: &Path) -> PathBuf {
    let mut name = input.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(".txt");
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(subdir)
        .join(name)
}

/// Render and write one result, creating the output directory chain as
/// needed. Returns the written path.
pub fn write_output(input: &Path, subdir: &Path, output: &SolverOutput) -> Result<PathBuf> {
    let path = output_path(input, subdir);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {:?}", dir))?;
    }
    fs::write(&path, output.render())
        .with_context(|| format!("writing result file {:?}", path))?;
    Ok(path)
}
