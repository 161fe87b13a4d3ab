// src/series/window.rs

//! Numeric window extraction from whitespace-delimited matrix files.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::errors::Result;

/// Which part of the matrix holds the series.
#[derive(Debug, Clone, Copy)]
pub struct WindowSpec {
    /// Zero-based column index of the series within the matrix.
    pub column: usize,

    /// First row of the window (inclusive); `None` means from the start.
    pub start: Option<usize>,

    /// Last row of the window (exclusive); `None` means to the end. An end
    /// past the last row is clamped, not an error.
    pub stop: Option<usize>,
}

impl Default for WindowSpec {
    fn default() -> Self {
        // The observation column of a two-column (time, value) file.
        Self {
            column: 1,
            start: None,
            stop: None,
        }
    }
}

/// Read the selected window of one column as a series of `f64`.
///
/// The whole file is parsed as a rectangular matrix before the window is
/// sliced out: blank lines and `#` comment lines are skipped, but every kept
/// row must parse and carry the same number of columns, even rows outside
/// the window. A ragged row, an unparsable token, or a matrix too narrow for
/// the requested column is an error.
pub fn load_window(path: &Path, spec: &WindowSpec) -> Result<Vec<f64>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading time series file {:?}", path))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (line_no, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value: f64 = token.parse().with_context(|| {
                format!(
                    "parsing {:?} at line {} of {:?}",
                    token,
                    line_no + 1,
                    path
                )
            })?;
            row.push(value);
        }

        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(anyhow!(
                    "line {} of {:?} has {} columns, expected {}",
                    line_no + 1,
                    path,
                    row.len(),
                    w
                )
                .into());
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    if let Some(w) = width {
        if spec.column >= w {
            return Err(anyhow!("{:?} has {} columns, no column {}", path, w, spec.column).into());
        }
    }

    let start = spec.start.unwrap_or(0).min(rows.len());
    let stop = spec.stop.unwrap_or(rows.len()).min(rows.len()).max(start);
    Ok(rows[start..stop].iter().map(|r| r[spec.column]).collect())
}
