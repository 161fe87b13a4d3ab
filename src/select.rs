// src/select.rs

//! Input file selection.
//!
//! One selection policy is shared by every consumer: the batch dispatcher
//! (folder + fixed suffix filter) and the per-file series pipeline (folder
//! and/or explicit file, optional suffix filter). Selection is read-only and
//! idempotent over an unchanged directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::errors::{BatchError, Result};

/// What to select, shared by all job kinds.
#[derive(Debug, Clone, Default)]
pub struct SelectSpec {
    /// Root folder to look in.
    pub folder: Option<PathBuf>,

    /// Explicit file name, resolved against `folder` when both are given,
    /// otherwise against the current working directory.
    pub file: Option<PathBuf>,

    /// Suffix filter including the leading dot (e.g. `.txt`), compared for
    /// exact, case-sensitive equality against the file's final suffix.
    /// `None` selects regardless of suffix.
    pub extension: Option<String>,
}

impl SelectSpec {
    /// Discovery spec used by the batch dispatcher: every matching file
    /// directly under `folder`, non-recursive.
    pub fn folder_scan(folder: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            file: None,
            extension: Some(extension.into()),
        }
    }

    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(folder) = &self.folder {
            parts.push(format!("folder {:?}", folder));
        }
        if let Some(file) = &self.file {
            parts.push(format!("file {:?}", file));
        }
        if let Some(ext) = &self.extension {
            parts.push(format!("extension {:?}", ext));
        }
        if parts.is_empty() {
            "empty selection".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Resolve a [`SelectSpec`] into the concrete list of files to process.
///
/// Policy, in order:
///
/// 1. `folder` set and existing:
///    a. if `file` is set and `folder/file` exists, only that entry is
///       considered (it still has to be a regular file and pass the suffix
///       filter); there is no fallback to scanning the folder,
///    b. otherwise every direct entry of the folder that is a regular file
///       and passes the suffix filter is selected, in directory-listing
///       order (no sorting).
/// 2. otherwise, `file` alone is considered if it exists and is a regular
///    file passing the suffix filter.
///
/// Zero survivors is an error: nothing is ever dispatched for an empty
/// selection.
pub fn select_files(spec: &SelectSpec) -> Result<Vec<PathBuf>> {
    let mut selected: Vec<PathBuf> = Vec::new();
    let extension = spec.extension.as_deref();

    match spec.folder.as_deref().filter(|f| f.exists()) {
        Some(folder) => {
            let explicit = spec.file.as_ref().map(|f| folder.join(f));
            match explicit.filter(|p| p.exists()) {
                Some(path) => {
                    if path.is_file() && matches_extension(&path, extension) {
                        selected.push(path);
                    }
                }
                None => {
                    let entries = fs::read_dir(folder)
                        .with_context(|| format!("listing folder {:?}", folder))?;
                    for entry in entries {
                        let entry =
                            entry.with_context(|| format!("reading entry of {:?}", folder))?;
                        let path = entry.path();
                        if path.is_file() && matches_extension(&path, extension) {
                            selected.push(path);
                        }
                    }
                }
            }
        }
        None => {
            if let Some(file) = spec.file.as_deref() {
                if file.is_file() && matches_extension(file, extension) {
                    selected.push(file.to_path_buf());
                }
            }
        }
    }

    if selected.is_empty() {
        return Err(BatchError::NoFilesFound(spec.describe()));
    }

    debug!(count = selected.len(), "selection resolved");
    Ok(selected)
}

/// Exact suffix comparison, `pathlib`-style: the suffix of `a.tar.gz` is
/// `.gz`, dotfiles and names with a trailing dot have no suffix. Open choice
/// on case-insensitive filesystems: the comparison stays byte-exact.
fn matches_extension(path: &Path, extension: Option<&str>) -> bool {
    let Some(extension) = extension else {
        return true;
    };
    suffix_of(path).is_some_and(|s| s == extension)
}

fn suffix_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx < name.len() - 1 => Some(&name[idx..]),
        _ => None,
    }
}
