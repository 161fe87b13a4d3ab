// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{BatchError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `workers >= 1` (a zero-slot pool could never admit anything)
/// - the extension filter is non-empty and carries its leading dot, since
///   selection compares it for exact equality against the file suffix
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_workers(cfg.batch.workers)?;
    validate_extension(&cfg.batch.extension)?;
    Ok(())
}

pub(crate) fn validate_workers(workers: usize) -> Result<()> {
    if workers == 0 {
        return Err(BatchError::Config(
            "worker limit must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_extension(extension: &str) -> Result<()> {
    if !extension.starts_with('.') || extension.len() < 2 {
        return Err(BatchError::Config(format!(
            "extension filter must be a suffix including the leading dot, e.g. \".txt\" (got {:?})",
            extension
        )));
    }
    Ok(())
}
