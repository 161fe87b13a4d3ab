// src/errors.rs

//! Crate-wide error types and helpers.
//!
//! Configuration and selection errors are fatal and abort the run before any
//! job is submitted. Per-job process failures are deliberately *not* errors
//! at this level; they travel through `dispatch::JobOutcome` instead so that
//! one bad job never aborts the batch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no input files found: {0}")]
    NoFilesFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BatchError>;
