// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `chaosbatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "chaosbatch",
    version,
    about = "Run an analysis command over every time-series file in a folder, \
             with a bounded number of jobs in flight.",
    long_about = None
)]
pub struct CliArgs {
    /// Folder containing the time-series file(s) to batch over.
    #[arg(short = 'F', long, value_name = "PATH")]
    pub folder: PathBuf,

    /// Program or script to run once per input file.
    ///
    /// It is invoked through the shell as `<what> -f "<file>" <arguments>`,
    /// so it may carry its own interpreter prefix, e.g. `py lle_wolf.py`.
    /// Falls back to `[batch].what` from the config file; a run with
    /// neither is a configuration error.
    #[arg(short = 'w', long, value_name = "CMD")]
    pub what: Option<String>,

    /// Raw trailing arguments forwarded verbatim to every job invocation.
    ///
    /// Falls back to `[batch].arguments` from the config file; default
    /// empty.
    #[arg(short = 'a', long, value_name = "STRING", allow_hyphen_values = true)]
    pub arguments: Option<String>,

    /// Maximum number of jobs allowed to run at the same time.
    ///
    /// Overrides `[batch].workers` from the config file. Default: 4.
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Suffix filter for input file discovery, including the leading dot.
    ///
    /// Overrides `[batch].extension` from the config file. Default: `.txt`.
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Chaosbatch.toml` in the current working directory is
    /// used when it exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CHAOSBATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
