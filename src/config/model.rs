// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [batch]
/// workers = 4
/// extension = ".txt"
/// what = "py lle_wolf.py"
/// arguments = "-d 2 -t 1"
/// ```
///
/// All sections are optional and have reasonable defaults, so an empty file
/// (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// Dispatch defaults from `[batch]`.
    #[serde(default)]
    pub batch: BatchSection,
}

/// `[batch]` section.
///
/// These are *defaults*; the `--workers` and `--extension` CLI flags take
/// precedence when given.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSection {
    /// Maximum number of jobs allowed to run concurrently.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Suffix filter for input file discovery, including the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Default job program for runs that omit `--what`.
    #[serde(default)]
    pub what: Option<String>,

    /// Default trailing arguments for runs that omit `--arguments`.
    #[serde(default)]
    pub arguments: Option<String>,
}

fn default_workers() -> usize {
    4
}

fn default_extension() -> String {
    ".txt".to_string()
}

impl Default for BatchSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            extension: default_extension(),
            what: None,
            arguments: None,
        }
    }
}
