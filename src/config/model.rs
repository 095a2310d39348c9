use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Effective configuration for every tool, read from `.toolshed.toml`.
///
/// Every section is optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub cll: CllConfig,
    pub serve: ServeConfig,
    pub watch: WatchConfig,
    pub changelog: ChangelogConfig,
    pub scanner: ScannerConfig,

    /// Extra languages for `cloc` and `todo` [languages.X].
    /// An extension listed here takes over the built-in mapping.
    pub languages: HashMap<String, CustomLanguageConfig>,
}

/// Long line checker settings [cll].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CllConfig {
    /// Lines strictly longer than this are reported.
    pub max_length: usize,
    /// Columns a tab character counts for.
    pub tab_width: usize,
}

impl Default for CllConfig {
    fn default() -> Self {
        Self {
            max_length: 80,
            tab_width: 2,
        }
    }
}

/// Static file server settings [serve].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServeConfig {
    pub port: u16,
    pub directory: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            directory: PathBuf::from("."),
        }
    }
}

/// File watcher settings [watch].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WatchConfig {
    /// Swallow the command's stdout.
    pub quiet: bool,
    /// Kill a run that takes longer than this many seconds.
    pub timeout_secs: u64,
    /// Quiet period that closes a burst of change events.
    pub debounce_ms: u64,
    /// Paths watched recursively; empty means the current directory.
    pub paths: Vec<PathBuf>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            timeout_secs: 10,
            debounce_ms: 100,
            paths: Vec::new(),
        }
    }
}

/// Changelog generator settings [changelog].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Write the changelog here instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Directory walking settings used by `todo` [scanner].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScannerConfig {
    /// Respect .gitignore rules.
    pub gitignore: bool,
    /// Glob patterns of files and directories to skip.
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub single_line_comments: Vec<String>,

    #[serde(default)]
    pub multi_line_comments: Vec<(String, String)>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
