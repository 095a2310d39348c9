use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolshedError {
    #[error("Cannot open file {}.", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot stat open file {}.", path.display())]
    StatFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {}: {source}", path.display())]
    ListFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Failed to parse git log: {0}")]
    ChangelogParse(String),

    #[error("Failed to run {command}: {source}")]
    Command {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Server error: {0}")]
    Serve(String),
}

impl ToolshedError {
    /// Short label of the error kind, used in structured output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::StatFailed { .. } => "StatFailed",
            Self::ReadFailed { .. } => "ReadFailed",
            Self::ListFailed { .. } => "ListFailed",
            Self::NotADirectory(_) => "NotADirectory",
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::Git(_) => "Git",
            Self::ChangelogParse(_) => "ChangelogParse",
            Self::Command { .. } => "Command",
            Self::Watch(_) => "Watch",
            Self::Serve(_) => "Serve",
        }
    }

    /// The path an aggregation error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::StatFailed { path, .. }
            | Self::ReadFailed { path, .. }
            | Self::ListFailed { path, .. } => Some(path),
            Self::NotADirectory(path) => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolshedError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
