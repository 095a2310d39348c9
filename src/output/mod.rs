mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::TextFormatter;

use crate::checker::LongLine;
use crate::counter::PathCount;
use crate::error::Result;

/// Renders the reports of the inspection commands.
pub trait OutputFormatter {
    /// Format the long lines found by `cll`.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_long_lines(&self, lines: &[LongLine]) -> Result<String>;

    /// Format the per-path totals of `cloc`.
    ///
    /// The grand total is only reported when `complete` is set, i.e. when no
    /// path failed.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_line_counts(&self, counts: &[PathCount], complete: bool) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
