//! Long line detection (`cll`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregator::Inspector;
use crate::config::CllConfig;
use crate::error::{Result, ToolshedError};

/// A line longer than the configured maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongLine {
    pub file: PathBuf,
    /// 1-based.
    pub line_number: usize,
    /// Characters after tab expansion.
    pub length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongLineChecker {
    max_length: usize,
    tab_width: usize,
}

impl Default for LongLineChecker {
    fn default() -> Self {
        Self::from_config(&CllConfig::default())
    }
}

impl LongLineChecker {
    #[must_use]
    pub const fn new(max_length: usize, tab_width: usize) -> Self {
        Self {
            max_length,
            tab_width,
        }
    }

    #[must_use]
    pub const fn from_config(config: &CllConfig) -> Self {
        Self::new(config.max_length, config.tab_width)
    }

    /// Display length of one line: a tab counts `tab_width`, anything else one.
    #[must_use]
    pub fn line_length(&self, line: &str) -> usize {
        line.chars()
            .map(|c| if c == '\t' { self.tab_width } else { 1 })
            .sum()
    }

    /// Every line of `reader` longer than the maximum, attributed to `path`.
    ///
    /// Lines end at `\n`; a trailing `\r` is not counted. Invalid UTF-8
    /// sequences count as one character each.
    ///
    /// # Errors
    /// Returns an error if reading fails.
    pub fn check_reader<R: BufRead>(
        &self,
        path: &Path,
        reader: R,
    ) -> std::io::Result<Vec<LongLine>> {
        let mut long_lines = Vec::new();
        for (idx, line) in reader.split(b'\n').enumerate() {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let length = self.line_length(&String::from_utf8_lossy(&line));
            if length > self.max_length {
                long_lines.push(LongLine {
                    file: path.to_path_buf(),
                    line_number: idx + 1,
                    length,
                });
            }
        }
        Ok(long_lines)
    }
}

impl Inspector for LongLineChecker {
    type Output = Vec<LongLine>;

    fn inspect_file(&self, path: &Path) -> Result<Vec<LongLine>> {
        let read_failed = |source: std::io::Error| ToolshedError::ReadFailed {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_failed)?;
        self.check_reader(path, BufReader::new(file))
            .map_err(read_failed)
    }

    fn merge(&self, _dir: &Path, children: Vec<Vec<LongLine>>) -> Vec<LongLine> {
        children.into_iter().flatten().collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
