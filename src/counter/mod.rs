//! Lines-of-code counting (`cloc`).

mod strip;

pub use strip::CommentStripper;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::aggregator::Inspector;
use crate::error::{Result, ToolshedError};
use crate::language::LanguageRegistry;

/// Lines of code found under one command-line path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCount {
    pub path: PathBuf,
    pub lines: usize,
}

/// Counts lines of code in files of known languages.
///
/// Files with an unknown extension count zero and are never read.
#[derive(Debug)]
pub struct LineCounter {
    registry: LanguageRegistry,
    // Parallel to `registry.all()`.
    strippers: Vec<CommentStripper>,
}

impl LineCounter {
    /// Compile the comment patterns of every language in `registry`.
    ///
    /// # Errors
    /// Returns a configuration error if a language's delimiters do not compile.
    pub fn new(registry: LanguageRegistry) -> Result<Self> {
        let strippers = registry
            .all()
            .iter()
            .map(|language| {
                CommentStripper::new(&language.comment_syntax).map_err(|e| {
                    ToolshedError::Config(format!(
                        "invalid comment syntax for {}: {e}",
                        language.name
                    ))
                })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            registry,
            strippers,
        })
    }

    fn stripper_for(&self, path: &Path) -> Option<&CommentStripper> {
        self.registry
            .index_for_path(path)
            .map(|idx| &self.strippers[idx])
    }

    /// Lines of code in `source`, as if it were stored at `path`.
    #[must_use]
    pub fn count_source(&self, path: &Path, source: &[u8]) -> usize {
        self.stripper_for(path)
            .map_or(0, |stripper| stripper.count_code_lines(source))
    }
}

impl Inspector for LineCounter {
    type Output = usize;

    fn inspect_file(&self, path: &Path) -> Result<usize> {
        let Some(stripper) = self.stripper_for(path) else {
            return Ok(0);
        };
        let source = std::fs::read(path).map_err(|source| ToolshedError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = stripper.count_code_lines(&source);
        debug!(path = %path.display(), lines, "counted");
        Ok(lines)
    }

    fn merge(&self, _dir: &Path, children: Vec<usize>) -> usize {
        children.into_iter().sum()
    }

    fn without_reading(&self, path: &Path) -> Option<usize> {
        self.stripper_for(path).is_none().then_some(0)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
