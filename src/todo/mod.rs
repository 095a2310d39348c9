//! TODO comment collection (`todo`).

mod comments;

pub use comments::{CommentGroup, CommentLine, extract_comments};

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::aggregator::{EntryKind, classify};
use crate::error::{Result, ToolshedError};
use crate::language::{CommentSyntax, LanguageRegistry};
use crate::path_utils::clean_path;
use crate::scanner::FileScanner;

pub const NOTHING_TODO: &str = "Nothing, you have done all you needed to do (at least according to the lack of todos in the source code).";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub text: String,
    pub path: PathBuf,
    /// 1-based line of the comment line that starts the item.
    pub line: usize,
}

/// Items in one comment: `(line, text)` pairs.
///
/// A line whose trimmed text is longer than four bytes, starts with `todo`
/// in any case and contains a colon starts an item. Its text is what follows
/// the first colon. Later lines of the same comment are appended until an
/// empty line.
#[must_use]
pub fn todos_in_comment(group: &[CommentLine]) -> Vec<(usize, String)> {
    let mut items: Vec<(usize, String)> = Vec::new();
    let mut continuing = false;

    for comment in group {
        let text = comment.text.trim();
        if let Some(item) = todo_start(text) {
            items.push((comment.line, item));
            continuing = true;
        } else if continuing {
            if text.is_empty() {
                continuing = false;
            } else if let Some((_, item)) = items.last_mut() {
                if !item.is_empty() {
                    item.push(' ');
                }
                item.push_str(text);
            }
        }
    }

    items.retain(|(_, text)| !text.is_empty());
    items
}

fn todo_start(text: &str) -> Option<String> {
    if text.len() <= 4 || !text.get(..4)?.eq_ignore_ascii_case("todo") {
        return None;
    }
    let (_, item) = text.split_once(':')?;
    Some(capitalize(item.trim()))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Every item in `source`, read with the comment syntax of its language.
#[must_use]
pub fn todos_in_source(source: &str, syntax: &CommentSyntax) -> Vec<(usize, String)> {
    extract_comments(source, syntax)
        .iter()
        .flat_map(|group| todos_in_comment(group))
        .collect()
}

/// Collects TODO items from every source file of a known language below a
/// directory.
pub struct TodoFinder<S: FileScanner> {
    registry: LanguageRegistry,
    scanner: S,
}

impl<S: FileScanner + Sync> TodoFinder<S> {
    #[must_use]
    pub const fn new(registry: LanguageRegistry, scanner: S) -> Self {
        Self { registry, scanner }
    }

    /// Items sorted by path, then line.
    ///
    /// # Errors
    /// Returns `NotADirectory` unless `dir` is a directory, and `ReadFailed`
    /// if a source file cannot be read.
    pub fn find(&self, dir: &Path) -> Result<Vec<TodoItem>> {
        let entry = classify(dir)?;
        if entry.kind != EntryKind::Directory {
            return Err(ToolshedError::NotADirectory(entry.path));
        }

        let files = self.scanner.scan(&entry.path)?;
        debug!(dir = %entry.path.display(), files = files.len(), "scanning for todos");

        let per_file = files
            .par_iter()
            .filter_map(|path| {
                let language = self.registry.get_for_path(path)?;
                Some(Self::find_in_file(path, &language.comment_syntax))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut items: Vec<TodoItem> = per_file.into_iter().flatten().collect();
        items.sort_by(|a, b| a.path.cmp(&b.path).then(a.line.cmp(&b.line)));
        Ok(items)
    }

    fn find_in_file(path: &Path, syntax: &CommentSyntax) -> Result<Vec<TodoItem>> {
        let bytes = std::fs::read(path).map_err(|source| ToolshedError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        let path = clean_path(path);

        Ok(todos_in_source(&source, syntax)
            .into_iter()
            .map(|(line, text)| TodoItem {
                text,
                path: path.clone(),
                line,
            })
            .collect())
    }
}

/// Markdown task list of `items`, or a note that there is nothing to do.
#[must_use]
pub fn format_todos(items: &[TodoItem]) -> String {
    if items.is_empty() {
        return format!("{NOTHING_TODO}\n");
    }

    let mut out = String::new();
    for item in items {
        writeln!(
            out,
            "  - [ ] {} ({}, line {}).",
            item.text,
            item.path.display(),
            item.line
        )
        .ok();
    }
    out
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
