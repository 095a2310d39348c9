//! Markdown changelog generation from `git log` (`changelog`).

mod git;
mod parse;
mod render;

pub use git::git_log;
pub use parse::parse_git_log;
pub use render::write_changelog;

use chrono::{DateTime, Utc};

/// Line that terminates every commit in the log output.
pub const COMMIT_SEPARATOR: &str = "==============================";

/// `git log --format` string producing the fields [`parse_git_log`] reads.
pub const LOG_FORMAT: &str = "hash: %h\nauthor: %an\ndate: %cI\nref: %D\ntitle: %s\nmessage: %b\n==============================%n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Abbreviated hash.
    pub hash: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub title: String,
    /// Body lines trimmed and joined with single spaces; may be empty.
    pub message: String,
    pub tag: Option<String>,
}
