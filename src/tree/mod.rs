//! Directory tree rendering (`tree`).

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::aggregator::{Aggregator, EntryKind, FileSystem, Inspector, RealFileSystem};
use crate::error::{Result, ToolshedError};
use crate::path_utils::base_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn dir(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            children,
        }
    }
}

/// Builds [`TreeNode`]s; files are named, never opened, and symlinks are
/// never descended.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl Inspector for TreeBuilder {
    type Output = TreeNode;

    fn inspect_file(&self, path: &Path) -> Result<TreeNode> {
        Ok(TreeNode::file(base_name(path)))
    }

    fn merge(&self, dir: &Path, children: Vec<TreeNode>) -> TreeNode {
        TreeNode::dir(base_name(dir), children)
    }

    fn without_reading(&self, path: &Path) -> Option<TreeNode> {
        Some(TreeNode::file(base_name(path)))
    }

    // Symlinks are leaves, even when they point at a directory.
    fn without_following(&self, path: &Path) -> Option<TreeNode> {
        Some(TreeNode::file(base_name(path)))
    }
}

/// Build the tree below directory `path`.
///
/// # Errors
/// Returns `NotADirectory` if `path` is a file, or any aggregation error.
pub fn build_tree(path: &Path) -> Result<TreeNode> {
    build_tree_with(path, RealFileSystem)
}

/// [`build_tree`] on an arbitrary filesystem.
///
/// # Errors
/// See [`build_tree`].
pub fn build_tree_with<F: FileSystem>(path: &Path, fs: F) -> Result<TreeNode> {
    let builder = TreeBuilder;
    let aggregator = Aggregator::new(&builder).with_filesystem(fs);
    let entry = aggregator.classify(path)?;
    if entry.kind != EntryKind::Directory {
        return Err(ToolshedError::NotADirectory(entry.path));
    }
    aggregator.aggregate(&entry.path)
}

/// Render `root` as text: its name, then one `└─ name` line per descendant.
///
/// Within a directory, files come before subdirectories and each group is
/// sorted by name. Every level is indented one more space.
#[must_use]
pub fn render(root: &TreeNode) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &TreeNode, depth: usize, out: &mut String) {
    writeln!(out, "{}", node.name).ok();

    let (mut files, mut dirs): (Vec<&TreeNode>, Vec<&TreeNode>) =
        node.children.iter().partition(|child| !child.is_dir);
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.sort_by(|a, b| a.name.cmp(&b.name));

    let indent = " ".repeat(depth);
    for child in files.into_iter().chain(dirs) {
        out.push_str(&indent);
        out.push_str("└─ ");
        if child.is_dir {
            render_node(child, depth + 1, out);
        } else {
            writeln!(out, "{}", child.name).ok();
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
