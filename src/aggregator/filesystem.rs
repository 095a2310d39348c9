//! Filesystem access used by the aggregator, behind a trait for testability.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolshedError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub path: PathBuf,
    /// True for directories and for symlinks that resolve to one.
    pub is_dir: bool,
    /// True when the entry itself is a symlink, whatever it points at.
    pub is_symlink: bool,
}

/// Trait for the filesystem operations the aggregator needs.
pub trait FileSystem: Sync {
    /// Open `path` and stat the handle.
    ///
    /// # Errors
    /// `NotFound` when the open fails, `StatFailed` when the stat fails.
    fn classify(&self, path: &Path) -> Result<EntryKind>;

    /// List the immediate children of `dir`, sorted by file name.
    ///
    /// # Errors
    /// `ListFailed` when the directory cannot be enumerated.
    fn list(&self, dir: &Path) -> Result<Vec<Child>>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn classify(&self, path: &Path) -> Result<EntryKind> {
        let file = File::open(path).map_err(|source| ToolshedError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = file.metadata().map_err(|source| ToolshedError::StatFailed {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    fn list(&self, dir: &Path) -> Result<Vec<Child>> {
        let list_failed = |source: std::io::Error| ToolshedError::ListFailed {
            path: dir.to_path_buf(),
            source,
        };

        let mut named: Vec<(OsString, bool, bool)> = Vec::new();
        for entry in fs::read_dir(dir).map_err(list_failed)? {
            let entry = entry.map_err(list_failed)?;
            let file_type = entry.file_type().map_err(list_failed)?;
            let is_symlink = file_type.is_symlink();
            let is_dir = file_type.is_dir()
                || (is_symlink && fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()));
            named.push((entry.file_name(), is_dir, is_symlink));
        }
        named.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(named
            .into_iter()
            .map(|(name, is_dir, is_symlink)| Child {
                path: dir.join(name),
                is_dir,
                is_symlink,
            })
            .collect())
    }
}
