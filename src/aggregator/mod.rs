//! Recursive directory aggregation.
//!
//! [`Aggregator`] visits a path: a file is handed to an [`Inspector`], a
//! directory fans out one task per child on the rayon pool and merges the
//! children's results once every task has finished.
//!
//! Children are listed in sorted file name order and merged in that order, so
//! successful results never depend on completion order. When several
//! children fail, every child still runs to completion and the error of the
//! first failing child in listing order is reported.

mod filesystem;

pub use filesystem::{Child, EntryKind, FileSystem, RealFileSystem};

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::output::ScanProgress;
use crate::path_utils::clean_path;

/// Domain-specific half of an aggregation: what a file yields and how a
/// directory combines its children.
pub trait Inspector: Sync {
    type Output: Send;

    /// Inspect a regular file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn inspect_file(&self, path: &Path) -> Result<Self::Output>;

    /// Combine the results of a directory's children, given in listing order.
    fn merge(&self, dir: &Path, children: Vec<Self::Output>) -> Self::Output;

    /// Answer for a non-directory child without opening it.
    ///
    /// Returning `Some` means the file is never opened, so it cannot fail.
    fn without_reading(&self, _path: &Path) -> Option<Self::Output> {
        None
    }

    /// Answer for a symlinked child without following the link.
    ///
    /// The default `None` follows links like any other path.
    fn without_following(&self, _path: &Path) -> Option<Self::Output> {
        None
    }
}

/// A classified filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

pub struct Aggregator<'a, I, F = RealFileSystem> {
    inspector: &'a I,
    fs: F,
    progress: Option<&'a ScanProgress>,
}

impl<'a, I: Inspector> Aggregator<'a, I> {
    #[must_use]
    pub const fn new(inspector: &'a I) -> Self {
        Self {
            inspector,
            fs: RealFileSystem,
            progress: None,
        }
    }
}

impl<'a, I: Inspector, F: FileSystem> Aggregator<'a, I, F> {
    /// Use a different filesystem backend.
    #[must_use]
    pub fn with_filesystem<G: FileSystem>(self, fs: G) -> Aggregator<'a, I, G> {
        Aggregator {
            inspector: self.inspector,
            fs,
            progress: self.progress,
        }
    }

    /// Tick `progress` once per file visited.
    #[must_use]
    pub const fn with_progress(mut self, progress: &'a ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Classify `path` with a single open and stat.
    ///
    /// # Errors
    /// Returns `NotFound` if the path cannot be opened and `StatFailed` if its
    /// metadata cannot be read.
    pub fn classify(&self, path: &Path) -> Result<Entry> {
        let path = clean_path(path);
        let kind = self.fs.classify(&path)?;
        Ok(Entry { path, kind })
    }

    /// Aggregate everything below `path`.
    ///
    /// # Errors
    /// Returns the first error met anywhere in the tree; no partial result is
    /// ever returned alongside it.
    pub fn aggregate(&self, path: &Path) -> Result<I::Output> {
        let entry = self.classify(path)?;
        self.visit(&entry)
    }

    fn visit(&self, entry: &Entry) -> Result<I::Output> {
        match entry.kind {
            EntryKind::File => {
                let output = self.inspector.inspect_file(&entry.path);
                self.tick();
                output
            }
            EntryKind::Directory => self.visit_dir(&entry.path),
        }
    }

    fn visit_dir(&self, dir: &Path) -> Result<I::Output> {
        let children = self.fs.list(dir)?;
        debug!(dir = %dir.display(), children = children.len(), "fan out");

        // Every child runs to completion before any error is looked at.
        let outcomes: Vec<Result<I::Output>> = children
            .par_iter()
            .map(|child| self.visit_child(child))
            .collect();

        let results = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(self.inspector.merge(dir, results))
    }

    fn visit_child(&self, child: &Child) -> Result<I::Output> {
        if child.is_symlink
            && let Some(output) = self.inspector.without_following(&child.path)
        {
            self.tick();
            return Ok(output);
        }
        if !child.is_dir
            && let Some(output) = self.inspector.without_reading(&child.path)
        {
            self.tick();
            return Ok(output);
        }
        self.aggregate(&child.path)
    }

    fn tick(&self) {
        if let Some(progress) = self.progress {
            progress.inc();
        }
    }
}

/// Classify `path` on the real filesystem.
///
/// # Errors
/// See [`Aggregator::classify`].
pub fn classify(path: &Path) -> Result<Entry> {
    let path = clean_path(path);
    let kind = RealFileSystem.classify(&path)?;
    Ok(Entry { path, kind })
}

/// Aggregate `path` on the real filesystem.
///
/// # Errors
/// See [`Aggregator::aggregate`].
pub fn aggregate<I: Inspector>(path: &Path, inspector: &I) -> Result<I::Output> {
    Aggregator::new(inspector).aggregate(path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
