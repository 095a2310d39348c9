mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScannerConfig;
use crate::error::Result;

pub trait FileScanner {
    /// All files below `root` accepted by the scanner's filter, sorted.
    ///
    /// # Errors
    /// Returns an error if the scan cannot start.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive file discovery, optionally honoring `.gitignore` files.
///
/// Filters see paths relative to the scanned root. `.git` directories are
/// never entered.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = use_gitignore;
        self
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.filter.should_include(relative)
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git")
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| self.accepts(root, p))
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .filter_entry(|e| e.file_name() != ".git")
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|p| self.accepts(root, p))
            .collect()
    }
}

impl DirectoryScanner<GlobFilter> {
    /// Scanner configured from the `[scanner]` section.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        let filter = GlobFilter::new(&config.exclude)?;
        Ok(Self::new(filter).with_gitignore(config.gitignore))
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_impl(root)
        };
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
