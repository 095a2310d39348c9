use std::path::PathBuf;

use crate::aggregator::Aggregator;
use crate::cli::{ClocArgs, Cli};
use crate::counter::{LineCounter, PathCount};
use crate::language::LanguageRegistry;
use crate::output::ScanProgress;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_cloc(args: &ClocArgs, cli: &Cli) -> i32 {
    match run_cloc_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Count lines of code under every path and print one line per path.
///
/// # Errors
/// Returns the first error met while loading configuration or walking a path.
/// Paths counted before it are still printed.
pub fn run_cloc_impl(args: &ClocArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let counter = LineCounter::new(LanguageRegistry::with_custom_languages(&config.languages))?;

    let progress = ScanProgress::new(cli.quiet);
    let aggregator = Aggregator::new(&counter).with_progress(&progress);

    let mut counts = Vec::new();
    let mut failure = None;
    for path in count_paths(&args.paths) {
        match aggregator.aggregate(&path) {
            Ok(lines) => counts.push(PathCount { path, lines }),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    progress.finish();

    let output = args
        .format
        .formatter()
        .format_line_counts(&counts, failure.is_none())?;
    print!("{output}");

    failure.map_or(Ok(EXIT_SUCCESS), Err)
}

/// Trimmed, non-empty arguments; the current directory when none are left.
pub(crate) fn count_paths(args: &[String]) -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = args
        .iter()
        .map(|arg| arg.trim())
        .filter(|arg| !arg.is_empty())
        .map(PathBuf::from)
        .collect();

    if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    }
}

#[cfg(test)]
#[path = "cloc_tests.rs"]
mod tests;
