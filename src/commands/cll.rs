use crate::aggregator::Aggregator;
use crate::checker::LongLineChecker;
use crate::cli::{Cli, CllArgs};
use crate::config::CllConfig;
use crate::output::ScanProgress;
use crate::{EXIT_CONFIG_ERROR, EXIT_LONG_LINES_FOUND, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_cll(args: &CllArgs, cli: &Cli) -> i32 {
    match run_cll_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Check every path in order and print the long lines found.
///
/// Lines found before a failing path are still printed.
///
/// # Errors
/// Returns the first error met while loading configuration or walking a path.
pub fn run_cll_impl(args: &CllArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let checker = LongLineChecker::from_config(&apply_cli_overrides(config.cll, args));

    let progress = ScanProgress::new(cli.quiet);
    let aggregator = Aggregator::new(&checker).with_progress(&progress);

    let mut found = Vec::new();
    let mut failure = None;
    for path in &args.paths {
        match aggregator.aggregate(path) {
            Ok(lines) => found.extend(lines),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    progress.finish();

    print!("{}", args.format.formatter().format_long_lines(&found)?);

    if let Some(e) = failure {
        return Err(e);
    }
    if args.fail && !found.is_empty() {
        return Ok(EXIT_LONG_LINES_FOUND);
    }
    Ok(EXIT_SUCCESS)
}

pub(crate) const fn apply_cli_overrides(mut config: CllConfig, args: &CllArgs) -> CllConfig {
    if let Some(length) = args.length {
        config.max_length = length;
    }
    if let Some(tab) = args.tab {
        config.tab_width = tab;
    }
    config
}

#[cfg(test)]
#[path = "cll_tests.rs"]
mod tests;
