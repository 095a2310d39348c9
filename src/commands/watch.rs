use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Cli, WatchArgs};
use crate::config::WatchConfig;
use crate::watch::{CommandRunner, WatchOptions, watch};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_watch(args: &WatchArgs, cli: &Cli) -> i32 {
    match run_watch_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Watch and rerun forever.
///
/// # Errors
/// Returns an error if the configuration is invalid, the command is empty or
/// the watcher cannot be set up.
pub fn run_watch_impl(args: &WatchArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let settings = apply_cli_overrides(config.watch, args, cli.quiet);

    let runner = CommandRunner::new(
        &args.command,
        settings.quiet,
        Duration::from_secs(settings.timeout_secs),
    )?;
    let options = WatchOptions {
        paths: settings.paths,
        debounce: Duration::from_millis(settings.debounce_ms),
    };

    watch(&options, &runner)?;
    Ok(EXIT_SUCCESS)
}

pub(crate) fn apply_cli_overrides(
    mut config: WatchConfig,
    args: &WatchArgs,
    quiet: bool,
) -> WatchConfig {
    config.quiet |= quiet;
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(debounce) = args.debounce {
        config.debounce_ms = debounce;
    }
    if !args.paths.is_empty() {
        config.paths.clone_from(&args.paths);
    }
    if config.paths.is_empty() {
        config.paths.push(PathBuf::from("."));
    }
    config
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
