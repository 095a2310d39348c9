//! Re-run a command whenever watched files change (`watch`).

mod events;
mod runner;

pub use events::{debounce_events, is_relevant};
pub use runner::{CommandRunner, RunOutcome};

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use tracing::info;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub paths: Vec<PathBuf>,
    pub debounce: Duration,
}

/// Run `runner` once, then again after every burst of changes below
/// `options.paths`. Only returns on a setup error.
///
/// # Errors
/// Returns an error if the watcher cannot be created or a path cannot be
/// watched.
pub fn watch(options: &WatchOptions, runner: &CommandRunner) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        tx.send(res).ok();
    })?;

    for path in &options.paths {
        watcher.watch(path, RecursiveMode::Recursive)?;
    }
    info!(paths = ?options.paths, command = %runner.command_line(), "watching");

    run_and_report(runner);
    debounce_events(&rx, options.debounce, || run_and_report(runner));
    Ok(())
}

/// Run once, printing failures instead of returning them.
fn run_and_report(runner: &CommandRunner) {
    match runner.run() {
        Ok(RunOutcome::Finished(status)) if !status.success() => {
            eprintln!("{}: {status}", runner.command_line());
        }
        Ok(_) => {}
        Err(e) => eprintln!("Error: {e}"),
    }
}
