use tokio::runtime::Builder;

use crate::aggregator::{EntryKind, classify};
use crate::cli::{Cli, ServeArgs};
use crate::serve::{banner, serve};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, ToolshedError};

use super::load_config;

#[must_use]
pub fn run_serve(args: &ServeArgs, cli: &Cli) -> i32 {
    match run_serve_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Serve the directory until interrupted.
///
/// # Errors
/// Returns an error if the directory does not exist, the port cannot be bound
/// or the runtime cannot start.
pub fn run_serve_impl(args: &ServeArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let dir = args
        .directory()
        .cloned()
        .unwrap_or(config.serve.directory);
    let port = args.port.unwrap_or(config.serve.port);

    let entry = classify(&dir)?;
    if entry.kind != EntryKind::Directory {
        return Err(ToolshedError::NotADirectory(entry.path));
    }

    let runtime = Builder::new_multi_thread().enable_all().build()?;

    println!("{}", banner(&entry.path, port));
    runtime.block_on(serve(&entry.path, port))?;
    Ok(EXIT_SUCCESS)
}
