pub mod changelog;
pub mod cll;
pub mod cloc;
pub mod config;
pub mod serve;
pub mod todo;
pub mod tree;
pub mod watch;

pub use changelog::run_changelog;
pub use cll::run_cll;
pub use cloc::run_cloc;
pub use config::{generate_config_template, run_config};
pub use serve::run_serve;
pub use todo::run_todo;
pub use tree::run_tree;
pub use watch::run_watch;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Result;
use crate::cli::Cli;
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics,
};

/// Load and validate the configuration selected by the global flags.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or fails validation.
pub fn load_config_result(cli: &Cli) -> Result<LoadResult> {
    if cli.no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    let result = cli
        .config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    validate_config_semantics(&result.config)?;

    debug!(source = ?result.source, "configuration loaded");
    Ok(result)
}

/// [`load_config_result`] without the source path.
///
/// # Errors
/// See [`load_config_result`].
pub fn load_config(cli: &Cli) -> Result<Config> {
    load_config_result(cli).map(|result| result.config)
}

/// Write to `output_path` when given, else print unless `quiet`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
