use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, ToolshedError};

use super::load_config_result;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate => run_config_validate_impl(cli),
        ConfigAction::Show { format } => run_config_show_impl(format, cli),
        ConfigAction::Init { output, force } => run_config_init_impl(output, *force),
    };

    match result {
        Ok(message) => {
            print!("{message}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load and validate the effective configuration.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or fails validation.
pub fn run_config_validate_impl(cli: &Cli) -> Result<String> {
    let loaded = load_config_result(cli)?;
    Ok(loaded.source.map_or_else(
        || "No configuration file found, defaults are valid.\n".to_string(),
        |path| format!("Configuration is valid: {}\n", path.display()),
    ))
}

/// The effective configuration as TOML or JSON.
///
/// # Errors
/// Returns an error if loading fails, the format is unknown or serialization
/// fails.
pub fn run_config_show_impl(format: &str, cli: &Cli) -> Result<String> {
    let config = load_config_result(cli)?.config;
    match format.to_lowercase().as_str() {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(&config)?)),
        "text" => format_config_text(&config),
        other => Err(ToolshedError::Config(format!(
            "Unknown output format: {other}. Use text or json."
        ))),
    }
}

/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn format_config_text(config: &Config) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| ToolshedError::Config(format!("Failed to serialize configuration: {e}")))
}

/// Write the configuration template to `output`.
///
/// # Errors
/// Returns an error if the file already exists (without `force`) or cannot be
/// written.
pub fn run_config_init_impl(output: &Path, force: bool) -> Result<String> {
    if output.exists() && !force {
        return Err(ToolshedError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output.display()
        )));
    }

    fs::write(output, generate_config_template())?;
    Ok(format!("Created configuration file: {}\n", output.display()))
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# toolshed configuration file
# Every key is optional. Command-line flags take precedence.

[cll]
# Lines longer than this many characters are reported (default: 80)
max_length = 80
# Columns a tab counts for (default: 2)
tab_width = 2

[serve]
# Port to listen on (default: 8000)
port = 8000
# Directory to serve (default: current directory)
directory = "."

[watch]
# Hide the command's stdout (default: false)
quiet = false
# Kill a run after this many seconds (default: 10)
timeout_secs = 10
# Milliseconds without changes before the command reruns (default: 100)
debounce_ms = 100
# Paths watched recursively (default: current directory)
# paths = ["src", "tests"]

[changelog]
# Write the changelog to a file instead of stdout
# output = "CHANGELOG.md"

[scanner]
# Respect .gitignore files when looking for TODOs (default: true)
gitignore = true
# Glob patterns to skip
exclude = ["**/target/**", "**/node_modules/**"]

# Extra languages for cloc and todo
# [languages.zig]
# extensions = ["zig"]
# single_line_comments = ["//"]
# multi_line_comments = []
"#
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
