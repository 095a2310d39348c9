//! Semantic checks run after a config file parses.

use crate::config::Config;
use crate::error::{Result, ToolshedError};

pub const MAX_TAB_WIDTH: usize = 16;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a numeric setting is out of range, a glob pattern is
/// invalid, or a custom language is unusable.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_cll_section(config)?;
    validate_serve_section(config)?;
    validate_watch_section(config)?;
    validate_glob_patterns(config)?;
    validate_languages(config)?;
    Ok(())
}

fn validate_cll_section(config: &Config) -> Result<()> {
    if config.cll.max_length == 0 {
        return Err(ToolshedError::Config(
            "cll.max_length must be greater than 0".to_string(),
        ));
    }
    if config.cll.tab_width > MAX_TAB_WIDTH {
        return Err(ToolshedError::Config(format!(
            "cll.tab_width must be at most {MAX_TAB_WIDTH}, got {}",
            config.cll.tab_width
        )));
    }
    Ok(())
}

fn validate_serve_section(config: &Config) -> Result<()> {
    if config.serve.port == 0 {
        return Err(ToolshedError::Config(
            "serve.port must not be 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_watch_section(config: &Config) -> Result<()> {
    if config.watch.timeout_secs == 0 {
        return Err(ToolshedError::Config(
            "watch.timeout_secs must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| ToolshedError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_languages(config: &Config) -> Result<()> {
    let mut names: Vec<_> = config.languages.keys().collect();
    names.sort();
    for name in names {
        let language = &config.languages[name];
        if language.extensions.is_empty() {
            return Err(ToolshedError::Config(format!(
                "languages.{name} must list at least one extension"
            )));
        }
        let empty_delimiter = language.single_line_comments.iter().any(String::is_empty)
            || language
                .multi_line_comments
                .iter()
                .any(|(start, end)| start.is_empty() || end.is_empty());
        if empty_delimiter {
            return Err(ToolshedError::Config(format!(
                "languages.{name} has an empty comment delimiter"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
