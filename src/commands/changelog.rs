use std::path::PathBuf;

use crate::changelog::{git_log, parse_git_log, write_changelog};
use crate::cli::{ChangelogArgs, Cli};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{load_config, write_output};

#[must_use]
pub fn run_changelog(args: &ChangelogArgs, cli: &Cli) -> i32 {
    match run_changelog_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the repository history as Markdown to the output file or stdout.
///
/// # Errors
/// Returns an error if git fails, its log cannot be parsed or the output
/// cannot be written.
pub fn run_changelog_impl(args: &ChangelogArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let output = args.output.as_ref().or(config.changelog.output.as_ref());

    let commits = parse_git_log(&git_log(args.repo.as_deref())?)?;

    let mut rendered = Vec::new();
    write_changelog(&commits, &mut rendered)?;

    write_output(
        output.map(PathBuf::as_path),
        &String::from_utf8_lossy(&rendered),
        false,
    )?;
    Ok(EXIT_SUCCESS)
}
