use crate::cli::{Cli, TodoArgs};
use crate::language::LanguageRegistry;
use crate::scanner::DirectoryScanner;
use crate::todo::{TodoFinder, format_todos};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_todo(args: &TodoArgs, cli: &Cli) -> i32 {
    match run_todo_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the TODO items found below `args.dir` as a Markdown task list.
///
/// # Errors
/// Returns an error if the configuration is invalid, the path is not a
/// directory or a source file cannot be read.
pub fn run_todo_impl(args: &TodoArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let scanner = DirectoryScanner::from_config(&config.scanner)?;
    let finder = TodoFinder::new(
        LanguageRegistry::with_custom_languages(&config.languages),
        scanner,
    );

    let items = finder.find(&args.dir)?;
    print!("{}", format_todos(&items));
    Ok(EXIT_SUCCESS)
}
