use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "toolshed")]
#[command(author, version, about = "Small developer tools: line checks, counts, trees, changelogs and more")]
#[command(long_about = "A collection of small command-line developer tools.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Long lines found (cll --fail)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output (for watch: hide the command's stdout)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report lines longer than the maximum length
    Cll(CllArgs),

    /// Count lines of code, ignoring comments and blank lines
    Cloc(ClocArgs),

    /// Print a directory tree
    Tree(TreeArgs),

    /// Generate a Markdown changelog from git history
    Changelog(ChangelogArgs),

    /// Serve a directory over HTTP
    Serve(ServeArgs),

    /// Rerun a command whenever files change
    Watch(WatchArgs),

    /// List TODO comments found in source files
    Todo(TodoArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CllArgs {
    /// Files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Maximum line length (overrides config)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Width of a tab character (overrides config)
    #[arg(short, long)]
    pub tab: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 1 when long lines are found
    #[arg(long)]
    pub fail: bool,
}

#[derive(Parser, Debug)]
pub struct ClocArgs {
    /// Files or directories to count
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Directory to print
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ChangelogArgs {
    /// Write the changelog to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Repository to read the history of
    #[arg(long)]
    pub repo: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Directory to serve
    #[arg(conflicts_with = "directory")]
    pub dir: Option<PathBuf>,

    /// Directory to serve (overrides config)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    #[must_use]
    pub fn directory(&self) -> Option<&PathBuf> {
        self.directory.as_ref().or(self.dir.as_ref())
    }
}

#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Seconds a run may take before it is killed (overrides config)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Milliseconds of quiet before a burst of changes triggers a run
    #[arg(long)]
    pub debounce: Option<u64>,

    /// Path to watch, can be specified multiple times (default: .)
    #[arg(short, long = "path")]
    pub paths: Vec<PathBuf>,

    /// Command to run, after `--`
    #[arg(last = true, required = true)]
    pub command: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct TodoArgs {
    /// Directory to search
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Check the configuration for semantic errors
    Validate,

    /// Display the effective configuration
    Show {
        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a commented configuration template
    Init {
        /// File to create
        #[arg(short, long, default_value = crate::config::LOCAL_CONFIG_NAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
