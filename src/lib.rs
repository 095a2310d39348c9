pub mod aggregator;
pub mod changelog;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;
pub mod path_utils;
pub mod scanner;
pub mod serve;
pub mod todo;
pub mod tree;
pub mod watch;

pub use error::{Result, ToolshedError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LONG_LINES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
