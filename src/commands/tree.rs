use crate::cli::TreeArgs;
use crate::tree::{build_tree, render};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_tree(args: &TreeArgs) -> i32 {
    match run_tree_impl(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the tree below `args.path`.
///
/// # Errors
/// Returns `NotADirectory` if the path is a file, or the first error met
/// while walking it.
pub fn run_tree_impl(args: &TreeArgs) -> Result<i32> {
    let tree = build_tree(&args.path)?;
    print!("{}", render(&tree));
    Ok(EXIT_SUCCESS)
}
