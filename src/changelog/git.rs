use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, ToolshedError};

use super::LOG_FORMAT;

/// Run `git log` in `repo` (or the current directory) and return its output.
///
/// # Errors
/// Returns a `Git` error if git cannot be started or exits unsuccessfully.
pub fn git_log(repo: Option<&Path>) -> Result<String> {
    let mut command = Command::new("git");
    command.arg("log").arg(format!("--format={LOG_FORMAT}"));
    if let Some(dir) = repo {
        command.current_dir(dir);
    }
    debug!(repo = ?repo, "running git log");

    let output = command
        .output()
        .map_err(|e| ToolshedError::Git(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ToolshedError::Git(format!(
            "git log failed ({}): {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
