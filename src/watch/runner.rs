use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{Result, ToolshedError};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished(ExitStatus),
    /// Killed after running past the timeout.
    TimedOut,
}

/// Runs one command line to completion or until it times out.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
    quiet: bool,
    timeout: Duration,
}

impl CommandRunner {
    /// # Errors
    /// Returns a configuration error if `command` is empty.
    pub fn new(command: &[String], quiet: bool, timeout: Duration) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| ToolshedError::Config("no command given to watch".to_string()))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            quiet,
            timeout,
        })
    }

    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command, killing it once it exceeds the timeout.
    ///
    /// Stderr is always inherited; stdout only unless quiet.
    ///
    /// # Errors
    /// Returns a `Command` error if the process cannot be started or waited on.
    pub fn run(&self) -> Result<RunOutcome> {
        let stdout = if self.quiet {
            Stdio::null()
        } else {
            Stdio::inherit()
        };
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| self.command_error(source))?;
        debug!(command = %self.command_line(), pid = child.id(), "started");

        self.wait_with_timeout(&mut child)
    }

    fn wait_with_timeout(&self, child: &mut Child) -> Result<RunOutcome> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait().map_err(|e| self.command_error(e))? {
                debug!(%status, "finished");
                return Ok(RunOutcome::Finished(status));
            }

            let now = Instant::now();
            if now >= deadline {
                println!("Long running command, killing it");
                info!(command = %self.command_line(), "timed out");
                // Fails only when the child already exited, which wait() reaps.
                child.kill().ok();
                child.wait().map_err(|e| self.command_error(e))?;
                return Ok(RunOutcome::TimedOut);
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }

    fn command_error(&self, source: std::io::Error) -> ToolshedError {
        ToolshedError::Command {
            command: self.command_line(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
