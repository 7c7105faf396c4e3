//! `exec` forwarder.

use crate::error::Result;
use crate::host::{ExecOutcome, ExecTask, MessageHost, ShellHost};
use crate::placeholder::Resolver;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ExecArgs {
    pub command: String,
}

/// A shell command that has been handed to the host.
///
/// Dropping it leaves the command running unobserved. `wait` blocks until it
/// exits and reports failures as a status message naming the command.
#[derive(Debug)]
pub struct PendingExec<'h, H: MessageHost> {
    host: &'h H,
    command: String,
    task: ExecTask,
}

impl<'h, H: MessageHost> PendingExec<'h, H> {
    /// The resolved command text.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Wait for the command to exit.
    ///
    /// A spawn failure is returned as an error; a non-zero exit is returned
    /// as an outcome. Both are reported to the host first.
    pub fn wait(self) -> Result<ExecOutcome> {
        match self.task.wait() {
            Ok(outcome) => {
                if let Some(failure) = outcome.failure() {
                    tracing::warn!(command = %self.command, %failure, "shell command failed");
                    self.host
                        .set_status_message(&format!("Error running {}: {}", self.command, failure));
                }
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(command = %self.command, error = %e, "shell command could not run");
                self.host
                    .set_status_message(&format!("Error running {}: {}", self.command, e));
                Err(e)
            }
        }
    }
}

/// Resolve the command and start it in the host shell.
pub fn exec<'h, H>(host: &'h H, resolver: &Resolver<'_>, args: ExecArgs) -> PendingExec<'h, H>
where
    H: ShellHost + MessageHost,
{
    let command = resolver.resolve(&args.command);
    tracing::info!(command = %command, "exec");
    let task = host.spawn_shell(&command);
    PendingExec {
        host,
        command,
        task,
    }
}
