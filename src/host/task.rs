//! Shell execution tasks.
//!
//! An `ExecTask` is the return channel for a shell command started by a
//! `ShellHost`. The command runs on a background thread; callers that care
//! about the outcome call `wait`, callers that don't simply drop the task
//! and the process keeps running.

use crate::error::{BridgeError, Result};
use std::thread::JoinHandle;
use std::time::Duration;

/// Result of a finished shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Exit code of the process (None if terminated by a signal).
    pub exit_code: Option<i32>,
    /// Wall-clock time from spawn to exit.
    pub duration: Duration,
}

impl ExecOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Human-readable failure description, or `None` on success.
    pub fn failure(&self) -> Option<String> {
        if self.is_success() {
            return None;
        }
        match self.exit_code {
            Some(code) => Some(format!("exited with code {}", code)),
            None => Some("terminated by signal".to_string()),
        }
    }
}

/// Handle to a shell command that may still be running.
#[derive(Debug)]
pub struct ExecTask {
    state: TaskState,
}

#[derive(Debug)]
enum TaskState {
    Finished(Result<ExecOutcome>),
    Running(JoinHandle<Result<ExecOutcome>>),
}

impl ExecTask {
    /// A task that has already completed.
    pub fn finished(result: Result<ExecOutcome>) -> Self {
        Self {
            state: TaskState::Finished(result),
        }
    }

    /// Run `work` on a background thread.
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce() -> Result<ExecOutcome> + Send + 'static,
    {
        Self {
            state: TaskState::Running(std::thread::spawn(work)),
        }
    }

    /// Block until the command exits.
    pub fn wait(self) -> Result<ExecOutcome> {
        match self.state {
            TaskState::Finished(result) => result,
            TaskState::Running(handle) => handle
                .join()
                .map_err(|_| BridgeError::Host("shell task panicked".to_string()))?,
        }
    }
}
