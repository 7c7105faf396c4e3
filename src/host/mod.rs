//! Host capabilities.
//!
//! Each forwarder talks to the outside world through one of these narrow
//! traits, so the placeholder engine and the forwarders can be exercised
//! against a recording fake while `SystemHost` drives real processes.
//!
//! - **TerminalHost**: start a terminal session
//! - **ShellHost**: run a shell command as an explicit task
//! - **ClipboardHost**: write text to the system clipboard
//! - **DocumentHost**: open a file in an editor view
//! - **MessageHost**: status-bar and error messages
//! - **WorkbenchHost**: execute a workbench command by id

mod system;
mod task;
mod terminal;

pub use system::SystemHost;
pub use task::{ExecOutcome, ExecTask};
pub use terminal::{ShellArgs, Terminal, TerminalLocation, TerminalOptions};

use crate::error::Result;
use std::path::Path;

/// Workbench command that moves focus to the first editor group.
pub const FOCUS_FIRST_EDITOR_GROUP: &str = "workbench.action.focusFirstEditorGroup";

/// How a document should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
    /// Preview tabs are replaced by the next opened document.
    pub preview: bool,
}

pub trait TerminalHost {
    fn create_terminal(&self, options: &TerminalOptions) -> Result<()>;
}

pub trait ShellHost {
    /// Start `command` in the host shell. Spawn failures are reported through
    /// the returned task rather than eagerly.
    fn spawn_shell(&self, command: &str) -> ExecTask;
}

pub trait ClipboardHost {
    fn write_text(&self, text: &str) -> Result<()>;
}

pub trait DocumentHost {
    fn open_document(&self, path: &Path, options: ShowOptions) -> Result<()>;
}

pub trait MessageHost {
    fn set_status_message(&self, message: &str);
    fn show_error_message(&self, message: &str);
}

pub trait WorkbenchHost {
    fn execute_command(&self, command: &str) -> Result<()>;
}

/// Every capability the command bridge forwards to.
pub trait Host:
    TerminalHost + ShellHost + ClipboardHost + DocumentHost + MessageHost + WorkbenchHost
{
}

impl<T> Host for T where
    T: TerminalHost + ShellHost + ClipboardHost + DocumentHost + MessageHost + WorkbenchHost
{
}
