//! Command forwarders.
//!
//! Each forwarder resolves the placeholders in its argument object and hands
//! the result, otherwise unchanged, to one host capability:
//!
//! - **terminal**: `createTerminal` and the terminal-close handler
//! - **exec**: run a shell command as a `PendingExec`
//! - **copy**: write resolved lines to the clipboard
//! - **open_file**: open resolved paths as non-preview documents
//! - **remember**: store a resolved value in the memory store
//!
//! Argument objects use the camelCase field names editors send.

mod copy;
mod exec;
mod open_file;
mod remember;
mod terminal;

pub use copy::{CopyArgs, copy};
pub use exec::{ExecArgs, PendingExec, exec};
pub use open_file::{OpenFileArgs, OpenReport, open_file};
pub use remember::{RememberArgs, remember};
pub use terminal::{create_terminal, on_terminal_closed};
