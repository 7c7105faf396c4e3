//! Implementation of the `command-bridge invoke` command.

use super::context::{ContextSpec, environment};
use crate::bridge::{CommandBridge, Outcome};
use crate::cli::InvokeArgs;
use crate::editor::EditorContext;
use crate::error::{BridgeError, Result};
use crate::host::Host;

/// Execute the `command-bridge invoke` command.
pub fn cmd_invoke<H: Host>(host: H, args: InvokeArgs) -> Result<()> {
    let bridge = CommandBridge::new(host, environment(args.context.workspace.as_deref()));
    let editor = ContextSpec::from_args(&args.context).editor_context();
    invoke(&bridge, &args.command, &args.args, editor.as_ref())
}

/// Decode `json`, dispatch the command, and settle its outcome.
pub(super) fn invoke<H: Host>(
    bridge: &CommandBridge<H>,
    command: &str,
    json: &str,
    editor: Option<&EditorContext>,
) -> Result<()> {
    let args: serde_json::Value = serde_json::from_str(json).map_err(|e| {
        BridgeError::InvalidArguments(format!("arguments for '{}' are not valid JSON: {}", command, e))
    })?;
    let outcome = bridge.dispatch(command, args, editor)?;
    settle(bridge, outcome)
}

/// Turn a dispatch outcome into the command's result.
///
/// A visible terminal has exited by the time `createTerminal` returns, so
/// its close event fires here. Hidden terminals outlive the command. A
/// shell command that exits non-zero fails the invocation.
pub(super) fn settle<H: Host>(bridge: &CommandBridge<H>, outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Terminal(terminal) => {
            if terminal.creation_options.is_hidden() {
                return Ok(());
            }
            bridge.on_terminal_closed(&terminal)
        }
        Outcome::Exec(exec) => match exec.failure() {
            Some(failure) => Err(BridgeError::Host(failure)),
            None => Ok(()),
        },
        Outcome::Opened(report) => {
            if !report.all_opened() {
                tracing::warn!(
                    opened = report.opened.len(),
                    failed = report.failed.len(),
                    "some files did not open"
                );
            }
            Ok(())
        }
        Outcome::Copied(text) => {
            tracing::debug!(bytes = text.len(), "copied");
            Ok(())
        }
        Outcome::Remembered(namespace) => {
            tracing::debug!(namespace = %namespace, "remembered");
            Ok(())
        }
    }
}
