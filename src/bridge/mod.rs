//! Command registry.
//!
//! `CommandBridge` owns the memory store for the life of the process and maps
//! command identifiers to forwarders. It is the only place that decodes
//! argument objects, so a malformed argument never reaches a host.
//!
//! # Commands
//!
//! | Id | Arguments |
//! |----|-----------|
//! | `command-bridge.createTerminal` | terminal options |
//! | `command-bridge.exec` | `{ "command": string }` |
//! | `command-bridge.copy` | `{ "lines": [string] }` |
//! | `command-bridge.openFile` | `{ "paths": string \| [string] }` |
//! | `command-bridge.remember` | `{ "namespace": string, "text": string }` |


use crate::editor::EditorContext;
use crate::environment::HostEnvironment;
use crate::error::{BridgeError, Result};
use crate::forwarders::{
    self, CopyArgs, ExecArgs, OpenFileArgs, OpenReport, PendingExec, RememberArgs,
};
use crate::host::{ExecOutcome, Host, Terminal, TerminalOptions};
use crate::memory::MemoryStore;
use crate::placeholder::{self, Resolver};
use serde::de::DeserializeOwned;
use std::fmt;

/// Prefix shared by every command identifier.
pub const COMMAND_PREFIX: &str = "command-bridge.";

/// Commands exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCommand {
    CreateTerminal,
    Exec,
    Copy,
    OpenFile,
    Remember,
}

impl BridgeCommand {
    pub const ALL: [BridgeCommand; 5] = [
        BridgeCommand::CreateTerminal,
        BridgeCommand::Exec,
        BridgeCommand::Copy,
        BridgeCommand::OpenFile,
        BridgeCommand::Remember,
    ];

    /// Name without the `command-bridge.` prefix.
    pub fn name(&self) -> &'static str {
        match self {
            BridgeCommand::CreateTerminal => "createTerminal",
            BridgeCommand::Exec => "exec",
            BridgeCommand::Copy => "copy",
            BridgeCommand::OpenFile => "openFile",
            BridgeCommand::Remember => "remember",
        }
    }

    /// Full identifier, e.g. `command-bridge.exec`.
    pub fn id(&self) -> String {
        format!("{}{}", COMMAND_PREFIX, self.name())
    }

    /// Look up a command by full identifier or bare name.
    pub fn from_id(id: &str) -> Option<Self> {
        let name = id.strip_prefix(COMMAND_PREFIX).unwrap_or(id);
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for BridgeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// What a dispatched command produced.
#[derive(Debug)]
pub enum Outcome {
    Terminal(Terminal),
    Exec(ExecOutcome),
    Copied(String),
    Opened(OpenReport),
    Remembered(String),
}

/// Routes commands to forwarders over one host and one memory store.
#[derive(Debug)]
pub struct CommandBridge<H> {
    host: H,
    environment: HostEnvironment,
    memory: MemoryStore,
}

impl<H: Host> CommandBridge<H> {
    /// Create a bridge with an empty memory store.
    pub fn new(host: H, environment: HostEnvironment) -> Self {
        Self {
            host,
            environment,
            memory: MemoryStore::new(),
        }
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Resolver over this bridge's environment and store.
    pub fn resolver<'a>(&'a self, editor: Option<&'a EditorContext>) -> Resolver<'a> {
        Resolver::new(&self.environment, editor, &self.memory)
    }

    pub fn resolve(&self, template: &str, editor: Option<&EditorContext>) -> String {
        placeholder::resolve(template, &self.environment, editor, &self.memory)
    }

    pub fn create_terminal(
        &self,
        options: TerminalOptions,
        editor: Option<&EditorContext>,
    ) -> Result<Terminal> {
        forwarders::create_terminal(&self.host, &self.resolver(editor), options)
    }

    pub fn exec(&self, args: ExecArgs, editor: Option<&EditorContext>) -> PendingExec<'_, H> {
        forwarders::exec(&self.host, &self.resolver(editor), args)
    }

    pub fn copy(&self, args: CopyArgs, editor: Option<&EditorContext>) -> Result<String> {
        forwarders::copy(&self.host, &self.resolver(editor), args)
    }

    pub fn open_file(&self, args: OpenFileArgs, editor: Option<&EditorContext>) -> OpenReport {
        forwarders::open_file(&self.host, &self.resolver(editor), args)
    }

    pub fn remember(&self, args: RememberArgs, editor: Option<&EditorContext>) -> String {
        forwarders::remember(&self.memory, &self.resolver(editor), args)
    }

    /// Handle a terminal-close event.
    pub fn on_terminal_closed(&self, terminal: &Terminal) -> Result<()> {
        if forwarders::on_terminal_closed(&self.host, terminal)? {
            tracing::debug!(name = terminal.name.as_deref().unwrap_or_default(), "refocused editor");
        }
        Ok(())
    }

    /// Run a command by identifier with a JSON argument object.
    ///
    /// `exec` waits for the shell command to exit, so commands dispatched one
    /// after another never overlap. For a background command, call
    /// [`CommandBridge::exec`] and drop the returned task instead.
    ///
    /// Host failures are reported to the host before being returned;
    /// `openFile` reports per-path failures and still succeeds.
    pub fn dispatch(
        &self,
        command_id: &str,
        args: serde_json::Value,
        editor: Option<&EditorContext>,
    ) -> Result<Outcome> {
        let command = BridgeCommand::from_id(command_id).ok_or_else(|| {
            BridgeError::InvalidArguments(format!(
                "unknown command '{}'\nAvailable commands: {}",
                command_id,
                available_commands()
            ))
        })?;

        tracing::debug!(command = %command, "dispatch");

        match command {
            BridgeCommand::CreateTerminal => {
                let options = decode(command, args)?;
                self.create_terminal(options, editor)
                    .inspect_err(|e| {
                        self.host
                            .show_error_message(&format!("Failed to create terminal: {}", e))
                    })
                    .map(Outcome::Terminal)
            }
            BridgeCommand::Exec => {
                let args = decode(command, args)?;
                let pending = self.exec(args, editor);
                tracing::debug!(command = pending.command(), "waiting for shell command");
                pending.wait().map(Outcome::Exec)
            }
            BridgeCommand::Copy => {
                let args = decode(command, args)?;
                self.copy(args, editor)
                    .inspect_err(|e| {
                        self.host
                            .show_error_message(&format!("Failed to copy to clipboard: {}", e))
                    })
                    .map(Outcome::Copied)
            }
            BridgeCommand::OpenFile => {
                let args = decode(command, args)?;
                Ok(Outcome::Opened(self.open_file(args, editor)))
            }
            BridgeCommand::Remember => {
                let args = decode(command, args)?;
                Ok(Outcome::Remembered(self.remember(args, editor)))
            }
        }
    }
}

/// Decode an argument object. A missing (`null`) object is treated as `{}`.
fn decode<T: DeserializeOwned>(command: BridgeCommand, args: serde_json::Value) -> Result<T> {
    let args = if args.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| {
        BridgeError::InvalidArguments(format!("invalid arguments for {}: {}", command, e))
    })
}

fn available_commands() -> String {
    BridgeCommand::ALL
        .iter()
        .map(|c| c.id())
        .collect::<Vec<_>>()
        .join(", ")
}
