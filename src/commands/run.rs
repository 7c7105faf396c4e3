//! Implementation of the `command-bridge run` command.
//!
//! A session script is a YAML document:
//!
//! ```yaml
//! context:
//!   file: src/main.rs
//!   cursor: "12:5"
//! commands:
//!   - command: remember
//!     args: { namespace: target, text: "{word}" }
//!   - command: exec
//!     args: { command: "cargo test {memory:target}" }
//!   - command: copy
//!     args: { lines: ["{fileBasename}:{lineNumber}"] }
//!     context: { cursor: 40 }
//! ```
//!
//! Every command shares one memory store. A step's `context` overrides the
//! script's for that step only. A failing step does not stop the session.
//!
//! Steps run strictly in order. An `exec` step waits for its shell command
//! to exit before the next step starts, so a long-running command holds up
//! the rest of the script. A non-zero exit counts as a failed step.

use super::context::{ContextSpec, environment};
use super::invoke::settle;
use crate::bridge::CommandBridge;
use crate::cli::RunArgs;
use crate::editor::Position;
use crate::error::{BridgeError, Result};
use crate::host::Host;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A parsed session script.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Session {
    pub context: Option<ScriptContext>,
    pub commands: Vec<Step>,
}

/// One command in a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub command: String,
    #[serde(default)]
    pub args: serde_json::Value,
    #[serde(default)]
    pub context: Option<ScriptContext>,
}

/// Editor context as written in a script.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptContext {
    pub file: Option<PathBuf>,
    pub text: Option<String>,
    pub cursor: Option<ScriptPosition>,
    pub anchor: Option<ScriptPosition>,
    /// Only honored at the top level of a script.
    pub workspace: Option<PathBuf>,
}

/// A one-based position written as `LINE`, `"LINE"`, or `"LINE:COL"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptPosition {
    Line(usize),
    Text(String),
}

impl ScriptPosition {
    fn to_position(&self) -> Result<Position> {
        let text = match self {
            ScriptPosition::Line(line) => line.to_string(),
            ScriptPosition::Text(text) => text.clone(),
        };
        text.parse::<Position>()
            .map_err(|e| BridgeError::Script(e.to_string()))
    }
}

impl ScriptContext {
    fn to_spec(&self) -> Result<ContextSpec> {
        Ok(ContextSpec {
            file: self.file.clone(),
            text: self.text.clone(),
            cursor: self.cursor.as_ref().map(ScriptPosition::to_position).transpose()?,
            anchor: self.anchor.as_ref().map(ScriptPosition::to_position).transpose()?,
        })
    }
}

impl Session {
    /// Load a session script from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::Script(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a session script. An empty document is an empty session.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| BridgeError::Script(format!("failed to parse session YAML: {}", e)))
    }

    fn workspace(&self) -> Option<&Path> {
        self.context.as_ref().and_then(|c| c.workspace.as_deref())
    }
}

/// Execute the `command-bridge run` command.
///
/// `--workspace` wins over the script's `context.workspace`.
pub fn cmd_run<H: Host>(host: H, args: RunArgs) -> Result<()> {
    let session = Session::load(&args.script)?;
    let workspace = args.context.workspace.as_deref().or(session.workspace());
    let bridge = CommandBridge::new(host, environment(workspace));
    run_session(&bridge, &session, &ContextSpec::from_args(&args.context))
}

/// Run every step in order over one bridge.
///
/// Context layers, lowest first: `base`, the script's context, the step's
/// context. Returns an error naming how many steps failed.
pub(super) fn run_session<H: Host>(
    bridge: &CommandBridge<H>,
    session: &Session,
    base: &ContextSpec,
) -> Result<()> {
    let script_context = match &session.context {
        Some(context) => base.overlay(&context.to_spec()?),
        None => base.clone(),
    };

    let mut failed = 0;
    for (index, step) in session.commands.iter().enumerate() {
        let number = index + 1;
        if let Err(e) = run_step(bridge, step, &script_context) {
            failed += 1;
            tracing::error!(step = number, command = %step.command, error = %e, "step failed");
            eprintln!("Step {} ({}) failed: {}", number, step.command, e);
        }
    }

    let memory = bridge.memory();
    if !memory.is_empty() {
        tracing::debug!(
            entries = memory.len(),
            namespaces = ?memory.namespaces(),
            "session memory"
        );
    }

    if failed > 0 {
        return Err(BridgeError::Script(format!(
            "{} of {} commands failed",
            failed,
            session.commands.len()
        )));
    }
    Ok(())
}

fn run_step<H: Host>(bridge: &CommandBridge<H>, step: &Step, script_context: &ContextSpec) -> Result<()> {
    let spec = match &step.context {
        Some(context) => {
            if context.workspace.is_some() {
                tracing::warn!(command = %step.command, "ignoring per-step workspace");
            }
            script_context.overlay(&context.to_spec()?)
        }
        None => script_context.clone(),
    };

    let editor = spec.editor_context();
    let outcome = bridge.dispatch(&step.command, step.args.clone(), editor.as_ref())?;
    settle(bridge, outcome)
}
