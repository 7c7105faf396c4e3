//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Configuration for the system host.
///
/// Unknown fields in the YAML are preserved for forward compatibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Shell execution
    // =========================================================================
    /// Program that runs `exec` commands (default: "sh").
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Arguments passed to `shell` before the command text (default: ["-c"]).
    #[serde(default = "default_shell_args")]
    pub shell_args: Vec<String>,

    // =========================================================================
    // Host programs
    // =========================================================================
    /// Shell started by `createTerminal` when no `shellPath` is given.
    /// Falls back to `$SHELL`, then to `shell`.
    #[serde(default)]
    pub terminal_shell: Option<String>,

    /// Command line that receives clipboard text on stdin.
    /// When unset, a platform clipboard tool is detected.
    #[serde(default)]
    pub clipboard_command: Option<String>,

    /// Command line used to open files; the path is appended.
    /// Falls back to `$VISUAL`, then `$EDITOR`.
    #[serde(default)]
    pub editor_command: Option<String>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            shell_args: default_shell_args(),
            terminal_shell: None,
            clipboard_command: None,
            editor_command: None,
            extra: BTreeMap::new(),
        }
    }
}
