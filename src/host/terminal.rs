//! Terminal creation options.
//!
//! `TerminalOptions` is both the argument object of `createTerminal` and the
//! value handed to `TerminalHost` once its string fields are resolved.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a terminal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocationRepr", rename_all = "lowercase")]
pub enum TerminalLocation {
    Panel,
    Editor,
}

/// Accepted spellings of a terminal location: `1`/`2` or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocationRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<LocationRepr> for TerminalLocation {
    type Error = String;

    fn try_from(repr: LocationRepr) -> Result<Self, Self::Error> {
        match repr {
            LocationRepr::Code(1) => Ok(Self::Panel),
            LocationRepr::Code(2) => Ok(Self::Editor),
            LocationRepr::Code(other) => Err(format!(
                "invalid terminal location {} (expected 1 for panel or 2 for editor)",
                other
            )),
            LocationRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "panel" => Ok(Self::Panel),
                "editor" => Ok(Self::Editor),
                _ => Err(format!(
                    "invalid terminal location '{}' (expected \"panel\" or \"editor\")",
                    name
                )),
            },
        }
    }
}

/// Shell arguments given either as one command-line string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShellArgs {
    Line(String),
    List(Vec<String>),
}

impl ShellArgs {
    /// Arguments as passed to the shell program. A single string is passed
    /// as one argument, matching how editors hand it to the shell.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ShellArgs::Line(line) => vec![line.clone()],
            ShellArgs::List(args) => args.clone(),
        }
    }
}

/// Options for a new terminal session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalOptions {
    pub color: Option<String>,
    /// Working directory. `~` is expanded.
    pub cwd: Option<String>,
    /// Extra environment. `null` values are dropped.
    pub env: Option<BTreeMap<String, Option<String>>>,
    pub hide_from_user: Option<bool>,
    pub icon_path: Option<String>,
    pub is_transient: Option<bool>,
    pub location: Option<TerminalLocation>,
    /// Printed before the shell starts.
    pub message: Option<String>,
    pub name: Option<String>,
    pub shell_args: Option<ShellArgs>,
    pub shell_path: Option<String>,
    /// Start from an empty environment instead of inheriting the host's.
    pub strict_env: Option<bool>,
}

impl TerminalOptions {
    pub fn is_hidden(&self) -> bool {
        self.hide_from_user.unwrap_or(false)
    }

    pub fn is_strict_env(&self) -> bool {
        self.strict_env.unwrap_or(false)
    }

    /// Environment entries with values; `null` entries are skipped.
    pub fn env_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env
            .iter()
            .flatten()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

/// A created terminal, as reported to the close handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    pub name: Option<String>,
    pub creation_options: TerminalOptions,
}

impl Terminal {
    pub fn new(creation_options: TerminalOptions) -> Self {
        Self {
            name: creation_options.name.clone(),
            creation_options,
        }
    }

    pub fn location(&self) -> Option<TerminalLocation> {
        self.creation_options.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_from_code_and_name() {
        let panel: TerminalLocation = serde_json::from_value(json!(1)).unwrap();
        let editor: TerminalLocation = serde_json::from_value(json!(2)).unwrap();
        let named: TerminalLocation = serde_json::from_value(json!("Editor")).unwrap();

        assert_eq!(panel, TerminalLocation::Panel);
        assert_eq!(editor, TerminalLocation::Editor);
        assert_eq!(named, TerminalLocation::Editor);
    }

    #[test]
    fn test_invalid_location_rejected() {
        let err = serde_json::from_value::<TerminalLocation>(json!(7)).unwrap_err();
        assert!(err.to_string().contains("invalid terminal location 7"));

        let err = serde_json::from_value::<TerminalLocation>(json!("sidebar")).unwrap_err();
        assert!(err.to_string().contains("sidebar"));
    }

    #[test]
    fn test_options_from_camel_case_json() {
        let options: TerminalOptions = serde_json::from_value(json!({
            "name": "build",
            "cwd": "~/src",
            "shellPath": "/bin/bash",
            "shellArgs": ["-l"],
            "hideFromUser": true,
            "strictEnv": false,
            "location": 2,
            "env": { "A": "1", "B": null }
        }))
        .unwrap();

        assert_eq!(options.name.as_deref(), Some("build"));
        assert_eq!(options.shell_path.as_deref(), Some("/bin/bash"));
        assert_eq!(options.shell_args, Some(ShellArgs::List(vec!["-l".to_string()])));
        assert!(options.is_hidden());
        assert!(!options.is_strict_env());
        assert_eq!(options.location, Some(TerminalLocation::Editor));
        assert_eq!(options.env_pairs().collect::<Vec<_>>(), vec![("A", "1")]);
    }

    #[test]
    fn test_empty_options() {
        let options: TerminalOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, TerminalOptions::default());
        assert_eq!(options.env_pairs().count(), 0);
    }

    #[test]
    fn test_shell_args_line_is_single_argument() {
        let args: ShellArgs = serde_json::from_value(json!("-l -i")).unwrap();
        assert_eq!(args.to_vec(), vec!["-l -i".to_string()]);
    }

    #[test]
    fn test_terminal_takes_name_from_options() {
        let terminal = Terminal::new(TerminalOptions {
            name: Some("logs".to_string()),
            location: Some(TerminalLocation::Panel),
            ..Default::default()
        });
        assert_eq!(terminal.name.as_deref(), Some("logs"));
        assert_eq!(terminal.location(), Some(TerminalLocation::Panel));
    }
}
