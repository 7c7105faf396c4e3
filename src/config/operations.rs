//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{BridgeError, Result};
use std::path::{Path, PathBuf};

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(BridgeError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path`, or from the default location when `path` is
    /// `None`. A missing file at the default location yields defaults; an
    /// explicitly requested file must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(default_path) if default_path.exists() => {
                tracing::debug!(path = %default_path.display(), "loading config");
                Self::load(default_path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BridgeError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `shell` must be non-empty
    /// - `terminal_shell`, when set, must be non-empty
    /// - `clipboard_command` and `editor_command`, when set, must split into
    ///   at least one word
    pub fn validate(&self) -> Result<()> {
        if self.shell.trim().is_empty() {
            return Err(BridgeError::Config(
                "config validation failed: shell must not be empty".to_string(),
            ));
        }

        if let Some(shell) = &self.terminal_shell
            && shell.trim().is_empty()
        {
            return Err(BridgeError::Config(
                "config validation failed: terminal_shell must not be empty when set".to_string(),
            ));
        }

        for (field, value) in [
            ("clipboard_command", &self.clipboard_command),
            ("editor_command", &self.editor_command),
        ] {
            if let Some(command) = value {
                split_command(field, command)?;
            }
        }

        Ok(())
    }

    /// Clipboard command split into program and arguments, if configured.
    pub fn clipboard_argv(&self) -> Result<Option<Vec<String>>> {
        self.clipboard_command
            .as_deref()
            .map(|c| split_command("clipboard_command", c))
            .transpose()
    }

    /// Editor command split into program and arguments, if configured.
    pub fn editor_argv(&self) -> Result<Option<Vec<String>>> {
        self.editor_command
            .as_deref()
            .map(|c| split_command("editor_command", c))
            .transpose()
    }
}

/// Split a configured command line with shell quoting rules.
pub(crate) fn split_command(field: &str, command: &str) -> Result<Vec<String>> {
    let argv = shell_words::split(command).map_err(|e| {
        BridgeError::Config(format!(
            "config validation failed: {} '{}' could not be parsed: {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            field, command, e
        ))
    })?;

    if argv.is_empty() {
        return Err(BridgeError::Config(format!(
            "config validation failed: {} must not be empty",
            field
        )));
    }

    Ok(argv)
}
