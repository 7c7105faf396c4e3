//! Host capabilities backed by local processes.
//!
//! `SystemHost` is what the CLI uses: terminals are interactive shells in the
//! current console, `exec` runs through the configured shell, the clipboard
//! is a platform tool fed on stdin, and documents open in `$VISUAL`/`$EDITOR`.

use super::{
    ClipboardHost, DocumentHost, ExecOutcome, ExecTask, FOCUS_FIRST_EDITOR_GROUP, MessageHost,
    ShellHost, ShowOptions, TerminalHost, TerminalOptions, WorkbenchHost,
};
use crate::config::Config;
use crate::error::{BridgeError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Host implementation that drives real processes.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    config: Config,
}

impl SystemHost {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Shell program for a new terminal.
    fn terminal_program(&self, options: &TerminalOptions) -> String {
        options
            .shell_path
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| self.config.terminal_shell.clone())
            .or_else(|| std::env::var("SHELL").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| self.config.shell.clone())
    }

    fn clipboard_argv(&self) -> Result<Vec<String>> {
        if let Some(argv) = self.config.clipboard_argv()? {
            return Ok(argv);
        }
        detect_clipboard_argv().ok_or_else(|| {
            BridgeError::Host(
                "no clipboard tool found.\n\
                 Fix: set clipboard_command in the command-bridge config."
                    .to_string(),
            )
        })
    }

    fn editor_argv(&self) -> Result<Option<Vec<String>>> {
        if let Some(argv) = self.config.editor_argv()? {
            return Ok(Some(argv));
        }
        for var in ["VISUAL", "EDITOR"] {
            if let Ok(value) = std::env::var(var)
                && !value.trim().is_empty()
            {
                let argv = shell_words::split(&value).map_err(|e| {
                    BridgeError::Host(format!("failed to parse ${} '{}': {}", var, value, e))
                })?;
                if !argv.is_empty() {
                    return Ok(Some(argv));
                }
            }
        }
        Ok(None)
    }
}

impl TerminalHost for SystemHost {
    fn create_terminal(&self, options: &TerminalOptions) -> Result<()> {
        let program = self.terminal_program(options);

        let mut command = Command::new(&program);
        if let Some(args) = &options.shell_args {
            command.args(args.to_vec());
        }
        if let Some(cwd) = options.cwd.as_deref().filter(|c| !c.is_empty()) {
            command.current_dir(cwd);
        }
        if options.is_strict_env() {
            command.env_clear();
        }
        for (key, value) in options.env_pairs() {
            command.env(key, value);
        }

        tracing::info!(
            name = options.name.as_deref().unwrap_or_default(),
            shell = %program,
            cwd = options.cwd.as_deref().unwrap_or_default(),
            hidden = options.is_hidden(),
            "creating terminal"
        );

        let spawn_error = |e: std::io::Error| {
            BridgeError::Host(format!(
                "failed to start terminal shell '{}': {}\n\
                 Fix: ensure the shell is installed and in PATH.",
                program, e
            ))
        };

        if options.is_hidden() {
            // Hidden terminals run detached; nobody waits on them.
            command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
            command.spawn().map_err(spawn_error)?;
            return Ok(());
        }

        if let Some(message) = &options.message {
            println!("{}", message);
        }

        let status = command.status().map_err(spawn_error)?;
        tracing::debug!(code = ?status.code(), "terminal exited");
        Ok(())
    }
}

impl ShellHost for SystemHost {
    fn spawn_shell(&self, command_text: &str) -> ExecTask {
        let shell = &self.config.shell;
        let mut command = Command::new(shell);
        command.args(&self.config.shell_args).arg(command_text);

        tracing::debug!(shell = %shell, command = command_text, "spawning shell command");

        let start = Instant::now();
        match command.spawn() {
            Ok(mut child) => ExecTask::spawn(move || {
                let status = child.wait().map_err(|e| {
                    BridgeError::Host(format!("failed to wait for shell command: {}", e))
                })?;
                Ok(ExecOutcome {
                    exit_code: status.code(),
                    duration: start.elapsed(),
                })
            }),
            Err(e) => ExecTask::finished(Err(BridgeError::Host(format!(
                "failed to start shell '{}': {}",
                shell, e
            )))),
        }
    }
}

impl ClipboardHost for SystemHost {
    fn write_text(&self, text: &str) -> Result<()> {
        let argv = self.clipboard_argv()?;
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| BridgeError::Host("clipboard command is empty".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BridgeError::Host(format!(
                    "failed to run clipboard command '{}': {}",
                    program, e
                ))
            })?;

        // Stdin is dropped before waiting so the tool sees end of input, and
        // the child is reaped even when the write fails.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait().map_err(|e| {
            BridgeError::Host(format!("failed to wait for clipboard command: {}", e))
        })?;
        written.map_err(|e| {
            BridgeError::Host(format!("failed to write to clipboard command: {}", e))
        })?;
        if !status.success() {
            return Err(BridgeError::Host(format!(
                "clipboard command '{}' exited with {:?}",
                program,
                status.code()
            )));
        }

        tracing::debug!(bytes = text.len(), "wrote clipboard");
        Ok(())
    }
}

impl DocumentHost for SystemHost {
    fn open_document(&self, path: &Path, options: ShowOptions) -> Result<()> {
        if !path.exists() {
            return Err(BridgeError::Host(format!(
                "file not found: {}",
                path.display()
            )));
        }
        if path.is_dir() {
            return Err(BridgeError::Host(format!(
                "{} is a directory",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), preview = options.preview, "opening document");

        let Some(argv) = self.editor_argv()? else {
            // No editor configured: the console is the editor view.
            println!("{}", path.display());
            return Ok(());
        };

        let (program, args) = argv
            .split_first()
            .ok_or_else(|| BridgeError::Host("editor command is empty".to_string()))?;
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|e| {
                BridgeError::Host(format!("failed to run editor '{}': {}", program, e))
            })?;

        if !status.success() {
            return Err(BridgeError::Host(format!(
                "editor '{}' exited with {:?}",
                program,
                status.code()
            )));
        }
        Ok(())
    }
}

impl MessageHost for SystemHost {
    fn set_status_message(&self, message: &str) {
        tracing::info!(status = message);
        eprintln!("{}", message);
    }

    fn show_error_message(&self, message: &str) {
        tracing::error!(error = message, "reported error");
        eprintln!("Error: {}", message);
    }
}

impl WorkbenchHost for SystemHost {
    fn execute_command(&self, command: &str) -> Result<()> {
        match command {
            // A console has a single editor group that always has focus.
            FOCUS_FIRST_EDITOR_GROUP => {
                tracing::debug!("focus first editor group");
                Ok(())
            }
            other => Err(BridgeError::Host(format!(
                "unsupported workbench command '{}'",
                other
            ))),
        }
    }
}

/// Pick a clipboard tool for the current platform and session.
fn detect_clipboard_argv() -> Option<Vec<String>> {
    let argv: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(windows) {
        &["clip"]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        &["wl-copy"]
    } else if std::env::var_os("DISPLAY").is_some() {
        &["xclip", "-selection", "clipboard"]
    } else {
        return None;
    };
    Some(argv.iter().map(|s| s.to_string()).collect())
}
