use crate::editor::{EditorContext, Position, Selection};
use crate::environment::HostEnvironment;
use crate::error::{BridgeError, Result};
use crate::host::{
    ClipboardHost, DocumentHost, ExecOutcome, ExecTask, MessageHost, ShellHost, ShowOptions,
    TerminalHost, TerminalOptions, WorkbenchHost,
};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// One request received by a `RecordingHost`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    CreateTerminal(TerminalOptions),
    SpawnShell(String),
    WriteClipboard(String),
    OpenDocument(PathBuf, ShowOptions),
    StatusMessage(String),
    ErrorMessage(String),
    ExecuteCommand(String),
}

/// How the fake shell answers `spawn_shell`.
#[derive(Debug, Clone)]
enum ShellBehavior {
    Exit(Option<i32>),
    SpawnError(String),
}

/// Host double that records every call and fails on request.
#[derive(Debug)]
pub(crate) struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    shell: ShellBehavior,
    unopenable: Vec<PathBuf>,
    clipboard_error: Option<String>,
    terminal_error: Option<String>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            shell: ShellBehavior::Exit(Some(0)),
            unopenable: Vec::new(),
            clipboard_error: None,
            terminal_error: None,
        }
    }
}

impl RecordingHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn exec_exits_with(mut self, code: Option<i32>) -> Self {
        self.shell = ShellBehavior::Exit(code);
        self
    }

    pub(crate) fn exec_fails_to_spawn(mut self, message: &str) -> Self {
        self.shell = ShellBehavior::SpawnError(message.to_string());
        self
    }

    pub(crate) fn cannot_open(mut self, path: impl Into<PathBuf>) -> Self {
        self.unopenable.push(path.into());
        self
    }

    pub(crate) fn clipboard_fails(mut self, message: &str) -> Self {
        self.clipboard_error = Some(message.to_string());
        self
    }

    pub(crate) fn terminal_fails(mut self, message: &str) -> Self {
        self.terminal_error = Some(message.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<HostCall> {
        self.lock().clone()
    }

    pub(crate) fn clipboard(&self) -> Option<String> {
        self.lock().iter().rev().find_map(|call| match call {
            HostCall::WriteClipboard(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub(crate) fn status_messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::StatusMessage(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn error_messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::ErrorMessage(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn opened_documents(&self) -> Vec<PathBuf> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::OpenDocument(path, _) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn terminals(&self) -> Vec<TerminalOptions> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::CreateTerminal(options) => Some(options.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn shell_commands(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::SpawnShell(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn workbench_commands(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::ExecuteCommand(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.lock().push(call);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HostCall>> {
        self.calls.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl TerminalHost for RecordingHost {
    fn create_terminal(&self, options: &TerminalOptions) -> Result<()> {
        self.record(HostCall::CreateTerminal(options.clone()));
        match &self.terminal_error {
            Some(message) => Err(BridgeError::Host(message.clone())),
            None => Ok(()),
        }
    }
}

impl ShellHost for RecordingHost {
    fn spawn_shell(&self, command: &str) -> ExecTask {
        self.record(HostCall::SpawnShell(command.to_string()));
        match &self.shell {
            ShellBehavior::Exit(code) => {
                let code = *code;
                ExecTask::spawn(move || {
                    Ok(ExecOutcome {
                        exit_code: code,
                        duration: Duration::from_millis(1),
                    })
                })
            }
            ShellBehavior::SpawnError(message) => {
                ExecTask::finished(Err(BridgeError::Host(message.clone())))
            }
        }
    }
}

impl ClipboardHost for RecordingHost {
    fn write_text(&self, text: &str) -> Result<()> {
        if let Some(message) = &self.clipboard_error {
            return Err(BridgeError::Host(message.clone()));
        }
        self.record(HostCall::WriteClipboard(text.to_string()));
        Ok(())
    }
}

impl DocumentHost for RecordingHost {
    fn open_document(&self, path: &Path, options: ShowOptions) -> Result<()> {
        if self.unopenable.iter().any(|p| p == path) {
            return Err(BridgeError::Host("cannot open document".to_string()));
        }
        self.record(HostCall::OpenDocument(path.to_path_buf(), options));
        Ok(())
    }
}

impl MessageHost for RecordingHost {
    fn set_status_message(&self, message: &str) {
        self.record(HostCall::StatusMessage(message.to_string()));
    }

    fn show_error_message(&self, message: &str) {
        self.record(HostCall::ErrorMessage(message.to_string()));
    }
}

impl WorkbenchHost for RecordingHost {
    fn execute_command(&self, command: &str) -> Result<()> {
        self.record(HostCall::ExecuteCommand(command.to_string()));
        Ok(())
    }
}

/// Host environment used across tests.
pub(crate) fn test_environment() -> HostEnvironment {
    HostEnvironment::new("/home/dev", Some(PathBuf::from("/work/project")))
}

/// Editor on `file` with the cursor at a zero-based position and no selection.
pub(crate) fn editor_at(file: &str, text: &str, line: usize, column: usize) -> EditorContext {
    EditorContext::from_document(
        Some(PathBuf::from(file)),
        text,
        Selection::caret(Position::new(line, column)),
    )
}
