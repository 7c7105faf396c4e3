//! Single-pass placeholder substitution.

use super::paths;
use crate::editor::EditorContext;
use crate::environment::HostEnvironment;
use crate::memory::MemoryStore;
use regex::Regex;
use std::sync::LazyLock;

/// `{memory:<key>}` where the key runs to the last `}` on the line.
static MEMORY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{memory:(.*)\}").expect("Invalid memory token regex"));

/// Resolves placeholder tokens against one editor snapshot.
///
/// A `Resolver` borrows everything it reads; constructing one is free, so
/// callers build a new one per command invocation.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    env: &'a HostEnvironment,
    editor: Option<&'a EditorContext>,
    memory: &'a MemoryStore,
}

impl<'a> Resolver<'a> {
    pub fn new(
        env: &'a HostEnvironment,
        editor: Option<&'a EditorContext>,
        memory: &'a MemoryStore,
    ) -> Self {
        Self {
            env,
            editor,
            memory,
        }
    }

    pub fn environment(&self) -> &'a HostEnvironment {
        self.env
    }

    /// Replace every recognized token in `template`.
    ///
    /// Scans left to right once. Substituted values are never scanned again,
    /// and unrecognized `{...}` sequences are copied through unchanged.
    /// Every occurrence of a token is replaced, so `{fileBasename}` twice in
    /// one template yields the name twice.
    pub fn resolve(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let candidate = &rest[open..];
            match self.match_token(candidate) {
                Some((consumed, value)) => {
                    result.push_str(&value);
                    rest = &candidate[consumed..];
                }
                None => {
                    result.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        result.push_str(rest);
        result
    }

    /// Resolve an optional field, keeping `None` as `None`.
    pub fn resolve_opt(&self, template: Option<&str>) -> Option<String> {
        template.map(|t| self.resolve(t))
    }

    /// Resolve each element of a list, preserving order.
    pub fn resolve_all<S: AsRef<str>>(&self, templates: &[S]) -> Vec<String> {
        templates.iter().map(|t| self.resolve(t.as_ref())).collect()
    }

    /// Match a token at the start of `text` (which begins with `{`).
    ///
    /// Returns the number of bytes consumed and the substituted value.
    fn match_token(&self, text: &str) -> Option<(usize, String)> {
        if let Some(caps) = MEMORY_TOKEN.captures(text) {
            let whole = caps.get(0)?;
            let key = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            return Some((whole.end(), self.memory.lookup(key)));
        }

        let close = text.find('}')?;
        let name = &text[1..close];
        self.token_value(name).map(|value| (close + 1, value))
    }

    fn token_value(&self, name: &str) -> Option<String> {
        let file = self.editor.map(EditorContext::file_str).unwrap_or_default();
        let selection = self.editor.map(|e| e.selection).unwrap_or_default();
        let cursor = self.editor.map(EditorContext::cursor).unwrap_or_default();

        let value = match name {
            "userHome" => self.env.home_str(),
            "workspaceFolder" => self.workspace_folder(),
            "workspaceFolderBasename" => paths::basename(&self.workspace_folder()),
            "file" => file,
            "fileBasename" => paths::basename(&file),
            "fileBasenameNoExtension" => paths::basename_no_extension(&file),
            "fileDirname" => paths::dirname(&file),
            "fileExtname" => paths::extname(&file),
            "fileExtnameNoLeadingDot" => {
                let ext = paths::extname(&file);
                ext.strip_prefix('.').unwrap_or(&ext).to_string()
            }
            "lineNumber" => (cursor.line + 1).to_string(),
            "columnNumber" => (cursor.column + 1).to_string(),
            "selection" => self.selected_text(),
            "selectionOrWord" => {
                let selected = self.selected_text();
                if selection.is_empty() || selected.is_empty() {
                    self.word()
                } else {
                    selected
                }
            }
            "selectionStart" => selection.start().display(),
            "selectionEnd" => selection.end().display(),
            "selectionStartLine" => (selection.start().line + 1).to_string(),
            "selectionStartColumn" => (selection.start().column + 1).to_string(),
            "selectionEndLine" => (selection.end().line + 1).to_string(),
            "selectionEndColumn" => (selection.end().column + 1).to_string(),
            "word" => self.word(),
            _ => return None,
        };

        Some(value)
    }

    fn workspace_folder(&self) -> String {
        self.env
            .workspace_folder()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn selected_text(&self) -> String {
        self.editor
            .map(|e| e.selected_text.clone())
            .unwrap_or_default()
    }

    fn word(&self) -> String {
        self.editor.and_then(|e| e.word.clone()).unwrap_or_default()
    }
}

/// Resolve `template` in one call.
pub fn resolve(
    template: &str,
    env: &HostEnvironment,
    editor: Option<&EditorContext>,
    memory: &MemoryStore,
) -> String {
    Resolver::new(env, editor, memory).resolve(template)
}
