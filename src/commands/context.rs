//! Building editor context and host environment from CLI flags and scripts.

use crate::cli::ContextArgs;
use crate::editor::{EditorContext, Position, Selection};
use crate::environment::HostEnvironment;
use std::path::{Path, PathBuf};

/// Editor context as requested by the caller, before the document is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSpec {
    pub file: Option<PathBuf>,
    pub text: Option<String>,
    pub cursor: Option<Position>,
    pub anchor: Option<Position>,
}

impl ContextSpec {
    pub fn from_args(args: &ContextArgs) -> Self {
        Self {
            file: args.file.clone(),
            text: args.text.clone(),
            cursor: args.cursor,
            anchor: args.anchor,
        }
    }

    /// Fields set in `other` replace the ones in `self`.
    pub fn overlay(&self, other: &ContextSpec) -> ContextSpec {
        ContextSpec {
            file: other.file.clone().or_else(|| self.file.clone()),
            text: other.text.clone().or_else(|| self.text.clone()),
            cursor: other.cursor.or(self.cursor),
            anchor: other.anchor.or(self.anchor),
        }
    }

    /// True when no editor is open.
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.text.is_none() && self.cursor.is_none() && self.anchor.is_none()
    }

    /// Snapshot the editor.
    ///
    /// The document text is read from `file` when no text was given. A file
    /// that cannot be read is treated as an empty document.
    pub fn editor_context(&self) -> Option<EditorContext> {
        if self.is_empty() {
            return None;
        }

        let file = self.file.as_deref().map(absolute);
        let text = match (&self.text, &file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path).unwrap_or_else(|e| {
                tracing::debug!(path = %path.display(), error = %e, "treating unreadable document as empty");
                String::new()
            }),
            (None, None) => String::new(),
        };

        let active = self.cursor.unwrap_or_default();
        let selection = match self.anchor {
            Some(anchor) => Selection::new(anchor, active),
            None => Selection::caret(active),
        };
        Some(EditorContext::from_document(file, &text, selection))
    }
}

/// Host environment for this process. The workspace folder defaults to the
/// current directory.
pub fn environment(workspace: Option<&Path>) -> HostEnvironment {
    let workspace = match workspace {
        Some(dir) => Some(absolute(dir)),
        None => std::env::current_dir().ok(),
    };
    HostEnvironment::detect(workspace)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
