//! Placeholder engine.
//!
//! Expands `{name}` and `{memory:key}` tokens in command arguments using the
//! active editor, the host environment, and the named value store.
//!
//! # Tokens
//!
//! | Token | Value |
//! |-------|-------|
//! | `{memory:<key>}` | value remembered under `<key>` |
//! | `{userHome}` | home directory |
//! | `{workspaceFolder}`, `{workspaceFolderBasename}` | workspace root and its last segment |
//! | `{file}`, `{fileBasename}`, `{fileBasenameNoExtension}`, `{fileDirname}`, `{fileExtname}`, `{fileExtnameNoLeadingDot}` | active file and its parts |
//! | `{lineNumber}`, `{columnNumber}` | cursor, one-based |
//! | `{selection}`, `{selectionOrWord}`, `{word}` | selected text and word under cursor |
//! | `{selectionStart}`, `{selectionEnd}` | `line:column`, one-based |
//! | `{selectionStartLine}`, `{selectionStartColumn}`, `{selectionEndLine}`, `{selectionEndColumn}` | selection bounds, one-based |
//!
//! Missing context resolves to an empty string (or `1` for positions).
//! Resolution never fails.
//!
//! Substitution is a single pass that replaces every occurrence of each
//! token. It is not a chain of first-match string replacements: a repeated
//! token is expanded each time, and inserted text is never rescanned.

mod engine;
mod paths;
mod tilde;


pub use engine::{Resolver, resolve};
pub use tilde::expand_tilde;
