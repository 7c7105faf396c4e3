//! `copy` forwarder.

use crate::error::Result;
use crate::host::ClipboardHost;
use crate::placeholder::Resolver;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CopyArgs {
    /// Lines to copy, joined with `\n` after resolution.
    pub lines: Vec<String>,
}

/// Resolve each line, join them, and write the result to the clipboard.
///
/// Returns the text that was written.
pub fn copy<H: ClipboardHost>(host: &H, resolver: &Resolver<'_>, args: CopyArgs) -> Result<String> {
    let text = resolver.resolve_all(&args.lines).join("\n");
    host.write_text(&text)?;
    tracing::info!(lines = args.lines.len(), "copied to clipboard");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::test_support::{RecordingHost, editor_at, test_environment};

    #[test]
    fn test_copy_resolves_and_joins_lines() {
        let host = RecordingHost::new();
        let memory = MemoryStore::new();
        let env = test_environment();
        let editor = editor_at("/a.txt", "x", 0, 0);
        let resolver = Resolver::new(&env, Some(&editor), &memory);

        let text = copy(
            &host,
            &resolver,
            CopyArgs {
                lines: vec!["{word}".to_string(), "literal".to_string()],
            },
        )
        .unwrap();

        assert_eq!(text, "x\nliteral");
        assert_eq!(host.clipboard().as_deref(), Some("x\nliteral"));
    }

    #[test]
    fn test_copy_no_lines_writes_empty_text() {
        let host = RecordingHost::new();
        let memory = MemoryStore::new();
        let env = test_environment();
        let resolver = Resolver::new(&env, None, &memory);

        copy(&host, &resolver, CopyArgs { lines: vec![] }).unwrap();
        assert_eq!(host.clipboard().as_deref(), Some(""));
    }

    #[test]
    fn test_copy_clipboard_failure_propagates() {
        let host = RecordingHost::new().clipboard_fails("clipboard unavailable");
        let memory = MemoryStore::new();
        let env = test_environment();
        let resolver = Resolver::new(&env, None, &memory);

        let err = copy(
            &host,
            &resolver,
            CopyArgs {
                lines: vec!["text".to_string()],
            },
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "clipboard unavailable");
        assert_eq!(host.clipboard(), None);
    }
}
