//! Editor context supplied to placeholder resolution.
//!
//! An `EditorContext` is a snapshot of the active document: its path (if
//! saved), the current selection, the selected text, and the word under the
//! cursor. It is built fresh for every command invocation and never stored.
//!
//! Positions are zero-based internally. Placeholders render them one-based.

mod word;

pub use word::word_at;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A zero-based line/column position in a document.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position rendered one-based as `<line>:<column>`.
    pub fn display(&self) -> String {
        format!("{}:{}", self.line + 1, self.column + 1)
    }
}

/// Error returned when parsing a one-based `LINE:COL` position fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid position '{}': expected LINE or LINE:COL with values starting at 1",
            self.0
        )
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parse a one-based `LINE:COL` (or bare `LINE`) into a zero-based position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (line, column) = match s.split_once(':') {
            Some((line, column)) => (line, column),
            None => (s, "1"),
        };

        let line: usize = line.trim().parse().map_err(|_| err())?;
        let column: usize = column.trim().parse().map_err(|_| err())?;
        if line == 0 || column == 0 {
            return Err(err());
        }

        Ok(Self::new(line - 1, column - 1))
    }
}

/// A selection between an anchor and the active (cursor) position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Position,
    /// Where the cursor currently is.
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection with the cursor at `position`.
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// Snapshot of the active editor for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContext {
    /// Path of the active document; `None` for untitled documents.
    pub file: Option<PathBuf>,
    pub selection: Selection,
    /// Exact text covered by `selection`.
    pub selected_text: String,
    /// Word under the cursor, if the cursor touches one.
    pub word: Option<String>,
}

impl EditorContext {
    /// Build a context from document text, deriving the selected text and
    /// the word under the cursor.
    pub fn from_document(file: Option<PathBuf>, text: &str, selection: Selection) -> Self {
        Self {
            file,
            selection,
            selected_text: text_between(text, selection.start(), selection.end()),
            word: word_at(text, selection.active),
        }
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.selection.active
    }

    /// File path as a string, or empty when the document is untitled.
    pub fn file_str(&self) -> String {
        self.file
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Extract text between two positions, clamping to the document bounds.
fn text_between(text: &str, start: Position, end: Position) -> String {
    if start == end {
        return String::new();
    }
    match (char_offset(text, start), char_offset(text, end)) {
        (Some(from), Some(to)) if from < to => text[from..to].to_string(),
        (Some(from), None) => text[from..].to_string(),
        _ => String::new(),
    }
}

/// Byte offset of `pos` within `text`. Columns past the end of a line clamp
/// to the line end; lines past the end of the document yield `None`.
fn char_offset(text: &str, pos: Position) -> Option<usize> {
    let mut line_start = 0;
    for (index, line) in text.split('\n').enumerate() {
        if index == pos.line {
            let content = line.strip_suffix('\r').unwrap_or(line);
            let column = content
                .char_indices()
                .nth(pos.column)
                .map(|(i, _)| i)
                .unwrap_or(content.len());
            return Some(line_start + column);
        }
        line_start += line.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).display(), "1:1");
        assert_eq!(Position::new(4, 9).display(), "5:10");
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("3:5".parse::<Position>().unwrap(), Position::new(2, 4));
        assert_eq!("7".parse::<Position>().unwrap(), Position::new(6, 0));
        assert!("0:1".parse::<Position>().is_err());
        assert!("1:0".parse::<Position>().is_err());
        assert!("a:b".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_parse_position_error_message() {
        let err = "x".parse::<Position>().unwrap_err();
        assert!(err.to_string().contains("invalid position 'x'"));
    }

    #[test]
    fn test_selection_orders_bounds() {
        let sel = Selection::new(Position::new(3, 2), Position::new(1, 4));
        assert_eq!(sel.start(), Position::new(1, 4));
        assert_eq!(sel.end(), Position::new(3, 2));
        assert!(!sel.is_empty());
        assert!(Selection::caret(Position::new(1, 1)).is_empty());
    }

    #[test]
    fn test_from_document_single_line_selection() {
        let text = "let value = compute();\n";
        let sel = Selection::new(Position::new(0, 4), Position::new(0, 9));
        let ctx = EditorContext::from_document(None, text, sel);

        assert_eq!(ctx.selected_text, "value");
        assert_eq!(ctx.word.as_deref(), Some("value"));
    }

    #[test]
    fn test_from_document_backwards_multiline_selection() {
        let text = "first line\nsecond line\nthird";
        let sel = Selection::new(Position::new(1, 6), Position::new(0, 6));
        let ctx = EditorContext::from_document(None, text, sel);

        assert_eq!(ctx.selected_text, "line\nsecond");
        assert_eq!(ctx.cursor(), Position::new(0, 6));
    }

    #[test]
    fn test_from_document_empty_selection_has_word() {
        let text = "call foo(bar)";
        let ctx = EditorContext::from_document(
            Some(PathBuf::from("/tmp/a.rs")),
            text,
            Selection::caret(Position::new(0, 6)),
        );

        assert_eq!(ctx.selected_text, "");
        assert_eq!(ctx.word.as_deref(), Some("foo"));
        assert_eq!(ctx.file_str(), "/tmp/a.rs");
    }

    #[test]
    fn test_selection_past_end_clamps() {
        let text = "abc";
        let sel = Selection::new(Position::new(0, 1), Position::new(5, 0));
        let ctx = EditorContext::from_document(None, text, sel);
        assert_eq!(ctx.selected_text, "bc");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "one\r\ntwo\r\n";
        let sel = Selection::new(Position::new(1, 0), Position::new(1, 3));
        let ctx = EditorContext::from_document(None, text, sel);
        assert_eq!(ctx.selected_text, "two");
    }

    #[test]
    fn test_unicode_columns_count_chars() {
        let text = "日本語 text";
        let sel = Selection::new(Position::new(0, 0), Position::new(0, 3));
        let ctx = EditorContext::from_document(None, text, sel);
        assert_eq!(ctx.selected_text, "日本語");
    }
}
