//! Word-under-cursor lookup.
//!
//! A word is either a signed decimal number (`-1.5`, `.25`) or a run of
//! characters that are neither whitespace nor common punctuation. The cursor
//! touches a word when it sits anywhere from the word's first character up to
//! and including the position just after its last character.

use super::Position;
use regex::Regex;
use std::sync::LazyLock;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(-?\d*\.\d\w*)|([^`~!@#$%^&*()\-=+\[{\]}\\|;:'",.<>/?\s]+)"#)
        .expect("Invalid word regex")
});

/// Return the word touching `pos` in `text`, if any.
pub fn word_at(text: &str, pos: Position) -> Option<String> {
    let line = text.split('\n').nth(pos.line)?;
    let line = line.strip_suffix('\r').unwrap_or(line);

    let cursor = line
        .char_indices()
        .nth(pos.column)
        .map(|(i, _)| i)
        .unwrap_or(line.len());

    WORD_REGEX
        .find_iter(line)
        .find(|m| m.start() <= cursor && cursor <= m.end())
        .map(|m| m.as_str().to_string())
}
