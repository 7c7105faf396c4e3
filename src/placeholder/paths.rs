//! Path decomposition for file placeholders.
//!
//! Works on strings rather than `Path` components so that the extension rules
//! match what editor users expect: the extension of `archive.tar.gz` is
//! `.gz`, `.bashrc` has none, and `notes.` has the extension `.`.

use std::path::Path;

/// Last path segment, ignoring trailing separators. Empty for an empty path.
pub fn basename(path: &str) -> String {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return String::new();
    }
    match trimmed.rfind(is_separator) {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Everything before the last segment.
///
/// Returns `.` for a bare file name and `/` for entries directly under the
/// root. Empty for an empty path.
pub fn dirname(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    match Path::new(path).parent() {
        Some(parent) if parent.as_os_str().is_empty() => ".".to_string(),
        Some(parent) => parent.to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}

/// Extension of the last segment including the leading dot, or empty.
///
/// The `.` and `..` directory entries have no extension.
pub fn extname(path: &str) -> String {
    let base = basename(path);
    if base == ".." {
        return String::new();
    }
    match base.rfind('.') {
        Some(0) | None => String::new(),
        Some(idx) => base[idx..].to_string(),
    }
}

/// Last segment with its extension removed.
pub fn basename_no_extension(path: &str) -> String {
    let base = basename(path);
    let ext = extname(path);
    base[..base.len() - ext.len()].to_string()
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}
