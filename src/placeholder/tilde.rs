//! Leading-tilde expansion for path arguments.

use std::path::Path;

/// Expand a leading `~` or `~/` to `home`.
///
/// Only a bare `~` or a `~/` prefix is expanded; `~user/...` and tildes
/// elsewhere in the string are left alone.
pub fn expand_tilde(path: &str, home: &Path) -> String {
    if path == "~" {
        return home.to_string_lossy().into_owned();
    }
    match path.strip_prefix("~/") {
        Some(rest) => format!("{}/{}", home.to_string_lossy(), rest),
        None => path.to_string(),
    }
}
