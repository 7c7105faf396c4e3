//! Host environment shared by every resolution in a process.

use std::path::{Path, PathBuf};

/// Values that stay fixed for the life of the process: the user's home
/// directory and the open workspace folder, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    pub home: PathBuf,
    pub workspace_folder: Option<PathBuf>,
}

impl HostEnvironment {
    pub fn new(home: impl Into<PathBuf>, workspace_folder: Option<PathBuf>) -> Self {
        Self {
            home: home.into(),
            workspace_folder,
        }
    }

    /// Detect the home directory from the running user's profile.
    ///
    /// Falls back to an empty path when the platform reports no home, which
    /// makes `{userHome}` and `~` expand to nothing rather than failing.
    pub fn detect(workspace_folder: Option<PathBuf>) -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        if home.as_os_str().is_empty() {
            tracing::warn!("could not determine home directory; `~` will expand to an empty path");
        }
        Self::new(home, workspace_folder)
    }

    pub fn home_str(&self) -> String {
        self.home.to_string_lossy().into_owned()
    }

    pub fn workspace_folder(&self) -> Option<&Path> {
        self.workspace_folder.as_deref()
    }
}
