//! `openFile` forwarder.

use crate::host::{DocumentHost, MessageHost, ShowOptions};
use crate::placeholder::{Resolver, expand_tilde};
use serde::Deserialize;
use std::path::PathBuf;

/// One path or a list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    One(String),
    Many(Vec<String>),
}

impl PathList {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            PathList::One(path) => vec![path.clone()],
            PathList::Many(paths) => paths.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenFileArgs {
    pub paths: PathList,
}

/// Which paths opened and which failed, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenReport {
    pub opened: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl OpenReport {
    pub fn all_opened(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Open each path as a non-preview document.
///
/// Paths are resolved, then have their leading `~` expanded. A path that
/// fails to open is reported to the host and the remaining paths are still
/// attempted.
pub fn open_file<H>(host: &H, resolver: &Resolver<'_>, args: OpenFileArgs) -> OpenReport
where
    H: DocumentHost + MessageHost,
{
    let home = &resolver.environment().home;
    let mut report = OpenReport::default();

    for raw in args.paths.to_vec() {
        let path = PathBuf::from(expand_tilde(&resolver.resolve(&raw), home));

        match host.open_document(&path, ShowOptions { preview: false }) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "opened file");
                report.opened.push(path);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to open file");
                host.show_error_message(&format!(
                    "Failed to open file {}: {}",
                    path.display(),
                    e
                ));
                report.failed.push(path);
            }
        }
    }

    report
}
