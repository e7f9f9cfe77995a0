//! Directory listing with the pipeline's eligibility rules.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::entries::{Entry, EntrySet};

/// Name suffix of configuration files that are never eligible.
const CONFIG_SUFFIX: &str = ".ini";
/// Name prefix left behind by transient lock files.
const LOCK_PREFIX: &str = "~$";

/// A directory to scan plus an optional path that must never appear in its
/// own listing (the destination, when it happens to sit inside the scanned
/// tree).
#[derive(Debug, Clone)]
pub struct DirectoryHandle {
    path: PathBuf,
    exception: Option<PathBuf>,
}

impl DirectoryHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            exception: None,
        }
    }

    pub fn with_exception(path: impl Into<PathBuf>, exception: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            exception: Some(exception.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Eligible immediate children, sorted by path. Subdirectories,
    /// configuration files, lock files and the exception path are skipped.
    ///
    /// A listing failure yields an empty set: downstream treats "unreadable"
    /// the same as "nothing to do". Each call re-lists the filesystem.
    pub fn entries(&self) -> EntrySet {
        let reader = match fs::read_dir(&self.path) {
            Ok(r) => r,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "directory listing failed");
                return EntrySet::new();
            }
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for dent in reader.flatten() {
            // unstattable entries are skipped like directories
            let is_dir = dent.file_type().map(|t| t.is_dir()).unwrap_or(true);
            if is_dir {
                continue;
            }
            let name = dent.file_name().to_string_lossy().into_owned();
            if name.ends_with(CONFIG_SUFFIX) || name.starts_with(LOCK_PREFIX) {
                continue;
            }
            let path = dent.path();
            if self.is_exception(&path) {
                continue;
            }
            paths.push(path);
        }
        paths.sort();
        debug!(path = %self.path.display(), count = paths.len(), "scanned directory");
        paths.into_iter().map(Entry::new).collect()
    }

    fn is_exception(&self, candidate: &Path) -> bool {
        let Some(exc) = &self.exception else {
            return false;
        };
        if candidate == exc {
            return true;
        }
        // account for symlinks and relative spellings
        match (fs::canonicalize(candidate), fs::canonicalize(exc)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
