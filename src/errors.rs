//! Typed error definitions for pluck.
//! Provides a small set of well-known failure modes for better messages and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluckError {
    #[error("source and destination are the same directory: '{0}'")]
    SamePath(PathBuf),

    #[error("not an existing directory: '{0}'")]
    NotADirectory(PathBuf),

    #[error("destination '{0}' has no parent directory")]
    NoParent(PathBuf),

    #[error("could not locate a desktop directory for the current user")]
    NoDesktop,

    #[error("failed to copy '{path}': {source}")]
    Copy { path: PathBuf, source: io::Error },

    #[error("failed to delete '{path}': {source}")]
    Delete { path: PathBuf, source: io::Error },
}
