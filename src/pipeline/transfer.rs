//! Batch copy into the destination directory.

use std::fs;

use tracing::debug;

use crate::entries::EntrySet;
use crate::errors::PluckError;
use crate::pipeline::scan::DirectoryHandle;

/// What a copy attempt produced: the entries that actually landed, plus the
/// first failure if one occurred. Earlier copies are never rolled back; they
/// stay eligible for disposal.
#[derive(Debug)]
pub struct TransferOutcome {
    pub transferred: EntrySet,
    pub failure: Option<PluckError>,
}

pub struct TransferEngine;

impl TransferEngine {
    /// Copy each entry to the destination under its display name, overwriting
    /// any pre-existing file of that name. Fail-fast: the first error stops
    /// the batch; remaining entries are not attempted.
    ///
    /// File bytes are preserved; metadata follows the host platform's default
    /// file-creation contract.
    pub fn copy_batch(batch: &EntrySet, dest: &DirectoryHandle) -> TransferOutcome {
        let mut transferred = EntrySet::new();
        for entry in batch.iter() {
            let target = entry.destination_in(dest.path());
            match fs::copy(entry.path(), &target) {
                Ok(bytes) => {
                    debug!(src = %entry.path().display(), dest = %target.display(), bytes, "copied");
                    transferred.push(entry.clone());
                }
                Err(e) => {
                    return TransferOutcome {
                        transferred,
                        failure: Some(PluckError::Copy {
                            path: entry.path().to_path_buf(),
                            source: e,
                        }),
                    };
                }
            }
        }
        TransferOutcome {
            transferred,
            failure: None,
        }
    }
}
