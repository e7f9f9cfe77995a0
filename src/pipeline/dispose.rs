//! Disposal of original files after a confirmed transfer.

use std::fs;

use anyhow::Result;
use tracing::debug;

use crate::entries::EntrySet;
use crate::errors::PluckError;
use crate::output as out;
use crate::ui::Asker;

#[derive(Debug, PartialEq, Eq)]
pub enum DisposalOutcome {
    /// Confirmation rejected; the originals remain.
    Kept,
    /// Confirmation accepted; all originals deleted.
    Deleted,
}

pub struct DisposalManager<'a> {
    asker: &'a dyn Asker,
}

impl<'a> DisposalManager<'a> {
    pub fn new(asker: &'a dyn Asker) -> Self {
        Self { asker }
    }

    /// Show the manifest of transferred entries, then ask once whether to
    /// delete the originals. Rejecting is a no-op. Deletion is fail-fast,
    /// matching the copy phase: the first failure stops the batch.
    ///
    /// `requested` is the size of the batch the transfer was asked to copy;
    /// when fewer entries landed, the manifest is headed by a partial-copy
    /// notice instead of the success banner.
    pub fn dispose(&self, transferred: &EntrySet, requested: usize) -> Result<DisposalOutcome> {
        for (i, entry) in transferred.iter().enumerate() {
            out::print_user(&format!(
                "({}/{}) - '{}'",
                i + 1,
                transferred.len(),
                entry.name()
            ));
        }
        out::print_user("");
        let summary = copy_summary(transferred.len(), requested);
        if transferred.len() == requested {
            out::print_success(&summary);
        } else {
            out::print_warn(&summary);
        }

        if !self.asker.confirm("DELETE original?")? {
            return Ok(DisposalOutcome::Kept);
        }
        for entry in transferred.iter() {
            fs::remove_file(entry.path()).map_err(|e| PluckError::Delete {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            debug!(path = %entry.path().display(), "deleted original");
        }
        out::print_success("done.");
        Ok(DisposalOutcome::Deleted)
    }
}

fn copy_summary(copied: usize, requested: usize) -> String {
    if copied == requested {
        "successfully copied everything.".to_string()
    } else {
        format!("copied {copied} of {requested}.")
    }
}
