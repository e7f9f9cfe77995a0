//! Name-conflict resolution against the destination directory.
//!
//! Detection is name-based only; file content is never compared.

use anyhow::Result;

use crate::entries::EntrySet;
use crate::output as out;
use crate::pipeline::scan::DirectoryHandle;
use crate::ui::Asker;

pub struct ConflictResolver<'a> {
    asker: &'a dyn Asker,
}

impl<'a> ConflictResolver<'a> {
    pub fn new(asker: &'a dyn Asker) -> Self {
        Self { asker }
    }

    /// Entries whose display name already exists at the destination. Pure
    /// with respect to the destination snapshot: without an intervening
    /// filesystem change, repeated calls agree.
    pub fn conflicts(batch: &EntrySet, dest: &DirectoryHandle) -> EntrySet {
        batch
            .iter()
            .filter(|e| e.exists_in(dest.path()))
            .cloned()
            .collect()
    }

    /// Keep non-conflicting entries as-is; ask per conflicting entry whether
    /// to overwrite. A rejected entry leaves the batch entirely: it is
    /// neither copied nor deleted later.
    pub fn resolve(&self, batch: EntrySet, dest: &DirectoryHandle) -> Result<EntrySet> {
        let mut resolved = EntrySet::new();
        for entry in batch.iter() {
            if entry.exists_in(dest.path()) {
                let prompt = format!("Name duplicated: '{}', overwrite?", entry.name());
                if !self.asker.confirm(&prompt)? {
                    out::print_user("==> skipped");
                    continue;
                }
            }
            resolved.push(entry.clone());
        }
        Ok(resolved)
    }
}
