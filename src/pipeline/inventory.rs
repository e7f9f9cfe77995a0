//! Final report of what remains in the source directory.
//!
//! A read-after-write check: it reveals files the user dropped into the
//! directory mid-run, or files left behind by a skipped or failed transfer.

use std::path::Path;

use crate::entries::{Entry, EntrySet};
use crate::output as out;
use crate::pipeline::scan::DirectoryHandle;

pub struct InventoryReporter;

impl InventoryReporter {
    /// Re-scan `dir` and print what is left behind.
    pub fn report(dir: &DirectoryHandle) {
        out::print_user("");
        out::print_banner("FINISHED", &Self::summary(dir));
    }

    /// Fresh scan plus formatting. Calling twice without an intervening
    /// filesystem change yields identical text.
    pub fn summary(dir: &DirectoryHandle) -> String {
        Self::format(dir.path(), &dir.entries())
    }

    fn format(path: &Path, left: &EntrySet) -> String {
        match left.len() {
            0 => format!("No files left on '{}'.", path.display()),
            1 => {
                let name = left.iter().next().map(Entry::name).unwrap_or_default();
                format!("Left file on '{}':\n- '{}'", path.display(), name)
            }
            total => {
                let mut text = format!("Left files on '{}':", path.display());
                for (i, entry) in left.iter().enumerate() {
                    text.push_str(&format!("\n({}/{}) - '{}'", i + 1, total, entry.name()));
                }
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_directory_reports_no_files_left() {
        let td = tempdir().unwrap();
        let summary = InventoryReporter::summary(&DirectoryHandle::new(td.path()));
        assert_eq!(
            summary,
            format!("No files left on '{}'.", td.path().display())
        );
    }

    #[test]
    fn single_file_is_named_directly() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("only.txt"), "o").unwrap();
        let summary = InventoryReporter::summary(&DirectoryHandle::new(td.path()));
        assert_eq!(
            summary,
            format!("Left file on '{}':\n- 'only.txt'", td.path().display())
        );
    }

    #[test]
    fn several_files_get_an_indexed_list() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), "a").unwrap();
        fs::write(td.path().join("b.txt"), "b").unwrap();
        let summary = InventoryReporter::summary(&DirectoryHandle::new(td.path()));
        assert_eq!(
            summary,
            format!(
                "Left files on '{}':\n(1/2) - 'a.txt'\n(2/2) - 'b.txt'",
                td.path().display()
            )
        );
    }

    #[test]
    fn summary_is_idempotent_without_fs_changes() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), "a").unwrap();
        let handle = DirectoryHandle::new(td.path());
        assert_eq!(
            InventoryReporter::summary(&handle),
            InventoryReporter::summary(&handle)
        );
    }
}
