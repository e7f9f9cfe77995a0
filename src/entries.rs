//! Pipeline data model: one file entry and an ordered, path-unique set.

use std::path::{Path, PathBuf};

/// One file identified by its full path. The display name is always derived
/// from the final path segment, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name: the final path segment.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Where this entry would land inside `dir`.
    pub fn destination_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.name())
    }

    /// Whether a same-named entry already exists inside `dir`.
    pub fn exists_in(&self, dir: &Path) -> bool {
        self.destination_in(dir).exists()
    }
}

/// Ordered sequence of entries, unique by path. Insertion order is preserved
/// through the whole pipeline so reports come out deterministic. Removal is
/// the only mutation; entries are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: Vec<Entry>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless an entry with the same path is already present.
    pub fn push(&mut self, entry: Entry) {
        if !self.entries.iter().any(|e| e.path() == entry.path()) {
            self.entries.push(entry);
        }
    }

    /// Remove the entry with this path, if present.
    pub fn drop_path(&mut self, path: &Path) {
        self.entries.retain(|e| e.path() != path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Display names in set order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(Entry::name).collect()
    }
}

impl FromIterator<Entry> for EntrySet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.push(entry);
        }
        set
    }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
