//! In-memory store of highlights per tracked file.
//!
//! Pure data: nothing here triggers rendering or calls back into the editor.
//! A file entry exists only between explicit `set_file` and `remove_file`
//! calls, and operations against untracked files or absent keys are silent
//! no-ops rather than errors.

use crate::domain::{Highlight, Range, StyleHandle};
use dashmap::DashMap;
use dashmap::mapref::one::{Ref, RefMut};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Highlights for one file, keyed by range key.
pub type FileHighlights = HashMap<String, Highlight>;

/// The central store mapping tracked file paths to their highlight sets.
pub struct HighlightStore {
    files: DashMap<PathBuf, FileHighlights>,
}

impl Default for HighlightStore {
    fn default() -> Self {
        Self {
            files: DashMap::new(),
        }
    }
}

impl HighlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a pre-existing path-to-highlights map, e.g. state
    /// the surrounding application carried over from a previous session.
    pub fn with_files(files: HashMap<PathBuf, FileHighlights>) -> Self {
        Self {
            files: files.into_iter().collect(),
        }
    }

    pub fn has_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Create or overwrite the highlight set for `path`.
    pub fn set_file(&self, path: PathBuf, ranges: FileHighlights) {
        self.files.insert(path, ranges);
    }

    /// Drop `path` and all its highlights. Returns the removed set so the
    /// caller can dispose the style handles; `None` if the file was not
    /// tracked.
    pub fn remove_file(&self, path: &Path) -> Option<FileHighlights> {
        self.files.remove(path).map(|(_, ranges)| ranges)
    }

    /// Snapshot of the highlight set for `path`. Empty if the file is not
    /// tracked; never fails.
    pub fn file_ranges(&self, path: &Path) -> FileHighlights {
        self.files
            .get(path)
            .map(|ranges| ranges.value().clone())
            .unwrap_or_default()
    }

    pub fn has_file_range(&self, path: &Path, key: &str) -> bool {
        self.files
            .get(path)
            .is_some_and(|ranges| ranges.contains_key(key))
    }

    pub fn file_range(&self, path: &Path, key: &str) -> Option<Highlight> {
        self.files.get(path)?.get(key).cloned()
    }

    /// Insert or overwrite the highlight at `key` in `path`'s set.
    ///
    /// Does nothing when `path` is not tracked: an edit arriving for a
    /// closed file must not resurrect its entry.
    pub fn add_file_range(
        &self,
        path: &Path,
        key: impl Into<String>,
        range: Range,
        style: StyleHandle,
        color: impl Into<String>,
    ) {
        let Some(mut ranges) = self.files.get_mut(path) else {
            log::debug!(
                target: "himark::store",
                "ignoring highlight for untracked file {}",
                path.display()
            );
            return;
        };
        let key = key.into();
        let highlight = Highlight::new(key.clone(), range, style, color);
        ranges.insert(key, highlight);
    }

    /// Remove the highlight at `key`, returning it. No-op if the file or key
    /// is absent.
    pub fn remove_file_range(&self, path: &Path, key: &str) -> Option<Highlight> {
        self.files.get_mut(path)?.remove(key)
    }

    /// Read guard over a file's highlight set, for callers that want to walk
    /// the live entries without cloning.
    pub fn get(&self, path: &Path) -> Option<Ref<'_, PathBuf, FileHighlights>> {
        self.files.get(path)
    }

    /// Write guard over a file's highlight set, used by the adjustment
    /// passes to rewrite ranges in place.
    pub fn get_mut(&self, path: &Path) -> Option<RefMut<'_, PathBuf, FileHighlights>> {
        self.files.get_mut(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn range(start: (u32, u32), end: (u32, u32)) -> Range {
        Range::new(
            Position::new(start.0, start.1),
            Position::new(end.0, end.1),
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = HighlightStore::new();
        assert!(!store.has_file(Path::new("/missing.rs")));
        assert!(store.file_ranges(Path::new("/missing.rs")).is_empty());
    }

    #[test]
    fn test_with_files_restores_entries() {
        let mut ranges = FileHighlights::new();
        ranges.insert(
            "00100".to_string(),
            Highlight::new("00100", range((0, 0), (10, 0)), StyleHandle::new(1), "#ff0000"),
        );
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/path/to/file.rs"), ranges);

        let store = HighlightStore::with_files(files);

        assert!(store.has_file(Path::new("/path/to/file.rs")));
        assert!(store.has_file_range(Path::new("/path/to/file.rs"), "00100"));
    }

    #[test]
    fn test_set_file_overwrites_existing() {
        let store = HighlightStore::new();
        let path = Path::new("/path/to/file.rs");

        store.set_file(path.to_path_buf(), FileHighlights::new());
        store.add_file_range(path, "key1", range((0, 0), (1, 0)), StyleHandle::new(1), "#ff0000");
        store.set_file(path.to_path_buf(), FileHighlights::new());

        assert!(store.has_file(path));
        assert!(!store.has_file_range(path, "key1"));
    }

    #[test]
    fn test_add_to_untracked_file_does_not_create_it() {
        let store = HighlightStore::new();
        let path = Path::new("/never/opened.rs");

        store.add_file_range(path, "key", range((0, 0), (1, 0)), StyleHandle::new(1), "#ff0000");

        assert!(!store.has_file(path));
        assert!(!store.has_file_range(path, "key"));
    }

    #[test]
    fn test_add_overwrites_same_key() {
        let store = HighlightStore::new();
        let path = Path::new("/path/to/file.rs");
        store.set_file(path.to_path_buf(), FileHighlights::new());

        store.add_file_range(path, "key", range((0, 0), (1, 0)), StyleHandle::new(1), "#ff0000");
        store.add_file_range(path, "key", range((5, 0), (6, 0)), StyleHandle::new(2), "#00ff00");

        let highlight = store.file_range(path, "key").unwrap();
        assert_eq!(highlight.range, range((5, 0), (6, 0)));
        assert_eq!(highlight.color, "#00ff00");
        assert_eq!(highlight.style, StyleHandle::new(2));
    }

    #[test]
    fn test_remove_file_range_leaves_others() {
        let store = HighlightStore::new();
        let path = Path::new("/path/to/file.rs");
        store.set_file(path.to_path_buf(), FileHighlights::new());
        store.add_file_range(path, "key1", range((0, 0), (1, 0)), StyleHandle::new(1), "#ff0000");
        store.add_file_range(path, "key2", range((5, 0), (6, 0)), StyleHandle::new(2), "#00ff00");

        let removed = store.remove_file_range(path, "key1");

        assert!(removed.is_some());
        assert!(!store.has_file_range(path, "key1"));
        assert!(store.has_file_range(path, "key2"));
    }

    #[test]
    fn test_remove_operations_tolerate_missing_entities() {
        let store = HighlightStore::new();

        assert!(store.remove_file(Path::new("/missing.rs")).is_none());
        assert!(store.remove_file_range(Path::new("/missing.rs"), "key").is_none());

        store.set_file(PathBuf::from("/present.rs"), FileHighlights::new());
        assert!(store.remove_file_range(Path::new("/present.rs"), "absent").is_none());
    }

    #[test]
    fn test_remove_file_drops_all_ranges() {
        let store = HighlightStore::new();
        let path = Path::new("/path/to/file.rs");
        store.set_file(path.to_path_buf(), FileHighlights::new());
        store.add_file_range(path, "key", range((0, 0), (1, 0)), StyleHandle::new(1), "#ff0000");

        let removed = store.remove_file(path).unwrap();

        assert_eq!(removed.len(), 1);
        assert!(!store.has_file(path));
        assert!(!store.has_file_range(path, "key"));
    }

    #[test]
    fn test_files_are_isolated() {
        let store = HighlightStore::new();
        let first = Path::new("/path/to/file1.rs");
        let second = Path::new("/path/to/file2.rs");
        store.set_file(first.to_path_buf(), FileHighlights::new());
        store.set_file(second.to_path_buf(), FileHighlights::new());

        let shared = range((0, 0), (5, 0));
        store.add_file_range(first, "key1", shared, StyleHandle::new(1), "#ff0000");
        store.add_file_range(second, "key1", shared, StyleHandle::new(2), "#00ff00");

        store.remove_file_range(first, "key1");

        assert!(!store.has_file_range(first, "key1"));
        assert!(store.has_file_range(second, "key1"));
        assert_eq!(store.file_range(second, "key1").unwrap().color, "#00ff00");

        store.remove_file(first);
        assert!(store.has_file(second));
    }
}
