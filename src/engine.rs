//! Facade composing the highlight store with the adjustment algorithms.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::HighlightSettings;
use crate::domain::{Highlight, Position, Range, StyleHandle, range_key};
use crate::edits::{ContentChange, Subtraction, shift_file, subtract_span};
use crate::error::{EngineError, EngineResult};
use crate::store::{FileHighlights, HighlightStore};

/// The highlight tracking engine.
///
/// Owns the per-file store and answers the two needs of the surrounding
/// editor glue: "the document changed, keep my highlights aligned" and
/// "clear highlighting over this span". All methods take `&self`; change
/// events for one file must still be applied in the order the editing
/// session produced them, because each event's position arithmetic is only
/// valid against the document state immediately preceding it.
pub struct HighlightEngine {
    store: HighlightStore,
    settings: ArcSwap<HighlightSettings>,
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightEngine {
    pub fn new() -> Self {
        Self::with_settings(HighlightSettings::default())
    }

    pub fn with_settings(settings: HighlightSettings) -> Self {
        Self {
            store: HighlightStore::new(),
            settings: ArcSwap::from_pointee(settings),
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Arc<HighlightSettings> {
        self.settings.load_full()
    }

    /// Replace the settings, e.g. after the user picked a new color.
    pub fn apply_settings(&self, settings: HighlightSettings) {
        self.settings.store(Arc::new(settings));
    }

    pub fn store(&self) -> &HighlightStore {
        &self.store
    }

    /// Start tracking a document. Any previous highlight set for the path is
    /// discarded.
    pub fn track_file(&self, path: impl Into<PathBuf>) {
        self.store.set_file(path.into(), FileHighlights::new());
    }

    /// Stop tracking a document, returning its highlights so the caller can
    /// dispose their style handles.
    pub fn untrack_file(&self, path: &Path) -> Option<FileHighlights> {
        self.store.remove_file(path)
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.store.has_file(path)
    }

    /// Snapshot of a file's highlights for rendering. Empty if untracked.
    pub fn highlights(&self, path: &Path) -> FileHighlights {
        self.store.file_ranges(path)
    }

    /// Record a highlight over `range`, keyed by its endpoints.
    ///
    /// Falls back to the configured color when `color` is `None`. Returns
    /// the key, or `None` when the file is untracked (the request is
    /// dropped, matching the store's guard against resurrecting closed
    /// files).
    pub fn add_highlight(
        &self,
        path: &Path,
        range: Range,
        style: StyleHandle,
        color: Option<String>,
    ) -> EngineResult<Option<String>> {
        if !range.is_ordered() {
            return Err(EngineError::invalid_range(range));
        }
        if !self.store.has_file(path) {
            log::debug!(
                target: "himark::engine",
                "dropping highlight for untracked file {}",
                path.display()
            );
            return Ok(None);
        }

        let key = range_key(range.start, range.end);
        let color =
            color.unwrap_or_else(|| self.settings.load().effective_color().to_string());
        self.store.add_file_range(path, key.clone(), range, style, color);
        Ok(Some(key))
    }

    /// Remove every highlight whose range contains `position`, endpoints
    /// included. Returns the removed highlights.
    pub fn remove_highlight_at(&self, path: &Path, position: Position) -> Vec<Highlight> {
        let Some(mut ranges) = self.store.get_mut(path) else {
            return Vec::new();
        };
        let covering: Vec<String> = ranges
            .values()
            .filter(|highlight| highlight.range.contains(position))
            .map(|highlight| highlight.key.clone())
            .collect();
        covering
            .iter()
            .filter_map(|key| ranges.remove(key))
            .collect()
    }

    /// Clear the file's entire highlight set, returning the removed entries.
    pub fn remove_all_highlights(&self, path: &Path) -> Vec<Highlight> {
        let Some(mut ranges) = self.store.get_mut(path) else {
            return Vec::new();
        };
        ranges.drain().map(|(_, highlight)| highlight).collect()
    }

    /// Apply one content-change event to the file's highlights.
    ///
    /// Highlights fully consumed by the edit collapse to zero width and are
    /// dropped from the set; the dropped entries are returned for disposal.
    /// A change event for an untracked file is ignored.
    pub fn on_text_changed(
        &self,
        path: &Path,
        change: &ContentChange,
    ) -> EngineResult<Vec<Highlight>> {
        if !change.range.is_ordered() {
            return Err(EngineError::invalid_change(change.range));
        }
        let Some(mut ranges) = self.store.get_mut(path) else {
            log::debug!(
                target: "himark::engine",
                "change event for untracked file {} ignored",
                path.display()
            );
            return Ok(Vec::new());
        };

        shift_file(change, &mut ranges);

        let collapsed: Vec<String> = ranges
            .values()
            .filter(|highlight| highlight.range.is_empty())
            .map(|highlight| highlight.key.clone())
            .collect();
        let dropped: Vec<Highlight> = collapsed
            .iter()
            .filter_map(|key| ranges.remove(key))
            .collect();
        if !dropped.is_empty() {
            log::debug!(
                target: "himark::engine",
                "dropped {} collapsed highlight(s) in {}",
                dropped.len(),
                path.display()
            );
        }
        Ok(dropped)
    }

    /// Clear highlighting over `span`, trimming or splitting every
    /// highlight it overlaps. Fragments keep their color and style handle
    /// and are re-keyed from their new endpoints. Returns the highlights
    /// that were removed outright.
    pub fn remove_highlight_over_span(
        &self,
        path: &Path,
        span: Range,
    ) -> EngineResult<Vec<Highlight>> {
        if !span.is_ordered() {
            return Err(EngineError::invalid_range(span));
        }
        let Some(mut ranges) = self.store.get_mut(path) else {
            return Ok(Vec::new());
        };

        let outcomes: Vec<(String, Subtraction)> = ranges
            .values()
            .map(|highlight| (highlight.key.clone(), subtract_span(span, highlight.range)))
            .filter(|(_, outcome)| !matches!(outcome, Subtraction::Unchanged))
            .collect();

        let mut removed = Vec::new();
        for (key, outcome) in outcomes {
            let Some(original) = ranges.remove(&key) else {
                continue;
            };
            match outcome {
                Subtraction::Removed => removed.push(original),
                Subtraction::Trimmed(kept) => insert_fragment(&mut ranges, &original, kept),
                Subtraction::Split(first, second) => {
                    insert_fragment(&mut ranges, &original, first);
                    insert_fragment(&mut ranges, &original, second);
                }
                Subtraction::Unchanged => {}
            }
        }
        Ok(removed)
    }
}

/// Re-insert a surviving fragment under the key derived from its new
/// endpoints, carrying over the original's color and style handle.
fn insert_fragment(ranges: &mut FileHighlights, original: &Highlight, fragment: Range) {
    let key = range_key(fragment.start, fragment.end);
    let highlight = Highlight::new(key.clone(), fragment, original.style, original.color.clone());
    ranges.insert(key, highlight);
}
