//! Translation of highlight positions in response to document edits.
//!
//! Every content change replaces the old span `[start, end)` with new text.
//! Each highlight endpoint is translated independently: endpoints at or
//! before the replaced span stay put, endpoints at or after it move by the
//! line/character delta of the edit, and endpoints strictly inside it snap
//! to the edit point so the highlight absorbs the replacement instead of
//! being cut open.

use crate::domain::{Position, Range};
use crate::store::FileHighlights;

/// A content-change notification from the editing session: the document
/// span `[range.start, range.end)` was replaced by `text`.
///
/// Events for one file are only meaningful in the order the session
/// produced them; each event's coordinates refer to the document state
/// immediately before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentChange {
    pub range: Range,
    pub text: String,
}

impl ContentChange {
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// Pure insertion at a single point.
    pub fn insertion(at: Position, text: impl Into<String>) -> Self {
        Self::new(Range::new(at, at), text)
    }

    /// Pure deletion of a span.
    pub fn deletion(range: Range) -> Self {
        Self::new(range, "")
    }
}

/// Which endpoint of a range is being translated. Endpoints strictly inside
/// the replaced span collapse differently depending on their role.
#[derive(Clone, Copy)]
enum Endpoint {
    Start,
    End,
}

/// Pre-computed translation quantities for one change event.
struct ChangeMetrics {
    old_start: Position,
    old_end: Position,
    /// Net change in line count: inserted line breaks minus replaced lines.
    line_delta: i64,
    /// Character adjustment for positions on the replaced span's end line.
    char_delta: i64,
    /// Where the old span's end lands after the edit.
    new_end: Position,
}

impl ChangeMetrics {
    fn new(change: &ContentChange) -> Self {
        let Range { start, end } = change.range;

        let inserted_lines = change.text.matches('\n').count() as u32;
        // rsplit always yields at least one piece, the text after the last
        // line break (or the whole text when there is none).
        let last_line = change.text.rsplit('\n').next().unwrap_or("");
        let last_line_len = utf16_len(last_line);

        let new_end_character = if inserted_lines == 0 {
            start.character + last_line_len
        } else {
            last_line_len
        };
        let new_end = Position::new(start.line + inserted_lines, new_end_character);

        Self {
            old_start: start,
            old_end: end,
            line_delta: i64::from(inserted_lines) - i64::from(end.line - start.line),
            char_delta: i64::from(new_end_character) - i64::from(end.character),
            new_end,
        }
    }

    /// Translate a position at or after the replaced span's end. The
    /// character delta only applies on the span's original end line; later
    /// lines keep their column.
    fn translate_past_end(&self, position: Position) -> Position {
        let line = (i64::from(position.line) + self.line_delta).max(0) as u32;
        let character = if position.line == self.old_end.line {
            (i64::from(position.character) + self.char_delta).max(0) as u32
        } else {
            position.character
        };
        Position::new(line, character)
    }

    fn shift_position(&self, position: Position, endpoint: Endpoint) -> Position {
        if position <= self.old_start {
            // The edit is entirely at or after this endpoint.
            position
        } else if position >= self.old_end {
            self.translate_past_end(position)
        } else {
            // Strictly inside the replaced span: the text this endpoint
            // pointed into is gone. A start endpoint snaps back to the edit
            // point; an end endpoint follows the mapped end of the replaced
            // span, which for a deletion is the edit point itself.
            match endpoint {
                Endpoint::Start => self.old_start,
                Endpoint::End => self.new_end,
            }
        }
    }

    fn shift_range(&self, range: Range) -> Range {
        Range::new(
            self.shift_position(range.start, Endpoint::Start),
            self.shift_position(range.end, Endpoint::End),
        )
    }
}

/// Translate a single range through a change event.
///
/// The change's replaced span must be ordered (`start <= end`); the engine
/// validates events before handing them to this pass.
pub fn shift_range(change: &ContentChange, range: Range) -> Range {
    ChangeMetrics::new(change).shift_range(range)
}

/// Translate every highlight in a file through a change event, in place.
///
/// Never adds or removes entries. A highlight whose range was fully
/// consumed by the edit collapses onto the replacement text, down to a
/// zero-width range when the replacement is empty; deciding what to do
/// with such a collapse is the caller's business.
pub fn shift_file(change: &ContentChange, highlights: &mut FileHighlights) {
    let metrics = ChangeMetrics::new(change);
    for highlight in highlights.values_mut() {
        highlight.range = metrics.shift_range(highlight.range);
    }
}

/// Length in UTF-16 code units, the same unit the editing session uses for
/// `Position::character`.
fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}
