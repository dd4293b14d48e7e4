use super::{Position, Range};

/// Opaque handle to a rendering resource (a decoration type, a style id)
/// owned by the editor layer. The engine stores and returns it but never
/// interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleHandle(u64);

impl StyleHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A recorded highlight: the tracked range plus its display color and the
/// renderer's style handle.
///
/// Identity within a file is the `key`; the range is rewritten over the
/// highlight's lifetime as the document changes around it.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub key: String,
    pub range: Range,
    pub color: String,
    pub style: StyleHandle,
}

impl Highlight {
    pub fn new(
        key: impl Into<String>,
        range: Range,
        style: StyleHandle,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            range,
            color: color.into(),
            style,
        }
    }
}

/// Derive the storage key for a range from its endpoints.
///
/// The four coordinates are concatenated with no delimiter, so distinct
/// ranges can collide at digit boundaries ("1:2-3:4" and "12:3-4:..." share
/// prefixes). Keys are map lookup handles only and are never parsed back, so
/// the ambiguity is tolerated; do not rely on uniqueness across arbitrary
/// ranges.
pub fn range_key(start: Position, end: Position) -> String {
    format!(
        "{}{}{}{}",
        start.line, start.character, end.line, end.character
    )
}
