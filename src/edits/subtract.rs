//! Carving an explicitly removed span out of a highlighted range.

use crate::domain::Range;

/// Outcome of subtracting a span from a single highlighted range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subtraction {
    /// The span does not overlap the range; endpoints merely touching count
    /// as no overlap.
    Unchanged,
    /// The span clipped one side of the range.
    Trimmed(Range),
    /// The span fell strictly inside; the range splits around it.
    Split(Range, Range),
    /// The span covers the whole range.
    Removed,
}

/// Subtract `span` from `range`, conditions evaluated in order.
///
/// The resulting fragments never overlap each other and never exceed the
/// bounds of the original range; a fragment that would be empty is never
/// produced, the range is removed instead.
pub fn subtract_span(span: Range, range: Range) -> Subtraction {
    if span.end <= range.start || span.start >= range.end {
        Subtraction::Unchanged
    } else if span.start <= range.start && span.end >= range.end {
        Subtraction::Removed
    } else if span.start <= range.start {
        // span.end is strictly between the range endpoints here.
        Subtraction::Trimmed(Range::new(span.end, range.end))
    } else if span.end >= range.end {
        Subtraction::Trimmed(Range::new(range.start, span.start))
    } else {
        Subtraction::Split(
            Range::new(range.start, span.start),
            Range::new(span.end, range.end),
        )
    }
}
