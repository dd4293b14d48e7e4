//! Error types for boundary contract violations.
//!
//! Missing-entity conditions (untracked file, absent key, position with no
//! covering highlight) are deliberately not errors: highlight state is
//! best-effort UI metadata, so those resolve to empty results. Only
//! malformed inputs that would silently corrupt stored positions are
//! rejected here.

use crate::domain::Range;
use thiserror::Error;

/// Errors raised at the engine boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A range whose start is after its end.
    #[error("malformed range {range}: start is after end")]
    InvalidRange { range: Range },

    /// A change event whose replaced span is reversed.
    #[error("malformed change event: replaced span {span} is reversed")]
    InvalidChange { span: Range },
}

impl EngineError {
    pub fn invalid_range(range: Range) -> Self {
        EngineError::InvalidRange { range }
    }

    pub fn invalid_change(span: Range) -> Self {
        EngineError::InvalidChange { span }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
