//! Highlight range tracking for documents under edit.
//!
//! The engine records user-marked spans per file and keeps them anchored as
//! the document changes: content-change events from the editing session are
//! replayed through the shift pass, and explicit "clear this span" requests
//! are carved out through the subtract pass. Rendering, command wiring, and
//! configuration UI belong to the surrounding editor layer; this crate owns
//! only the state and the position arithmetic.

pub mod config;
pub mod domain;
pub mod edits;
pub mod engine;
pub mod error;
pub mod store;

pub use config::{DEFAULT_HIGHLIGHT_COLOR, HighlightSettings, is_hex_color};
pub use domain::{Highlight, Position, Range, StyleHandle, range_key};
pub use edits::{ContentChange, Subtraction, shift_file, shift_range, subtract_span};
pub use engine::HighlightEngine;
pub use error::{EngineError, EngineResult};
pub use store::{FileHighlights, HighlightStore};
