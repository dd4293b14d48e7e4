pub mod highlight;
pub mod position;

pub use highlight::{Highlight, StyleHandle, range_key};
pub use position::{Position, Range};
