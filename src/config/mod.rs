pub mod settings;

pub use settings::{DEFAULT_HIGHLIGHT_COLOR, HighlightSettings, is_hex_color};
