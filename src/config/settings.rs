use serde::{Deserialize, Serialize};

/// Stock highlight color applied when the user has not configured one.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#fdff322f";

/// Engine configuration, fed by whatever settings surface the host exposes.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightSettings {
    /// Display color for new highlights, `#RRGGBB` or `#RRGGBBAA`.
    pub highlight_color: String,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
        }
    }
}

impl HighlightSettings {
    pub fn new(highlight_color: impl Into<String>) -> Self {
        Self {
            highlight_color: highlight_color.into(),
        }
    }

    /// The configured color if it is a plausible hex color, otherwise the
    /// stock default. A bad configured value degrades quietly instead of
    /// failing the operation that needed a color.
    pub fn effective_color(&self) -> &str {
        if is_hex_color(&self.highlight_color) {
            &self.highlight_color
        } else {
            DEFAULT_HIGHLIGHT_COLOR
        }
    }
}

/// `#` followed by 6 (RGB) or 8 (RGBA) hex digits.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_color() {
        let settings = HighlightSettings::default();
        assert_eq!(settings.highlight_color, "#fdff322f");
        assert_eq!(settings.effective_color(), "#fdff322f");
    }

    #[rstest]
    #[case::rgb("#ff0000", true)]
    #[case::rgba("#fdff322f", true)]
    #[case::uppercase("#ABCDEF", true)]
    #[case::no_hash("ff0000", false)]
    #[case::too_short("#fff", false)]
    #[case::seven_digits("#1234567", false)]
    #[case::non_hex("#ggg000", false)]
    #[case::empty("", false)]
    fn test_hex_color_validation(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_hex_color(value), expected);
    }

    #[test]
    fn test_invalid_configured_color_falls_back_to_default() {
        let settings = HighlightSettings::new("not-a-color");
        assert_eq!(settings.effective_color(), DEFAULT_HIGHLIGHT_COLOR);

        let settings = HighlightSettings::new("#abcdef");
        assert_eq!(settings.effective_color(), "#abcdef");
    }

    #[test]
    fn test_settings_deserialize_camel_case() {
        let settings: HighlightSettings =
            serde_json::from_str(r##"{"highlightColor": "#00ff00"}"##).unwrap();
        assert_eq!(settings.highlight_color, "#00ff00");
    }

    #[test]
    fn test_settings_deserialize_missing_field_uses_default() {
        let settings: HighlightSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, HighlightSettings::default());
    }

    #[test]
    fn test_settings_serialize_round_trip() {
        let settings = HighlightSettings::new("#abcdef12");
        let json = serde_json::to_string(&settings).unwrap();
        let back: HighlightSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
