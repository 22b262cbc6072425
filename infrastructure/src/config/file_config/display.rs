//! Display configuration from TOML (`[display]` section)

use super::ConfigValidationError;
use legislation_application::DisplayConfig;
use serde::{Deserialize, Serialize};

/// Seat grid drawing options
///
/// # Example
///
/// ```toml
/// [display]
/// seat_glyph = "●"
/// marker_glyph = "◉"
/// show_marker = true
/// show_legend = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Glyph for an ordinary seat (exactly one character)
    pub seat_glyph: String,
    /// Glyph for the majority seat (exactly one character)
    pub marker_glyph: String,
    /// Highlight the majority seat
    pub show_marker: bool,
    /// Print party totals under each grid
    pub show_legend: bool,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        let defaults = DisplayConfig::default();
        Self {
            seat_glyph: defaults.seat_glyph.to_string(),
            marker_glyph: defaults.marker_glyph.to_string(),
            show_marker: defaults.show_marker,
            show_legend: defaults.show_legend,
        }
    }
}

impl FileDisplayConfig {
    /// Convert to the application-level config, checking the glyphs.
    pub fn to_display_config(&self) -> Result<DisplayConfig, ConfigValidationError> {
        Ok(DisplayConfig {
            seat_glyph: single_char("seat_glyph", &self.seat_glyph)?,
            marker_glyph: single_char("marker_glyph", &self.marker_glyph)?,
            show_marker: self.show_marker,
            show_legend: self.show_legend,
        })
    }
}

fn single_char(field: &'static str, value: &str) -> Result<char, ConfigValidationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(ConfigValidationError::EmptyGlyph(field)),
        (Some(_), Some(_)) => Err(ConfigValidationError::MultiCharGlyph {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_application_default() {
        let config = FileDisplayConfig::default().to_display_config().unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_custom_glyphs() {
        let file = FileDisplayConfig {
            seat_glyph: "o".into(),
            marker_glyph: "*".into(),
            show_marker: false,
            show_legend: false,
        };
        let config = file.to_display_config().unwrap();
        assert_eq!(config.seat_glyph, 'o');
        assert_eq!(config.marker_glyph, '*');
        assert!(!config.show_marker);
    }

    #[test]
    fn test_glyph_must_be_single_char() {
        let mut file = FileDisplayConfig::default();
        file.seat_glyph = String::new();
        assert!(matches!(
            file.to_display_config(),
            Err(ConfigValidationError::EmptyGlyph("seat_glyph"))
        ));

        let mut file = FileDisplayConfig::default();
        file.marker_glyph = "<>".into();
        assert!(matches!(
            file.to_display_config(),
            Err(ConfigValidationError::MultiCharGlyph { field: "marker_glyph", .. })
        ));
    }
}
