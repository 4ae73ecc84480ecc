//! Alert color configuration.
//!
//! An [`AlertStyle`] is fixed when the presenter is built and shared
//! read-only with every button. Styles can be written in code or loaded
//! from a TOML file:
//!
//! ```toml
//! button_positive_text = "#2E7D32"
//! button_negative_text = "#C62828"
//! modal_background = "#FAFAFA"
//! ```
//!
//! Keys left out keep their default value.

use std::path::Path;

use iced::Color;
use serde::{Deserialize, Serialize};

use super::colors::{DARK_GRAY, GREEN, RED, WHITE};
use crate::action::ActionRole;
use crate::error::AlertError;

// =============================================================================
// ALERT STYLE
// =============================================================================

/// Colors applied to the alert container and its buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertStyle {
    /// Button fill.
    pub button_background: Color,
    /// Label color for [`ActionRole::Positive`].
    pub button_positive_text: Color,
    /// Label color for [`ActionRole::Destructive`].
    pub button_negative_text: Color,
    /// Label color for [`ActionRole::Negative`].
    pub button_default_text: Color,
    /// Container fill behind the content and buttons.
    pub modal_background: Color,
}

impl Default for AlertStyle {
    fn default() -> Self {
        Self {
            button_background: WHITE,
            button_positive_text: GREEN,
            button_negative_text: RED,
            button_default_text: DARK_GRAY,
            modal_background: WHITE,
        }
    }
}

impl AlertStyle {
    /// Label color for an action role.
    ///
    /// Negative actions use the neutral default color and destructive
    /// actions use the negative color.
    pub fn text_color(&self, role: ActionRole) -> Color {
        match role {
            ActionRole::Negative => self.button_default_text,
            ActionRole::Destructive => self.button_negative_text,
            ActionRole::Positive => self.button_positive_text,
        }
    }

    /// Parse a style from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, AlertError> {
        let file: StyleFile = toml::from_str(content).map_err(AlertError::style_parse)?;
        Self::try_from(file)
    }

    /// Load a style from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, AlertError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AlertError::style_read(path, e))?;
        let style = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded alert style");
        Ok(style)
    }

    /// Serialize the style to TOML, every key written out.
    pub fn to_toml_string(&self) -> Result<String, AlertError> {
        toml::to_string(&StyleFile::from(*self)).map_err(AlertError::style_parse)
    }
}

// =============================================================================
// FILE FORMAT
// =============================================================================

/// On-disk shape of a style: optional hex strings per color.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    button_background: Option<String>,
    button_positive_text: Option<String>,
    button_negative_text: Option<String>,
    button_default_text: Option<String>,
    modal_background: Option<String>,
}

impl TryFrom<StyleFile> for AlertStyle {
    type Error = AlertError;

    fn try_from(file: StyleFile) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let pick = |value: Option<String>, fallback: Color| match value {
            Some(hex) => parse_hex(&hex),
            None => Ok(fallback),
        };

        Ok(Self {
            button_background: pick(file.button_background, defaults.button_background)?,
            button_positive_text: pick(file.button_positive_text, defaults.button_positive_text)?,
            button_negative_text: pick(file.button_negative_text, defaults.button_negative_text)?,
            button_default_text: pick(file.button_default_text, defaults.button_default_text)?,
            modal_background: pick(file.modal_background, defaults.modal_background)?,
        })
    }
}

impl From<AlertStyle> for StyleFile {
    fn from(style: AlertStyle) -> Self {
        Self {
            button_background: Some(to_hex(style.button_background)),
            button_positive_text: Some(to_hex(style.button_positive_text)),
            button_negative_text: Some(to_hex(style.button_negative_text)),
            button_default_text: Some(to_hex(style.button_default_text)),
            modal_background: Some(to_hex(style.modal_background)),
        }
    }
}

// =============================================================================
// HEX COLORS
// =============================================================================

/// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
pub fn parse_hex(value: &str) -> Result<Color, AlertError> {
    let digits = value.trim().trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AlertError::invalid_color(value));
    }

    let channel = |index: usize| {
        u8::from_str_radix(&digits[index..index + 2], 16)
            .map(|v| f32::from(v) / 255.0)
            .map_err(|_| AlertError::invalid_color(value))
    };

    Ok(Color {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
        a: if digits.len() == 8 { channel(6)? } else { 1.0 },
    })
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (r, g, b, a) = (byte(color.r), byte(color.g), byte(color.b), byte(color.a));
    if a == u8::MAX {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let style = AlertStyle::default();
        assert_eq!(style.button_background, Color::WHITE);
        assert_eq!(style.button_positive_text, GREEN);
        assert_eq!(style.button_negative_text, RED);
        assert_eq!(style.button_default_text, DARK_GRAY);
        assert_eq!(style.modal_background, Color::WHITE);
    }

    #[test]
    fn test_role_color_table_is_asymmetric() {
        let style = AlertStyle::default();
        assert_eq!(style.text_color(ActionRole::Positive), GREEN);
        assert_eq!(style.text_color(ActionRole::Destructive), RED);
        assert_eq!(style.text_color(ActionRole::Negative), DARK_GRAY);
    }

    #[test]
    fn test_parse_hex_with_and_without_alpha() {
        assert_eq!(parse_hex("#FF0000").unwrap(), RED);
        let translucent = parse_hex("000000FF").unwrap();
        assert_eq!(translucent, Color::BLACK);
        let half = parse_hex("#00000080").unwrap();
        assert!((half.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        for bad in ["", "#FFF", "#GG0000", "#FF00001", "red"] {
            assert_eq!(
                parse_hex(bad),
                Err(AlertError::invalid_color(bad)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex_omits_opaque_alpha() {
        assert_eq!(to_hex(GREEN), "#00FF00");
        assert_eq!(to_hex(Color { a: 0.0, ..RED }), "#FF000000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let style = AlertStyle::from_toml_str("button_positive_text = \"#0000FF\"\n").unwrap();
        assert_eq!(style.button_positive_text, Color::from_rgb(0.0, 0.0, 1.0));
        assert_eq!(style.button_negative_text, RED);
        assert_eq!(style.modal_background, Color::WHITE);
    }

    #[test]
    fn test_toml_reports_bad_color() {
        let err = AlertStyle::from_toml_str("modal_background = \"white\"\n").unwrap_err();
        assert_eq!(err, AlertError::invalid_color("white"));
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        let err = AlertStyle::from_toml_str("title_color = \"#000000\"\n").unwrap_err();
        assert!(matches!(err, AlertError::StyleParse { .. }));
    }

    #[test]
    fn test_toml_written_style_reloads() {
        let style = AlertStyle {
            modal_background: Color::from_rgb8(0x20, 0x40, 0x60),
            ..AlertStyle::default()
        };
        let text = style.to_toml_string().unwrap();
        assert!(text.contains("modal_background = \"#204060\""));
        assert_eq!(AlertStyle::from_toml_str(&text).unwrap(), style);
    }
}
