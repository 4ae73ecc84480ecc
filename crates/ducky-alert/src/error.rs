//! Alert error types.
//!
//! The alert itself never fails at runtime: late actions are dropped and
//! missing handlers fall back to closing the alert. The only recoverable
//! failures come from loading an [`AlertStyle`](crate::theme::AlertStyle)
//! from configuration.

use std::path::Path;

use thiserror::Error;

/// Errors raised while loading alert configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlertError {
    /// The style file could not be read.
    #[error("Failed to read alert style from {path}: {reason}")]
    StyleRead {
        /// Path that was read.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The style file is not valid TOML or has the wrong shape.
    #[error("Failed to parse alert style: {reason}")]
    StyleParse {
        /// Description of what went wrong.
        reason: String,
    },

    /// A color value is not a `#RRGGBB` or `#RRGGBBAA` hex string.
    #[error("Invalid color value: {value:?}")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },
}

impl AlertError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::StyleRead { .. } => "Check that the style file exists and is readable.",
            Self::StyleParse { .. } => {
                "Style files are TOML tables of color keys, e.g. modal_background = \"#FFFFFF\"."
            }
            Self::InvalidColor { .. } => "Colors are written as #RRGGBB or #RRGGBBAA.",
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a read error for `path`.
    pub fn style_read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::StyleRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create a parse error.
    pub fn style_parse(err: impl std::fmt::Display) -> Self {
        Self::StyleParse {
            reason: err.to_string(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_message() {
        let err = AlertError::invalid_color("#12");
        assert_eq!(err.to_string(), "Invalid color value: \"#12\"");
        assert!(err.suggestion().contains("#RRGGBB"));
    }

    #[test]
    fn test_style_read_keeps_path() {
        let err = AlertError::style_read(Path::new("/tmp/alert.toml"), "not found");
        assert_eq!(
            err.to_string(),
            "Failed to read alert style from /tmp/alert.toml: not found"
        );
    }
}
