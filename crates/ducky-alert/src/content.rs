//! Alert content: image, title and message, or a custom view.

use std::fmt;

use iced::widget::{image, svg};
use iced::{Color, Element};

use crate::screen::AlertEvent;

/// Builds the custom content shown in place of image, title and message.
pub type CustomView = Box<dyn Fn() -> Element<'static, AlertEvent>>;

// =============================================================================
// IMAGE
// =============================================================================

/// Image data for the alert header.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Bitmap image. Drawn as-is; iced cannot recolor bitmaps.
    Raster(image::Handle),
    /// Vector image. Recolored when a tint is set.
    Vector(svg::Handle),
}

/// Header image with an optional tint.
///
/// A tinted image is drawn as a template: its shape filled with the tint.
#[derive(Debug, Clone)]
pub struct AlertImage {
    source: ImageSource,
    tint: Option<Color>,
}

impl AlertImage {
    pub fn raster(handle: image::Handle) -> Self {
        Self {
            source: ImageSource::Raster(handle),
            tint: None,
        }
    }

    pub fn vector(handle: svg::Handle) -> Self {
        Self {
            source: ImageSource::Vector(handle),
            tint: None,
        }
    }

    /// Draw the image as a template filled with `color`.
    pub fn tinted(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// Whether the tint will actually be applied when drawn.
    pub fn is_template(&self) -> bool {
        self.tint.is_some() && matches!(self.source, ImageSource::Vector(_))
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// A run of message text with its own color and size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub color: Option<Color>,
    pub size: Option<f32>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            size: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Message text: plain, or styled spans.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertText {
    Plain(String),
    Rich(Vec<TextSpan>),
}

impl AlertText {
    /// The text with all styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Rich(spans) => spans.iter().map(|span| span.text.as_str()).collect(),
        }
    }
}

impl From<String> for AlertText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<&str> for AlertText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<Vec<TextSpan>> for AlertText {
    fn from(spans: Vec<TextSpan>) -> Self {
        Self::Rich(spans)
    }
}

// =============================================================================
// CONTENT
// =============================================================================

/// What the alert shows above its buttons.
pub enum AlertContent {
    /// Image (hidden when absent), title and message stacked vertically.
    Standard {
        image: Option<AlertImage>,
        title: String,
        message: AlertText,
    },
    /// Caller-built view in a container of fixed height.
    Custom { view: CustomView, height: f32 },
}

impl AlertContent {
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Standard { title, .. } => Some(title),
            Self::Custom { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&AlertText> {
        match self {
            Self::Standard { message, .. } => Some(message),
            Self::Custom { .. } => None,
        }
    }

    pub fn image(&self) -> Option<&AlertImage> {
        match self {
            Self::Standard { image, .. } => image.as_ref(),
            Self::Custom { .. } => None,
        }
    }

    /// Fixed container height, set only for custom content.
    pub fn fixed_height(&self) -> Option<f32> {
        match self {
            Self::Standard { .. } => None,
            Self::Custom { height, .. } => Some(*height),
        }
    }
}

impl fmt::Debug for AlertContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard {
                image,
                title,
                message,
            } => f
                .debug_struct("Standard")
                .field("image", image)
                .field("title", title)
                .field("message", message)
                .finish(),
            Self::Custom { height, .. } => f
                .debug_struct("Custom")
                .field("height", height)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rich_text_flattens() {
        let text = AlertText::from(vec![
            TextSpan::new("Delete "),
            TextSpan::new("everything").color(Color::BLACK).size(16.0),
            TextSpan::new("?"),
        ]);
        assert_eq!(text.plain_text(), "Delete everything?");
    }

    #[test]
    fn test_raster_tint_is_not_template() {
        let raster =
            AlertImage::raster(image::Handle::from_bytes(vec![0u8; 4])).tinted(Color::BLACK);
        assert!(!raster.is_template());
        assert_eq!(raster.tint(), Some(Color::BLACK));

        let vector = AlertImage::vector(svg::Handle::from_memory(b"<svg/>".to_vec()));
        assert!(!vector.is_template());
        assert!(vector.tinted(Color::WHITE).is_template());
    }

    #[test]
    fn test_custom_content_accessors() {
        let content = AlertContent::Custom {
            view: Box::new(|| iced::widget::text("custom").into()),
            height: 220.0,
        };
        assert_eq!(content.fixed_height(), Some(220.0));
        assert!(content.title().is_none());
        assert!(content.image().is_none());
        assert!(format!("{content:?}").starts_with("Custom"));
    }
}
