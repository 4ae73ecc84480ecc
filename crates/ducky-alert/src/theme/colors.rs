//! Named colors used by the alert's defaults and chrome.

use iced::Color;

use super::spacing::BACKDROP_ALPHA;

pub const WHITE: Color = Color::WHITE;

pub const BLACK: Color = Color::BLACK;

pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// One-third white. Default label color for neutral actions and messages.
pub const DARK_GRAY: Color = Color {
    r: 1.0 / 3.0,
    g: 1.0 / 3.0,
    b: 1.0 / 3.0,
    a: 1.0,
};

/// Two-thirds white. Separator lines.
pub const LIGHT_GRAY: Color = Color {
    r: 2.0 / 3.0,
    g: 2.0 / 3.0,
    b: 2.0 / 3.0,
    a: 1.0,
};

/// Dimmed overlay drawn over the host view.
pub const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: BACKDROP_ALPHA,
};

/// Title label color.
pub const TITLE_TEXT: Color = BLACK;

/// Message label color.
pub const MESSAGE_TEXT: Color = DARK_GRAY;

/// Separator line color.
pub const SEPARATOR: Color = LIGHT_GRAY;
