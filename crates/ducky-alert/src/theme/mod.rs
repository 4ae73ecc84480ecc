//! Alert theme: colors, layout constants and the configurable [`AlertStyle`].
//!
//! - Named colors (`colors`) used by defaults and chrome
//! - Layout constants (`spacing`)
//! - Per-alert color configuration (`style`)

pub mod colors;
pub mod spacing;
pub mod style;

pub use style::{AlertStyle, parse_hex, to_hex};

pub use spacing::{
    ACTIONS_TOP_GAP, BUTTON_HEIGHT, BUTTON_TEXT_SIZE, CONTAINER_MAX_HEIGHT, CONTAINER_MIN_HEIGHT,
    CONTAINER_RADIUS, CONTAINER_WIDTH_RATIO, CONTENT_INSET, CONTENT_SPACING, IMAGE_HEIGHT,
    MESSAGE_SIZE, PRESSED_TEXT_ALPHA, SEPARATOR_THICKNESS, TITLE_SIZE,
};
