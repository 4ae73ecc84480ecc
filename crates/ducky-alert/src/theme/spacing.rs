//! Layout constants for the alert container and its action buttons.
//!
//! All values are logical pixels (f32).

// =============================================================================
// CONTAINER
// =============================================================================

/// Share of the viewport width taken by the alert container.
pub const CONTAINER_WIDTH_RATIO: f32 = 0.8;

/// Minimum container height when the content decides the height.
pub const CONTAINER_MIN_HEIGHT: f32 = 150.0;

/// Maximum container height when the content decides the height.
pub const CONTAINER_MAX_HEIGHT: f32 = 400.0;

/// Container corner radius.
pub const CONTAINER_RADIUS: f32 = 10.0;

// =============================================================================
// CONTENT
// =============================================================================

/// Gap between image, title and message.
pub const CONTENT_SPACING: f32 = 10.0;

/// Inset of the content block from the container's top and sides.
pub const CONTENT_INSET: f32 = 15.0;

/// Gap between the content block and the action group.
pub const ACTIONS_TOP_GAP: f32 = 20.0;

/// Title text size.
pub const TITLE_SIZE: f32 = 18.0;

/// Message text size.
pub const MESSAGE_SIZE: f32 = 14.0;

/// Image height inside the content block.
pub const IMAGE_HEIGHT: f32 = 64.0;

// =============================================================================
// BUTTONS
// =============================================================================

/// Height of one action button.
pub const BUTTON_HEIGHT: f32 = 60.0;

/// Button label size.
pub const BUTTON_TEXT_SIZE: f32 = 16.0;

/// Thickness of the divider lines between buttons.
pub const SEPARATOR_THICKNESS: f32 = 1.0;

/// Opacity of a button label while the button is held down.
pub const PRESSED_TEXT_ALPHA: f32 = 0.5;

/// Opacity of the black backdrop behind the alert.
pub const BACKDROP_ALPHA: f32 = 0.3;
