//! The alert screen's capability interface.
//!
//! The presenter is a plain view-model. A rendering adapter asks it for an
//! [`AlertLayout`] (pure data) and draws that, and the host feeds UI events
//! back through [`AlertScreen::handle_event`], which returns what happened
//! as an ordered list of [`AlertOutput`] values.

use iced::Size;

use crate::action::ActionId;
use crate::button::ActionButton;
use crate::content::AlertContent;
use crate::theme::{
    ACTIONS_TOP_GAP, AlertStyle, BUTTON_HEIGHT, CONTAINER_MAX_HEIGHT, CONTAINER_MIN_HEIGHT,
    CONTAINER_WIDTH_RATIO, CONTENT_INSET, CONTENT_SPACING,
};

// =============================================================================
// EVENTS & OUTPUTS
// =============================================================================

/// UI events an alert reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    /// An action button was tapped.
    ButtonTapped(ActionId),
    /// The host application moved to the background.
    AppBackgrounded,
    /// The host asked the alert to close.
    DismissRequested,
}

/// Why an alert was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    ActionTapped(ActionId),
    Backgrounded,
    Host,
}

/// Something the host must act on, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutput<M> {
    /// Deliver a handler message to the host's update loop.
    Invoke(M),
    /// The alert closed; stop drawing it.
    Dismissed(DismissReason),
}

impl<M> AlertOutput<M> {
    /// The handler message, if this output carries one.
    pub fn into_message(self) -> Option<M> {
        match self {
            Self::Invoke(message) => Some(message),
            Self::Dismissed(_) => None,
        }
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Direction the action buttons are stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side (one or two actions).
    Horizontal,
    /// One per row (three or more actions).
    Vertical,
}

impl Orientation {
    /// Orientation used for `count` actions.
    pub fn for_action_count(count: usize) -> Self {
        if count > 2 {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// How the container's height is decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightPolicy {
    /// Exactly this height (custom content).
    Fixed(f32),
    /// Follows the content, bounded to `min..=max`.
    Clamped { min: f32, max: f32 },
}

impl HeightPolicy {
    /// Policy for content, fixed when the content asks for a height.
    pub fn for_content(content: &AlertContent) -> Self {
        match content.fixed_height() {
            Some(height) => Self::Fixed(height),
            None => Self::Clamped {
                min: CONTAINER_MIN_HEIGHT,
                max: CONTAINER_MAX_HEIGHT,
            },
        }
    }

    /// Container height for content that would like to be `natural` high.
    pub fn resolve(self, natural: f32) -> f32 {
        match self {
            Self::Fixed(height) => height,
            Self::Clamped { min, max } => natural.clamp(min, max),
        }
    }
}

/// Everything a renderer needs to draw one alert.
#[derive(Debug)]
pub struct AlertLayout<'a> {
    pub content: &'a AlertContent,
    pub style: &'a AlertStyle,
    pub buttons: &'a [ActionButton],
    pub orientation: Orientation,
    pub container_width: f32,
    pub height: HeightPolicy,
    pub button_height: f32,
    pub content_spacing: f32,
    pub content_inset: f32,
    pub actions_gap: f32,
}

impl<'a> AlertLayout<'a> {
    /// Lay out an alert in a viewport.
    pub fn new(
        viewport: Size,
        content: &'a AlertContent,
        style: &'a AlertStyle,
        buttons: &'a [ActionButton],
        orientation: Orientation,
    ) -> Self {
        Self {
            content,
            style,
            buttons,
            orientation,
            container_width: viewport.width * CONTAINER_WIDTH_RATIO,
            height: HeightPolicy::for_content(content),
            button_height: BUTTON_HEIGHT,
            content_spacing: CONTENT_SPACING,
            content_inset: CONTENT_INSET,
            actions_gap: ACTIONS_TOP_GAP,
        }
    }

    /// Height taken by the button group.
    pub fn actions_height(&self) -> f32 {
        match self.orientation {
            Orientation::Horizontal if self.buttons.is_empty() => 0.0,
            Orientation::Horizontal => self.button_height,
            Orientation::Vertical => self.button_height * self.buttons.len() as f32,
        }
    }
}

// =============================================================================
// CAPABILITY TRAIT
// =============================================================================

/// A modal screen that can be laid out and driven by events.
pub trait AlertScreen {
    /// Host message type emitted by handlers.
    type Message;

    /// Describe the screen for a viewport.
    fn layout(&self, viewport: Size) -> AlertLayout<'_>;

    /// React to a UI event.
    fn handle_event(&mut self, event: AlertEvent) -> Vec<AlertOutput<Self::Message>>;
}
