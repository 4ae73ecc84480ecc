//! Action button model.
//!
//! An [`ActionButton`] is the render-ready form of one [`AlertAction`]:
//! its label, the colors picked from the alert's [`AlertStyle`], and the
//! divider lines it draws. The handler is not stored on the button; the
//! button keeps its [`ActionId`] and looks the handler up in the
//! presenter's [`HandlerRegistry`] when tapped.
//!
//! [`AlertAction`]: crate::action::AlertAction

use iced::Color;

use crate::action::{ActionId, ActionRole};
use crate::registry::HandlerRegistry;
use crate::theme::{AlertStyle, PRESSED_TEXT_ALPHA};

// =============================================================================
// SEPARATORS
// =============================================================================

/// Edge a divider line is drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorPosition {
    /// Along the left edge; divides columns in a horizontal row.
    Left,
    /// Along the top edge; divides rows, and the buttons from the content.
    Top,
}

/// Divider lines attached to a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Separators {
    pub top: bool,
    pub left: bool,
}

impl Separators {
    pub fn contains(self, position: SeparatorPosition) -> bool {
        match position {
            SeparatorPosition::Left => self.left,
            SeparatorPosition::Top => self.top,
        }
    }
}

// =============================================================================
// ACTION BUTTON
// =============================================================================

/// One tappable alert button.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    id: ActionId,
    title: String,
    role: ActionRole,
    style: AlertStyle,
    normal_color: Color,
    pressed_color: Color,
    separators: Separators,
}

impl ActionButton {
    /// Create an untitled button for `id` drawn with `style`.
    pub fn new(id: ActionId, style: AlertStyle) -> Self {
        let color = style.text_color(ActionRole::Negative);
        Self {
            id,
            title: String::new(),
            role: ActionRole::Negative,
            style,
            normal_color: color,
            pressed_color: pressed(color),
            separators: Separators::default(),
        }
    }

    /// Building a button from a declarative layout archive is not supported.
    ///
    /// # Panics
    ///
    /// Always. Buttons are only built by a presenter for its actions.
    #[track_caller]
    pub fn from_layout_archive(_archive: &[u8]) -> Self {
        panic!("ActionButton cannot be restored from a layout archive; it is built by AlertPresenter")
    }

    /// Set the label and pick its colors from the role.
    ///
    /// The pressed color is the normal color at half opacity.
    pub fn set_title(&mut self, title: impl Into<String>, role: ActionRole) {
        let color = self.style.text_color(role);
        self.title = title.into();
        self.role = role;
        self.normal_color = color;
        self.pressed_color = pressed(color);
    }

    /// Attach a divider line. Adding the same edge twice keeps one line.
    pub fn add_separator(&mut self, position: SeparatorPosition) {
        match position {
            SeparatorPosition::Left => self.separators.left = true,
            SeparatorPosition::Top => self.separators.top = true,
        }
    }

    /// Take this button's handler from the registry.
    ///
    /// Returns `None` when the action has no handler or it already fired.
    pub fn perform_action<M>(&self, registry: &mut HandlerRegistry<M>) -> Option<M> {
        registry.take(self.id)
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn role(&self) -> ActionRole {
        self.role
    }

    pub fn background(&self) -> Color {
        self.style.button_background
    }

    pub fn normal_color(&self) -> Color {
        self.normal_color
    }

    pub fn pressed_color(&self) -> Color {
        self.pressed_color
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    pub fn has_separator(&self, position: SeparatorPosition) -> bool {
        self.separators.contains(position)
    }
}

fn pressed(color: Color) -> Color {
    Color {
        a: PRESSED_TEXT_ALPHA,
        ..color
    }
}
