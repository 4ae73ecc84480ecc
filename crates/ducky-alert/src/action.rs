//! Alert actions.
//!
//! An [`AlertAction`] is one user-selectable outcome of an alert: a label,
//! a semantic [`ActionRole`] that picks the label color, and an optional
//! handler message emitted when the action's button is tapped.

use std::fmt;

/// Semantic role of an action. Drives the label color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionRole {
    /// Confirming outcome.
    Positive,
    /// Cancelling outcome. Drawn in the neutral default color.
    Negative,
    /// Irreversible outcome. Drawn in the negative color.
    Destructive,
}

/// Position of an action in the alert's action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub usize);

impl ActionId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// One button's worth of alert configuration.
///
/// `M` is the host's message type. Actions without a handler simply
/// close the alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertAction<M> {
    pub title: String,
    pub role: ActionRole,
    pub handler: Option<M>,
}

impl<M> AlertAction<M> {
    /// Create an action that emits `handler` when tapped.
    pub fn new(title: impl Into<String>, role: ActionRole, handler: M) -> Self {
        Self {
            title: title.into(),
            role,
            handler: Some(handler),
        }
    }

    /// Create an action that only closes the alert.
    pub fn close(title: impl Into<String>, role: ActionRole) -> Self {
        Self {
            title: title.into(),
            role,
            handler: None,
        }
    }

    pub fn positive(title: impl Into<String>, handler: M) -> Self {
        Self::new(title, ActionRole::Positive, handler)
    }

    pub fn negative(title: impl Into<String>, handler: M) -> Self {
        Self::new(title, ActionRole::Negative, handler)
    }

    pub fn destructive(title: impl Into<String>, handler: M) -> Self {
        Self::new(title, ActionRole::Destructive, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_action_has_no_handler() {
        let action: AlertAction<()> = AlertAction::close("Dismiss", ActionRole::Negative);
        assert_eq!(action.title, "Dismiss");
        assert!(action.handler.is_none());
    }

    #[test]
    fn test_role_constructors() {
        assert_eq!(AlertAction::positive("OK", 1).role, ActionRole::Positive);
        assert_eq!(AlertAction::negative("No", 2).role, ActionRole::Negative);
        assert_eq!(AlertAction::destructive("Delete", 3).handler, Some(3));
    }

    #[test]
    fn test_action_id_display() {
        assert_eq!(ActionId(2).to_string(), "action#2");
        assert_eq!(ActionId(2).index(), 2);
    }
}
