//! Handler registry for action buttons.
//!
//! Buttons hold an [`ActionId`] instead of a captured callback. When a
//! button is tapped, the presenter looks the id up here and takes the
//! stored handler message, so each handler can be emitted at most once.

use std::collections::HashMap;

use crate::action::ActionId;

/// Map from action id to the host message the action emits.
#[derive(Debug, Clone)]
pub struct HandlerRegistry<M> {
    handlers: HashMap<ActionId, M>,
}

impl<M> Default for HandlerRegistry<M> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<M> HandlerRegistry<M> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for an action.
    ///
    /// If the action already had a handler, it is replaced.
    pub fn register(&mut self, id: ActionId, handler: M) {
        self.handlers.insert(id, handler);
    }

    /// Remove and return the handler for an action.
    pub fn take(&mut self, id: ActionId) -> Option<M> {
        self.handlers.remove(&id)
    }

    /// Check if an action still has a handler waiting.
    pub fn contains(&self, id: ActionId) -> bool {
        self.handlers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Drop every pending handler.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_one_shot() {
        let mut registry = HandlerRegistry::new();
        registry.register(ActionId(0), "save");
        assert!(registry.contains(ActionId(0)));
        assert_eq!(registry.take(ActionId(0)), Some("save"));
        assert_eq!(registry.take(ActionId(0)), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = HandlerRegistry::new();
        registry.register(ActionId(1), 1);
        registry.register(ActionId(1), 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.take(ActionId(1)), Some(2));
    }

    #[test]
    fn test_clear() {
        let mut registry = HandlerRegistry::new();
        registry.register(ActionId(0), ());
        registry.register(ActionId(1), ());
        registry.clear();
        assert!(!registry.contains(ActionId(0)));
        assert_eq!(registry.len(), 0);
    }
}
