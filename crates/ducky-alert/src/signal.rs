//! Background-signal subscription.
//!
//! An alert must close when the host application moves to the background.
//! Rather than listening on a process-wide channel, the presenter receives
//! a [`BackgroundSignal`] at construction, subscribes when it is presented
//! and unsubscribes on every dismissal path.
//!
//! [`SignalHub`] is the single-threaded implementation hosts normally use:
//! when the application is backgrounded, the host asks the hub for its
//! current [`subscribers`](SignalHub::subscribers) and forwards
//! `AlertEvent::AppBackgrounded` to each of those presenters.
//!
//! [`lifecycle_events`] turns iced window focus changes into
//! [`LifecycleSignal`] values for the host's subscription.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use iced::{Event, Subscription, event, window};

// =============================================================================
// SUBSCRIBER ID
// =============================================================================

/// Identity of one listener on a background signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber#{}", self.0)
    }
}

// =============================================================================
// SIGNAL INTERFACE
// =============================================================================

/// Subscription interface for the "application moved to background" signal.
pub trait BackgroundSignal {
    /// Start delivering background events to `subscriber`.
    fn subscribe(&self, subscriber: SubscriberId);

    /// Stop delivering background events to `subscriber`.
    ///
    /// Unsubscribing an id that is not subscribed does nothing.
    fn unsubscribe(&self, subscriber: SubscriberId);
}

/// Single-threaded set of background-signal subscribers.
#[derive(Debug, Default)]
pub struct SignalHub {
    subscribers: RefCell<BTreeSet<SubscriberId>>,
}

impl SignalHub {
    /// Create an empty hub, shared so it can be handed to presenters.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Subscribers a background event must be routed to, in id order.
    pub fn subscribers(&self) -> Vec<SubscriberId> {
        self.subscribers.borrow().iter().copied().collect()
    }

    pub fn is_subscribed(&self, subscriber: SubscriberId) -> bool {
        self.subscribers.borrow().contains(&subscriber)
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }
}

impl BackgroundSignal for SignalHub {
    fn subscribe(&self, subscriber: SubscriberId) {
        if self.subscribers.borrow_mut().insert(subscriber) {
            tracing::trace!(%subscriber, "Subscribed to background signal");
        }
    }

    fn unsubscribe(&self, subscriber: SubscriberId) {
        if self.subscribers.borrow_mut().remove(&subscriber) {
            tracing::trace!(%subscriber, "Unsubscribed from background signal");
        }
    }
}

// =============================================================================
// ICED ADAPTER
// =============================================================================

/// Host application lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// The application lost focus (moved to the background).
    Background,
    /// The application regained focus.
    Foreground,
}

/// Window focus changes as lifecycle signals.
///
/// Runs continuously; every other event is filtered out.
pub fn lifecycle_events() -> Subscription<LifecycleSignal> {
    event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::Unfocused) => Some(LifecycleSignal::Background),
        Event::Window(window::Event::Focused) => Some(LifecycleSignal::Foreground),
        _ => None,
    })
}
