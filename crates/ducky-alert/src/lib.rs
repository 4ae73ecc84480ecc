//! Ducky Alert - modal alert component for iced.
//!
//! An alert shows a title, a message and an optional image above a row
//! (one or two actions) or column (three or more) of action buttons whose
//! labels are colored by role. It closes when a button is tapped, when the
//! host dismisses it, or when the application is backgrounded.
//!
//! The crate is split into a headless core and an iced adapter:
//!
//! - **AlertPresenter** (`presenter`): view-model and lifecycle state machine
//! - **ActionButton** (`button`): one role-colored button with dividers
//! - **HandlerRegistry** (`registry`): action id to handler message lookup
//! - **BackgroundSignal** (`signal`): injected app-background subscription
//! - **AlertScreen** (`screen`): layout + event capability trait
//! - **view**: renders layouts as iced elements
//! - **theme**: colors, layout constants and the configurable `AlertStyle`

pub mod action;
pub mod button;
pub mod content;
pub mod error;
pub mod presenter;
pub mod registry;
pub mod screen;
pub mod signal;
pub mod theme;
pub mod view;

pub use action::{ActionId, ActionRole, AlertAction};
pub use button::{ActionButton, SeparatorPosition, Separators};
pub use content::{AlertContent, AlertImage, AlertText, CustomView, ImageSource, TextSpan};
pub use error::AlertError;
pub use presenter::{AlertPresenter, Phase};
pub use registry::HandlerRegistry;
pub use screen::{
    AlertEvent, AlertLayout, AlertOutput, AlertScreen, DismissReason, HeightPolicy, Orientation,
};
pub use signal::{BackgroundSignal, LifecycleSignal, SignalHub, SubscriberId, lifecycle_events};
pub use theme::AlertStyle;
