//! The alert presenter: content, actions and presentation lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//! Unpresented ──present()──▶ Presented ──tap / background / dismiss──▶ Dismissed
//! ```
//!
//! - Actions can be added only while unpresented; later calls are ignored.
//! - Presenting subscribes to the background signal and builds the buttons.
//! - Every path into `Dismissed` unsubscribes first. Dropping a presented
//!   alert unsubscribes as well.
//! - `Dismissed` is terminal: further events produce nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! let hub = SignalHub::new();
//! let mut alert = AlertPresenter::with_style("Discard draft?", "", AlertStyle::default(), hub.clone());
//! alert.add_action(AlertAction::negative("Keep", Message::Keep));
//! alert.add_action(AlertAction::destructive("Discard", Message::Discard));
//! alert.present();
//!
//! // in update():
//! for output in alert.handle_event(event) {
//!     match output {
//!         AlertOutput::Invoke(message) => tasks.push(Task::done(message)),
//!         AlertOutput::Dismissed(_) => self.alert = None,
//!     }
//! }
//! ```

use std::rc::Rc;

use iced::Size;

use crate::action::{ActionId, AlertAction};
use crate::button::{ActionButton, SeparatorPosition};
use crate::content::{AlertContent, AlertImage, AlertText, CustomView, ImageSource, TextSpan};
use crate::registry::HandlerRegistry;
use crate::screen::{
    AlertEvent, AlertLayout, AlertOutput, AlertScreen, DismissReason, Orientation,
};
use crate::signal::{BackgroundSignal, SubscriberId};
use crate::theme::AlertStyle;

/// Presentation phase of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unpresented,
    Presented,
    Dismissed,
}

/// A modal alert view-model.
///
/// `M` is the host's message type; action and background handlers are
/// messages handed back through [`AlertOutput::Invoke`].
pub struct AlertPresenter<M> {
    subscriber: SubscriberId,
    signal: Rc<dyn BackgroundSignal>,
    content: AlertContent,
    style: AlertStyle,
    actions: Vec<AlertAction<M>>,
    background_handler: Option<M>,
    phase: Phase,
    orientation: Orientation,
    buttons: Vec<ActionButton>,
    handlers: HandlerRegistry<M>,
}

impl<M> AlertPresenter<M> {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Image, title and plain message, drawn with the default style.
    pub fn new(
        image: Option<AlertImage>,
        title: impl Into<String>,
        message: impl Into<String>,
        signal: Rc<dyn BackgroundSignal>,
    ) -> Self {
        let content = AlertContent::Standard {
            image,
            title: title.into(),
            message: AlertText::Plain(message.into()),
        };
        Self::from_parts(content, AlertStyle::default(), signal)
    }

    /// Title and message without an image, drawn with `style`.
    pub fn with_style(
        title: impl Into<String>,
        message: impl Into<String>,
        style: AlertStyle,
        signal: Rc<dyn BackgroundSignal>,
    ) -> Self {
        let content = AlertContent::Standard {
            image: None,
            title: title.into(),
            message: AlertText::Plain(message.into()),
        };
        Self::from_parts(content, style, signal)
    }

    /// Image, title and styled message, drawn with the default style.
    pub fn with_rich_message(
        image: Option<AlertImage>,
        title: impl Into<String>,
        message: Vec<TextSpan>,
        signal: Rc<dyn BackgroundSignal>,
    ) -> Self {
        let content = AlertContent::Standard {
            image,
            title: title.into(),
            message: AlertText::Rich(message),
        };
        Self::from_parts(content, AlertStyle::default(), signal)
    }

    /// Caller-built content in a container exactly `height` high.
    pub fn custom(view: CustomView, height: f32, signal: Rc<dyn BackgroundSignal>) -> Self {
        Self::from_parts(
            AlertContent::Custom { view, height },
            AlertStyle::default(),
            signal,
        )
    }

    /// Building an alert from a declarative layout archive is not supported.
    ///
    /// # Panics
    ///
    /// Always. Use one of the content constructors.
    #[track_caller]
    pub fn from_layout_archive(_archive: &[u8]) -> Self {
        panic!(
            "AlertPresenter cannot be restored from a layout archive; use new, with_style, \
             with_rich_message or custom"
        )
    }

    fn from_parts(
        content: AlertContent,
        style: AlertStyle,
        signal: Rc<dyn BackgroundSignal>,
    ) -> Self {
        if let Some(image) = content.image()
            && image.tint().is_some()
            && matches!(image.source(), ImageSource::Raster(_))
        {
            tracing::warn!("Alert image tint ignored: only vector images can be tinted");
        }

        Self {
            subscriber: SubscriberId::next(),
            signal,
            content,
            style,
            actions: Vec::new(),
            background_handler: None,
            phase: Phase::Unpresented,
            orientation: Orientation::Horizontal,
            buttons: Vec::new(),
            handlers: HandlerRegistry::new(),
        }
    }

    // =========================================================================
    // CONFIGURATION
    // =========================================================================

    /// Append an action. Ignored once presentation has begun.
    pub fn add_action(&mut self, action: AlertAction<M>) {
        if self.phase != Phase::Unpresented {
            tracing::debug!(
                subscriber = %self.subscriber,
                title = %action.title,
                "Ignoring action added after presentation"
            );
            return;
        }
        self.actions.push(action);
    }

    /// Message emitted if the host is backgrounded while the alert is shown.
    ///
    /// The alert closes right after emitting it. Only the last handler set
    /// is kept.
    pub fn set_background_handler(&mut self, handler: M) {
        self.background_handler = Some(handler);
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Show the alert: subscribe to the background signal and build buttons.
    ///
    /// Returns `false` (and does nothing) unless the alert is unpresented.
    pub fn present(&mut self) -> bool {
        if self.phase != Phase::Unpresented {
            tracing::warn!(
                subscriber = %self.subscriber,
                phase = ?self.phase,
                "Alert already presented"
            );
            return false;
        }

        self.signal.subscribe(self.subscriber);
        self.phase = Phase::Presented;
        self.orientation = Orientation::for_action_count(self.actions.len());
        self.build_buttons();

        tracing::info!(
            subscriber = %self.subscriber,
            title = self.content.title().unwrap_or("<custom>"),
            actions = self.buttons.len(),
            orientation = ?self.orientation,
            "Presented alert"
        );
        true
    }

    /// Close the alert on the host's request.
    pub fn dismiss(&mut self) -> Vec<AlertOutput<M>> {
        self.handle_event(AlertEvent::DismissRequested)
    }

    fn build_buttons(&mut self) {
        let count = self.actions.len();
        self.handlers.clear();
        self.buttons = Vec::with_capacity(count);

        for (index, action) in self.actions.iter_mut().enumerate() {
            let id = ActionId(index);
            if let Some(handler) = action.handler.take() {
                self.handlers.register(id, handler);
            }

            let mut button = ActionButton::new(id, self.style);
            button.set_title(action.title.as_str(), action.role);
            button.add_separator(SeparatorPosition::Top);
            if count < 3 && index > 0 {
                button.add_separator(SeparatorPosition::Left);
            }
            self.buttons.push(button);
        }
    }

    /// Leave the presented phase. Returns `false` when not presented.
    fn finish(&mut self, reason: DismissReason) -> bool {
        if self.phase != Phase::Presented {
            return false;
        }
        self.signal.unsubscribe(self.subscriber);
        self.phase = Phase::Dismissed;
        tracing::info!(subscriber = %self.subscriber, ?reason, "Dismissed alert");
        true
    }

    fn on_button_tapped(&mut self, id: ActionId) -> Vec<AlertOutput<M>> {
        if self.phase != Phase::Presented {
            return Vec::new();
        }
        let Some(button) = self.buttons.get(id.index()) else {
            tracing::debug!(
                subscriber = %self.subscriber,
                action = %id,
                "Tap on unknown action ignored"
            );
            return Vec::new();
        };
        let handler = button.perform_action(&mut self.handlers);

        let reason = DismissReason::ActionTapped(id);
        self.finish(reason);

        let mut outputs = vec![AlertOutput::Dismissed(reason)];
        match handler {
            Some(message) => outputs.push(AlertOutput::Invoke(message)),
            None => tracing::debug!(action = %id, "Action has no handler; closing only"),
        }
        outputs
    }

    fn on_backgrounded(&mut self) -> Vec<AlertOutput<M>> {
        if self.phase != Phase::Presented {
            return Vec::new();
        }

        let mut outputs = Vec::with_capacity(2);
        if let Some(message) = self.background_handler.take() {
            outputs.push(AlertOutput::Invoke(message));
        }
        self.finish(DismissReason::Backgrounded);
        outputs.push(AlertOutput::Dismissed(DismissReason::Backgrounded));
        outputs
    }

    fn on_dismiss_requested(&mut self) -> Vec<AlertOutput<M>> {
        if self.finish(DismissReason::Host) {
            vec![AlertOutput::Dismissed(DismissReason::Host)]
        } else {
            Vec::new()
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn subscriber(&self) -> SubscriberId {
        self.subscriber
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_presented(&self) -> bool {
        self.phase == Phase::Presented
    }

    pub fn is_dismissed(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    /// Number of actions queued or shown.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Buttons built by [`present`](Self::present); empty before that.
    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn content(&self) -> &AlertContent {
        &self.content
    }

    pub fn style(&self) -> &AlertStyle {
        &self.style
    }

    pub fn has_background_handler(&self) -> bool {
        self.background_handler.is_some()
    }
}

impl<M> AlertScreen for AlertPresenter<M> {
    type Message = M;

    fn layout(&self, viewport: Size) -> AlertLayout<'_> {
        AlertLayout::new(
            viewport,
            &self.content,
            &self.style,
            &self.buttons,
            self.orientation,
        )
    }

    fn handle_event(&mut self, event: AlertEvent) -> Vec<AlertOutput<M>> {
        match event {
            AlertEvent::ButtonTapped(id) => self.on_button_tapped(id),
            AlertEvent::AppBackgrounded => self.on_backgrounded(),
            AlertEvent::DismissRequested => self.on_dismiss_requested(),
        }
    }
}

impl<M> Drop for AlertPresenter<M> {
    fn drop(&mut self) {
        if self.phase == Phase::Presented {
            self.signal.unsubscribe(self.subscriber);
        }
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for AlertPresenter<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertPresenter")
            .field("subscriber", &self.subscriber)
            .field("phase", &self.phase)
            .field("content", &self.content)
            .field("actions", &self.actions)
            .field("orientation", &self.orientation)
            .field("buttons", &self.buttons)
            .finish_non_exhaustive()
    }
}
