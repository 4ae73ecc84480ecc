//! Ducky Alert demo.
//!
//! A small host screen that opens each kind of alert. Set
//! `DUCKY_ALERT_STYLE` to a TOML style file to recolor the alerts and
//! `RUST_LOG` to control logging (default `info`).

use std::path::PathBuf;
use std::rc::Rc;

use iced::widget::{button, column, container, svg, text};
use iced::{Element, Length, Size, Subscription, Task, window};
use tracing_subscriber::EnvFilter;

use ducky_alert::theme::colors::RED;
use ducky_alert::{
    ActionRole, AlertAction, AlertEvent, AlertImage, AlertOutput, AlertPresenter, AlertScreen,
    AlertStyle,
    LifecycleSignal, SignalHub, TextSpan, lifecycle_events, view,
};

const INITIAL_SIZE: Size = Size::new(420.0, 720.0);

const WARNING_ICON: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2 1 21h22L12 2zm1 15h-2v-2h2v2zm0-4h-2V9h2v4z"/></svg>"#;

/// Application entry point.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Ducky Alert demo");

    iced::application(Demo::new, Demo::update, Demo::view)
        .title("Ducky Alert")
        .subscription(Demo::subscription)
        .window_size(INITIAL_SIZE)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ShowConfirm,
    ShowChoices,
    ShowRich,
    ShowCustom,
    Alert(AlertEvent),
    Lifecycle(LifecycleSignal),
    Resized(Size),
    Saved,
    Discarded,
    Archived,
    Deleted,
    Backgrounded,
}

struct Demo {
    hub: Rc<SignalHub>,
    style: AlertStyle,
    alert: Option<AlertPresenter<Message>>,
    window_size: Size,
    status: String,
}

impl Demo {
    fn new() -> Self {
        Self {
            hub: SignalHub::new(),
            style: load_style(),
            alert: None,
            window_size: INITIAL_SIZE,
            status: "No alert shown yet".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowConfirm => {
                let mut alert = AlertPresenter::with_style(
                    "Save changes?",
                    "Your edits will be lost if you leave without saving.",
                    self.style,
                    self.hub.clone(),
                );
                alert.add_action(AlertAction::negative("Discard", Message::Discarded));
                alert.add_action(AlertAction::positive("Save", Message::Saved));
                alert.set_background_handler(Message::Backgrounded);
                self.show(alert);
            }
            Message::ShowChoices => {
                let icon = AlertImage::vector(svg::Handle::from_memory(WARNING_ICON)).tinted(RED);
                let mut alert = AlertPresenter::new(
                    Some(icon),
                    "Old project",
                    "This project has not been opened in a year.",
                    self.hub.clone(),
                );
                alert.add_action(AlertAction::close("Keep", ActionRole::Negative));
                alert.add_action(AlertAction::positive("Archive", Message::Archived));
                alert.add_action(AlertAction::destructive("Delete", Message::Deleted));
                self.show(alert);
            }
            Message::ShowRich => {
                let mut alert = AlertPresenter::with_rich_message(
                    None,
                    "Delete project?",
                    vec![
                        TextSpan::new("This will remove "),
                        TextSpan::new("every file").color(RED),
                        TextSpan::new(" in the project."),
                    ],
                    self.hub.clone(),
                );
                alert.add_action(AlertAction::close("Cancel", ActionRole::Negative));
                alert.add_action(AlertAction::destructive("Delete", Message::Deleted));
                self.show(alert);
            }
            Message::ShowCustom => {
                let mut alert = AlertPresenter::custom(
                    Box::new(|| {
                        container(text("Custom content goes here").size(20))
                            .center(Length::Fill)
                            .into()
                    }),
                    260.0,
                    self.hub.clone(),
                );
                alert.add_action(AlertAction::close("Close", ActionRole::Positive));
                self.show(alert);
            }
            Message::Alert(event) => return self.route(event),
            Message::Lifecycle(LifecycleSignal::Background) => {
                let subscribed = self
                    .alert
                    .as_ref()
                    .is_some_and(|alert| self.hub.is_subscribed(alert.subscriber()));
                if subscribed {
                    return self.route(AlertEvent::AppBackgrounded);
                }
            }
            Message::Lifecycle(LifecycleSignal::Foreground) => {}
            Message::Resized(size) => self.window_size = size,
            Message::Saved => self.status = "Saved".to_string(),
            Message::Discarded => self.status = "Discarded".to_string(),
            Message::Archived => self.status = "Archived".to_string(),
            Message::Deleted => self.status = "Deleted".to_string(),
            Message::Backgrounded => self.status = "Closed by backgrounding".to_string(),
        }
        Task::none()
    }

    /// Replace any visible alert with `alert` and present it.
    fn show(&mut self, mut alert: AlertPresenter<Message>) {
        if let Some(mut previous) = self.alert.take() {
            previous.dismiss();
        }
        alert.present();
        self.alert = Some(alert);
    }

    /// Forward an event to the visible alert and act on its outputs.
    fn route(&mut self, event: AlertEvent) -> Task<Message> {
        let Some(alert) = self.alert.as_mut() else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        let mut closed = false;
        for output in alert.handle_event(event) {
            match output {
                AlertOutput::Invoke(message) => tasks.push(Task::done(message)),
                AlertOutput::Dismissed(reason) => {
                    tracing::debug!(?reason, "Alert closed");
                    closed = true;
                }
            }
        }
        if closed {
            self.alert = None;
        }
        Task::batch(tasks)
    }

    fn view(&self) -> Element<'_, Message> {
        let base: Element<'_, Message> = container(
            column![
                text(&self.status).size(16),
                button("Two actions").on_press(Message::ShowConfirm),
                button("Three actions with image").on_press(Message::ShowChoices),
                button("Styled message").on_press(Message::ShowRich),
                button("Custom content").on_press(Message::ShowCustom),
            ]
            .spacing(12),
        )
        .center(Length::Fill)
        .into();

        match &self.alert {
            Some(alert) => view::overlay(
                base,
                view::screen(alert, self.window_size).map(Message::Alert),
            ),
            None => base,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            lifecycle_events().map(Message::Lifecycle),
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
        ])
    }
}

/// Style from `DUCKY_ALERT_STYLE`, or the default style.
fn load_style() -> AlertStyle {
    let Some(path) = std::env::var_os("DUCKY_ALERT_STYLE").map(PathBuf::from) else {
        return AlertStyle::default();
    };
    match AlertStyle::load_from(&path) {
        Ok(style) => style,
        Err(err) => {
            tracing::warn!(
                error = %err,
                suggestion = err.suggestion(),
                "Using default alert style"
            );
            AlertStyle::default()
        }
    }
}
