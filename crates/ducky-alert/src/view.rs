//! Iced rendering for alerts.
//!
//! [`alert`] draws an [`AlertLayout`] as the alert container (content on
//! top, action buttons below). [`overlay`] stacks a rendered alert over
//! the host's view behind a dimmed backdrop. Clicking the backdrop does
//! NOT close the alert.
//!
//! # Example
//!
//! ```rust,ignore
//! fn view(&self) -> Element<'_, Message> {
//!     let base = self.view_main();
//!     match &self.alert {
//!         Some(alert) => overlay(base, view::screen(alert, self.window_size).map(Message::Alert)),
//!         None => base,
//!     }
//! }
//! ```

use iced::widget::{
    Column, Row, Space, button, center, column, container, opaque, rich_text, row, span, stack,
    svg, text,
};
use iced::{Border, Element, Length, Padding, Size, Theme};

use crate::button::ActionButton;
use crate::content::{AlertContent, AlertImage, AlertText, ImageSource};
use crate::screen::{AlertEvent, AlertLayout, AlertScreen, HeightPolicy, Orientation};
use crate::theme::colors::{BACKDROP, MESSAGE_TEXT, SEPARATOR, TITLE_TEXT};
use crate::theme::{
    BUTTON_TEXT_SIZE, CONTAINER_RADIUS, IMAGE_HEIGHT, MESSAGE_SIZE, SEPARATOR_THICKNESS,
    TITLE_SIZE,
};

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Render any alert screen for a viewport.
pub fn screen<S: AlertScreen>(screen: &S, viewport: Size) -> Element<'_, AlertEvent> {
    alert(screen.layout(viewport))
}

/// Render an alert container from its layout.
pub fn alert(layout: AlertLayout<'_>) -> Element<'_, AlertEvent> {
    let modal_background = layout.style.modal_background;

    let content = content_block(&layout);
    let body = column![
        content,
        Space::new().height(layout.actions_gap),
        action_group(&layout),
    ]
    .width(Length::Fill);

    let sized: Element<'_, AlertEvent> = match layout.height {
        HeightPolicy::Fixed(height) => container(body).height(Length::Fixed(height)).into(),
        HeightPolicy::Clamped { min, max } => {
            // Zero-width strut holds the minimum height.
            container(row![Space::new().height(Length::Fixed(min)), body])
                .max_height(max)
                .into()
        }
    };

    container(sized)
        .width(Length::Fixed(layout.container_width))
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(modal_background.into()),
            border: Border {
                radius: CONTAINER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Stack a rendered alert over the host view.
///
/// Layers: base -> backdrop -> centered alert.
pub fn overlay<'a, M: 'a>(base: Element<'a, M>, alert: Element<'a, M>) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    stack![base, opaque(backdrop), center(alert)].into()
}

// =============================================================================
// CONTENT
// =============================================================================

fn content_block<'a>(layout: &AlertLayout<'a>) -> Element<'a, AlertEvent> {
    match layout.content {
        AlertContent::Custom { view, .. } => container(view())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        AlertContent::Standard {
            image,
            title,
            message,
        } => {
            let mut block = Column::new()
                .spacing(layout.content_spacing)
                .width(Length::Fill);

            if let Some(image) = image {
                block = block.push(container(image_view(image)).center_x(Length::Fill));
            }

            block = block
                .push(
                    container(text(title.as_str()).size(TITLE_SIZE).color(TITLE_TEXT))
                        .center_x(Length::Fill),
                )
                .push(container(message_view(message)).center_x(Length::Fill));

            container(block)
                .padding(Padding::new(layout.content_inset).bottom(0.0))
                .into()
        }
    }
}

fn image_view(image: &AlertImage) -> Element<'_, AlertEvent> {
    match image.source() {
        ImageSource::Vector(handle) => {
            let mut icon = svg(handle.clone()).height(IMAGE_HEIGHT).width(Length::Shrink);
            if let Some(tint) = image.tint() {
                icon = icon.style(move |_theme, _status| svg::Style { color: Some(tint) });
            }
            icon.into()
        }
        ImageSource::Raster(handle) => iced::widget::image(handle.clone())
            .height(IMAGE_HEIGHT)
            .into(),
    }
}

fn message_view(message: &AlertText) -> Element<'_, AlertEvent> {
    match message {
        AlertText::Plain(body) => text(body.as_str())
            .size(MESSAGE_SIZE)
            .color(MESSAGE_TEXT)
            .into(),
        AlertText::Rich(spans) => {
            let spans: Vec<text::Span<'_, ()>> = spans
                .iter()
                .map(|piece| {
                    let styled =
                        span(piece.text.as_str()).color(piece.color.unwrap_or(MESSAGE_TEXT));
                    match piece.size {
                        Some(size) => styled.size(size),
                        None => styled,
                    }
                })
                .collect();
            rich_text(spans).size(MESSAGE_SIZE).into()
        }
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

fn action_group<'a>(layout: &AlertLayout<'a>) -> Element<'a, AlertEvent> {
    let buttons: Vec<Element<'a, AlertEvent>> = layout
        .buttons
        .iter()
        .map(|button| action_button(button, layout.button_height))
        .collect();

    match layout.orientation {
        Orientation::Horizontal => Row::with_children(buttons).width(Length::Fill).into(),
        Orientation::Vertical => Column::with_children(buttons).width(Length::Fill).into(),
    }
}

fn action_button(action: &ActionButton, height: f32) -> Element<'_, AlertEvent> {
    let background = action.background();
    let normal = action.normal_color();
    let pressed = action.pressed_color();

    let label = container(text(action.title()).size(BUTTON_TEXT_SIZE)).center(Length::Fill);
    let control = button(label)
        .on_press(AlertEvent::ButtonTapped(action.id()))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(0)
        .style(move |_theme: &Theme, status| button::Style {
            background: Some(background.into()),
            text_color: match status {
                button::Status::Pressed => pressed,
                _ => normal,
            },
            ..Default::default()
        });

    let separators = action.separators();
    let mut body: Element<'_, AlertEvent> = control.into();
    if separators.left {
        body = row![
            separator_line(Length::Fixed(SEPARATOR_THICKNESS), Length::Fill),
            body
        ]
        .into();
    }
    if separators.top {
        body = column![separator_line(Length::Fill, Length::Fixed(SEPARATOR_THICKNESS)), body]
            .into();
    }

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

fn separator_line<'a>(width: Length, height: Length) -> Element<'a, AlertEvent> {
    container(Space::new())
        .width(width)
        .height(height)
        .style(|_theme: &Theme| container::Style {
            background: Some(SEPARATOR.into()),
            ..Default::default()
        })
        .into()
}
