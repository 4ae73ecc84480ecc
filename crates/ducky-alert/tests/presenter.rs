//! End-to-end tests for the alert lifecycle.

use std::rc::Rc;

use ducky_alert::theme::colors::{DARK_GRAY, GREEN, RED};
use ducky_alert::{
    ActionId, ActionRole, AlertAction, AlertEvent, AlertOutput, AlertPresenter, AlertScreen,
    AlertStyle, DismissReason, HeightPolicy, Orientation, Phase, SeparatorPosition, SignalHub,
    TextSpan,
};
use iced::{Color, Size};

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    A,
    B,
    C,
    Background,
}

fn three_action_alert(hub: &Rc<SignalHub>) -> AlertPresenter<Msg> {
    let mut alert = AlertPresenter::new(None, "Pick one", "Three choices", hub.clone());
    alert.add_action(AlertAction::negative("A", Msg::A));
    alert.add_action(AlertAction::positive("B", Msg::B));
    alert.add_action(AlertAction::destructive("C", Msg::C));
    alert
}

#[test]
fn three_actions_stack_vertically_with_role_colors() {
    let hub = SignalHub::new();
    let mut alert = three_action_alert(&hub);
    assert!(alert.present());

    assert_eq!(alert.orientation(), Orientation::Vertical);
    let buttons = alert.buttons();
    assert_eq!(buttons.len(), 3);
    for button in buttons {
        assert!(button.has_separator(SeparatorPosition::Top));
        assert!(!button.has_separator(SeparatorPosition::Left));
    }

    let colors: Vec<Color> = buttons.iter().map(|b| b.normal_color()).collect();
    assert_eq!(colors, vec![DARK_GRAY, GREEN, RED]);

    let titles: Vec<&str> = buttons.iter().map(|b| b.title()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn two_actions_divide_columns() {
    let hub = SignalHub::new();
    let mut alert = AlertPresenter::with_style("Title", "Body", AlertStyle::default(), hub.clone());
    alert.add_action(AlertAction::negative("No", Msg::A));
    alert.add_action(AlertAction::positive("Yes", Msg::B));
    alert.present();

    assert_eq!(alert.orientation(), Orientation::Horizontal);
    let buttons = alert.buttons();
    assert!(!buttons[0].has_separator(SeparatorPosition::Left));
    assert!(buttons[1].has_separator(SeparatorPosition::Left));
    assert!(buttons.iter().all(|b| b.has_separator(SeparatorPosition::Top)));
}

#[test]
fn background_signal_fires_once() {
    let hub = SignalHub::new();
    let mut alert = three_action_alert(&hub);
    alert.set_background_handler(Msg::Background);
    alert.present();
    assert_eq!(hub.subscribers(), vec![alert.subscriber()]);

    // Host routes the signal to every subscriber.
    let mut outputs = Vec::new();
    for subscriber in hub.subscribers() {
        assert_eq!(subscriber, alert.subscriber());
        outputs.extend(alert.handle_event(AlertEvent::AppBackgrounded));
    }
    assert_eq!(
        outputs,
        vec![
            AlertOutput::Invoke(Msg::Background),
            AlertOutput::Dismissed(DismissReason::Backgrounded),
        ]
    );
    assert_eq!(alert.phase(), Phase::Dismissed);

    // Second signal: nobody is subscribed and a direct event does nothing.
    assert!(hub.subscribers().is_empty());
    assert!(alert.handle_event(AlertEvent::AppBackgrounded).is_empty());
}

#[test]
fn tap_without_handler_emits_no_other_handler() {
    let hub = SignalHub::new();
    let mut alert = AlertPresenter::new(None, "Heads up", "", hub.clone());
    alert.add_action(AlertAction::close("OK", ActionRole::Positive));
    alert.add_action(AlertAction::destructive("Delete", Msg::C));
    alert.set_background_handler(Msg::Background);
    alert.present();

    let outputs = alert.handle_event(AlertEvent::ButtonTapped(ActionId(0)));
    let messages: Vec<Msg> = outputs
        .iter()
        .cloned()
        .filter_map(AlertOutput::into_message)
        .collect();
    assert!(messages.is_empty());
    assert_eq!(
        outputs,
        vec![AlertOutput::Dismissed(DismissReason::ActionTapped(ActionId(0)))]
    );
    assert!(hub.is_empty());
}

#[test]
fn late_actions_never_show() {
    let hub = SignalHub::new();
    let mut alert = three_action_alert(&hub);
    alert.present();
    alert.add_action(AlertAction::positive("D", Msg::A));
    assert_eq!(alert.buttons().len(), 3);
    assert_eq!(alert.action_count(), 3);

    alert.dismiss();
    alert.add_action(AlertAction::positive("E", Msg::A));
    assert_eq!(alert.buttons().len(), 3);
}

#[test]
fn every_exit_path_unsubscribes() {
    let hub = SignalHub::new();

    let mut tapped = three_action_alert(&hub);
    tapped.present();
    tapped.handle_event(AlertEvent::ButtonTapped(ActionId(2)));

    let mut backgrounded = three_action_alert(&hub);
    backgrounded.present();
    backgrounded.handle_event(AlertEvent::AppBackgrounded);

    let mut host = three_action_alert(&hub);
    host.present();
    host.handle_event(AlertEvent::DismissRequested);

    let mut dropped = three_action_alert(&hub);
    dropped.present();
    drop(dropped);

    assert!(hub.is_empty());
}

#[test]
fn rich_message_layout_is_clamped() {
    let hub = SignalHub::new();
    let mut alert: AlertPresenter<Msg> = AlertPresenter::with_rich_message(
        None,
        "Styled",
        vec![TextSpan::new("plain "), TextSpan::new("red").color(RED)],
        hub.clone(),
    );
    alert.present();

    let layout = alert.layout(Size::new(300.0, 600.0));
    assert_eq!(layout.container_width, 240.0);
    assert_eq!(
        layout.height,
        HeightPolicy::Clamped {
            min: 150.0,
            max: 400.0
        }
    );
    assert_eq!(
        layout.content.message().map(|m| m.plain_text()),
        Some("plain red".to_string())
    );
    assert_eq!(layout.actions_height(), 0.0);
}

#[test]
fn custom_view_uses_fixed_height() {
    let hub = SignalHub::new();
    let mut alert: AlertPresenter<Msg> = AlertPresenter::custom(
        Box::new(|| iced::widget::text("custom").into()),
        280.0,
        hub.clone(),
    );
    alert.add_action(AlertAction::close("Close", ActionRole::Positive));
    alert.present();

    let layout = alert.layout(Size::new(1000.0, 800.0));
    assert_eq!(layout.height, HeightPolicy::Fixed(280.0));
    assert_eq!(layout.height.resolve(999.0), 280.0);
    assert_eq!(layout.actions_height(), 60.0);
    assert!(layout.content.title().is_none());
}

#[test]
fn several_alerts_share_one_hub() {
    let hub = SignalHub::new();
    let mut first = three_action_alert(&hub);
    let mut second = three_action_alert(&hub);
    first.present();
    second.present();
    assert_eq!(hub.len(), 2);

    first.dismiss();
    assert_eq!(hub.subscribers(), vec![second.subscriber()]);
}
