//! Loading alert styles from TOML files.

use std::fs;

use ducky_alert::theme::colors::{GREEN, RED};
use ducky_alert::{ActionButton, ActionId, ActionRole, AlertError, AlertStyle};
use iced::Color;

#[test]
fn load_style_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alert.toml");
    fs::write(
        &path,
        "button_background = \"#101010\"\nbutton_default_text = \"#808080CC\"\n",
    )
    .unwrap();

    let style = AlertStyle::load_from(&path).unwrap();
    assert_eq!(style.button_background, Color::from_rgb8(0x10, 0x10, 0x10));
    assert_eq!(
        style.button_default_text,
        Color::from_rgba8(0x80, 0x80, 0x80, f32::from(0xCC_u8) / 255.0)
    );
    assert_eq!(style.button_positive_text, GREEN);
    assert_eq!(style.button_negative_text, RED);
}

#[test]
fn loaded_style_colors_buttons() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alert.toml");
    fs::write(&path, "button_negative_text = \"#FFA500\"\n").unwrap();

    let style = AlertStyle::load_from(&path).unwrap();
    let mut button = ActionButton::new(ActionId(0), style);
    button.set_title("Remove", ActionRole::Destructive);
    assert_eq!(button.normal_color(), Color::from_rgb8(0xFF, 0xA5, 0x00));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AlertStyle::load_from(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, AlertError::StyleRead { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alert.toml");
    fs::write(&path, "button_background = \n").unwrap();
    let err = AlertStyle::load_from(&path).unwrap_err();
    assert!(matches!(err, AlertError::StyleParse { .. }));
}

#[test]
fn bad_color_names_the_value() {
    let err = AlertStyle::from_toml_str("button_positive_text = \"#12345\"\n").unwrap_err();
    assert_eq!(
        err,
        AlertError::InvalidColor {
            value: "#12345".to_string()
        }
    );
}
