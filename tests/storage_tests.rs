//! Save and load of the message card through the public API

use messagecard::card::{AnimationStyle, CardColor, MessageConfig, MessageStore};
use messagecard::MessageCardError;
use std::fs;

#[test]
fn test_round_trip_every_style() {
    let dir = tempfile::tempdir().unwrap();
    let store = MessageStore::new(dir.path().join("message.json"));

    for (i, style) in AnimationStyle::ALL.into_iter().enumerate() {
        let color = CardColor::ALL[i % CardColor::ALL.len()];
        let written = MessageConfig::new(format!("Card number {}\nwith love", i), style)
            .with_speed(0.5 + i as f32 * 0.25)
            .with_color(color)
            .with_font_size(20.0 + i as f32 * 4.0);

        let saved = store.save(&written).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.card, written, "round trip for {:?}", style);
        assert_eq!(loaded.saved_at, saved.saved_at);
    }
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = MessageStore::new(dir.path().join("absent.json"));

    let err = store.load().unwrap_err();
    assert!(matches!(err, MessageCardError::NotFound(_)));
    assert_eq!(err.user_message(), "No saved message found!");
}

#[test]
fn test_load_unknown_style() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("message.json");
    fs::write(
        &path,
        r#"{"saved_at": "2024-02-14T09:00:00Z", "card": {"text": "Hi", "style": "Sparkle"}}"#,
    )
    .unwrap();

    let err = MessageStore::new(&path).load().unwrap_err();
    assert!(matches!(err, MessageCardError::Serialization(_)));
}

#[test]
fn test_load_blank_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("message.json");
    fs::write(
        &path,
        r#"{"saved_at": "2024-02-14T09:00:00Z", "card": {"text": "  ", "style": "Wave"}}"#,
    )
    .unwrap();

    let err = MessageStore::new(&path).load().unwrap_err();
    assert!(matches!(err, MessageCardError::Validation(_)));
}

#[test]
fn test_saved_file_is_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("message.json");
    MessageStore::new(&path)
        .save(&MessageConfig::new("Hello", AnimationStyle::SlideIn).with_color(CardColor::Pink))
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["card"]["text"], "Hello");
    assert_eq!(value["card"]["style"], "SlideIn");
    assert_eq!(value["card"]["color"], "Pink");
    assert!(value["saved_at"].is_string());
}
