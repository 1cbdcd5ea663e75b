use super::types::MessageConfig;
use crate::{MessageCardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk envelope for the single saved card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCard {
    pub saved_at: DateTime<Utc>,
    pub card: MessageConfig,
}

/// Single-slot message store backed by one JSON file.
///
/// Every save overwrites the previous card.
#[derive(Debug, Clone)]
pub struct MessageStore {
    path: PathBuf,
}

impl MessageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn save(&self, config: &MessageConfig) -> Result<SavedCard> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let saved = SavedCard {
            saved_at: Utc::now(),
            card: config.clone(),
        };
        let json = serde_json::to_string_pretty(&saved)?;

        // Write to a sibling first so a crash never leaves a half-written card
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        info!(path = %self.path.display(), style = ?config.style, "Saved message");
        Ok(saved)
    }

    pub fn load(&self) -> Result<SavedCard> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved message");
                return Err(MessageCardError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut saved: SavedCard = serde_json::from_str(&content)?;
        saved.card.clamp_params();
        saved.card.validate()?;

        info!(path = %self.path.display(), style = ?saved.card.style, "Loaded message");
        Ok(saved)
    }

    /// Remove the saved card. Succeeds if nothing was saved.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::types::{AnimationStyle, CardColor};

    #[test]
    fn test_save_overwrites_single_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path().join("message.json"));

        store
            .save(&MessageConfig::new("First", AnimationStyle::FadeIn))
            .unwrap();
        store
            .save(
                &MessageConfig::new("Second", AnimationStyle::Bounce).with_color(CardColor::Gold),
            )
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.card.text, "Second");
        assert_eq!(loaded.card.style, AnimationStyle::Bounce);
        assert_eq!(loaded.card.color, CardColor::Gold);
        assert!(!dir.path().join("message.json.tmp").exists());
    }

    #[test]
    fn test_save_rejects_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path().join("message.json"));

        let result = store.save(&MessageConfig::new("", AnimationStyle::Wave));
        assert!(matches!(result, Err(MessageCardError::Validation(_))));
        assert!(!store.exists());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path().join("nested/deeper/message.json"));

        store
            .save(&MessageConfig::new("Hello", AnimationStyle::Zoom))
            .unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_load_clamps_out_of_range_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.json");
        fs::write(
            &path,
            r#"{
                "saved_at": "2024-02-14T09:00:00Z",
                "card": {"text": "Hi", "style": "Wave", "speed": 50.0, "font_size": 1.0}
            }"#,
        )
        .unwrap();

        let loaded = MessageStore::new(&path).load().unwrap();
        assert_eq!(loaded.card.speed, crate::card::types::MAX_SPEED);
        assert_eq!(loaded.card.font_size, crate::card::types::MIN_FONT_SIZE);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path().join("message.json"));

        store.clear().unwrap();
        store
            .save(&MessageConfig::new("Bye", AnimationStyle::SlideIn))
            .unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
        assert!(matches!(store.load(), Err(MessageCardError::NotFound(_))));
    }
}
