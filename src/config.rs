//! Application configuration
//!
//! Settings come from an optional TOML file. Every key has a default, so a
//! missing file (or a missing key) is never an error.

use crate::{MessageCardError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV_VAR: &str = "MESSAGECARD_CONFIG";

const APP_DIR: &str = "messagecard";

/// Which built-in theme to use
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Configuration for the whole application
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// File the card is saved to and loaded from
    pub save_path: PathBuf,

    /// Seconds a settled card stays up before returning to the menu (0 = forever)
    pub hold_secs: f32,

    /// Animation timestep rate
    pub target_fps: u32,

    /// Initial window size
    pub window_width: f32,
    pub window_height: f32,

    /// Wrap width for the card text, in characters
    pub max_line_chars: usize,

    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            hold_secs: 8.0,
            target_fps: 60,
            window_width: 800.0,
            window_height: 600.0,
            max_line_chars: 24,
            theme: ThemeChoice::Dark,
        }
    }
}

/// `<data_local_dir>/messagecard/message.json`, or `./message.json` on
/// platforms without a data directory
pub fn default_save_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR).join("message.json"))
        .unwrap_or_else(|| PathBuf::from("message.json"))
}

/// Where the config file is looked up when the environment does not override it
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

impl AppConfig {
    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MessageCardError::ConfigError(format!(
                "Failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            MessageCardError::ConfigError(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file from the environment or the platform config
    /// directory. Falls back to defaults when it is absent or unusable.
    pub fn discover() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(default_config_path);

        let Some(path) = path else {
            debug!("No config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn with_hold_secs(mut self, hold_secs: f32) -> Self {
        self.hold_secs = hold_secs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.hold_secs.is_finite() || self.hold_secs < 0.0 {
            return Err(MessageCardError::ConfigError(format!(
                "hold_secs must be zero or positive, got {}",
                self.hold_secs
            )));
        }

        if self.target_fps == 0 || self.target_fps > 240 {
            return Err(MessageCardError::ConfigError(format!(
                "target_fps must be between 1 and 240, got {}",
                self.target_fps
            )));
        }

        if self.window_width < 200.0 || self.window_height < 150.0 {
            return Err(MessageCardError::ConfigError(format!(
                "Window size {}x{} is too small",
                self.window_width, self.window_height
            )));
        }

        if self.max_line_chars < 4 {
            return Err(MessageCardError::ConfigError(
                "max_line_chars must be at least 4".to_string(),
            ));
        }

        if self.save_path.as_os_str().is_empty() {
            return Err(MessageCardError::ConfigError(
                "save_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.hold_secs, 8.0);
        assert!(config.save_path.ends_with("message.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
                hold_secs = 0.0
                theme = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.hold_secs, 0.0);
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.max_line_chars, 24);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "target_fps = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, MessageCardError::ConfigError(_)));
    }

    #[test]
    fn test_load_reads_save_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "save_path = \"/tmp/card.json\"\nmax_line_chars = 30\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.save_path, PathBuf::from("/tmp/card.json"));
        assert_eq!(config.max_line_chars, 30);
    }
}
