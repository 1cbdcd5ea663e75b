use crate::{MessageCardError, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};

pub const MAX_MESSAGE_CHARS: usize = 500;

pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 4.0;

pub const MIN_FONT_SIZE: f32 = 16.0;
pub const MAX_FONT_SIZE: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimationStyle {
    #[default]
    FadeIn,
    Typewriter,
    SlideIn,
    Bounce,
    Wave,
    Zoom,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 6] = [
        AnimationStyle::FadeIn,
        AnimationStyle::Typewriter,
        AnimationStyle::SlideIn,
        AnimationStyle::Bounce,
        AnimationStyle::Wave,
        AnimationStyle::Zoom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnimationStyle::FadeIn => "Fade in",
            AnimationStyle::Typewriter => "Typewriter",
            AnimationStyle::SlideIn => "Slide in",
            AnimationStyle::Bounce => "Bounce",
            AnimationStyle::Wave => "Wave",
            AnimationStyle::Zoom => "Zoom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnimationStyle::FadeIn => "Lines fade in one after another",
            AnimationStyle::Typewriter => "Letters are typed out with a caret",
            AnimationStyle::SlideIn => "Lines slide in from alternating sides",
            AnimationStyle::Bounce => "Letters drop in and bounce",
            AnimationStyle::Wave => "Letters ripple like a flag",
            AnimationStyle::Zoom => "Letters pop in from nothing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardColor {
    #[default]
    Red,
    Gold,
    SkyBlue,
    Green,
    Purple,
    Pink,
    White,
}

impl CardColor {
    pub const ALL: [CardColor; 7] = [
        CardColor::Red,
        CardColor::Gold,
        CardColor::SkyBlue,
        CardColor::Green,
        CardColor::Purple,
        CardColor::Pink,
        CardColor::White,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardColor::Red => "Red",
            CardColor::Gold => "Gold",
            CardColor::SkyBlue => "Sky blue",
            CardColor::Green => "Green",
            CardColor::Purple => "Purple",
            CardColor::Pink => "Pink",
            CardColor::White => "White",
        }
    }

    pub fn to_color32(self) -> Color32 {
        match self {
            CardColor::Red => Color32::from_rgb(230, 41, 55),
            CardColor::Gold => Color32::from_rgb(255, 203, 0),
            CardColor::SkyBlue => Color32::from_rgb(102, 191, 255),
            CardColor::Green => Color32::from_rgb(0, 228, 48),
            CardColor::Purple => Color32::from_rgb(200, 122, 255),
            CardColor::Pink => Color32::from_rgb(255, 109, 194),
            CardColor::White => Color32::from_rgb(245, 245, 245),
        }
    }
}

/// A composed message and the parameters of its animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageConfig {
    pub text: String,
    pub style: AnimationStyle,
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default)]
    pub color: CardColor,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_speed() -> f32 {
    1.0
}

fn default_font_size() -> f32 {
    36.0
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: AnimationStyle::default(),
            speed: default_speed(),
            color: CardColor::default(),
            font_size: default_font_size(),
        }
    }
}

impl MessageConfig {
    pub fn new(text: impl Into<String>, style: AnimationStyle) -> Self {
        Self {
            text: text.into(),
            style,
            ..Default::default()
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self.clamp_params();
        self
    }

    pub fn with_color(mut self, color: CardColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self.clamp_params();
        self
    }

    /// Pull numeric parameters back into their supported ranges.
    /// Non-finite values fall back to the defaults.
    pub fn clamp_params(&mut self) {
        self.speed = if self.speed.is_finite() {
            self.speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            default_speed()
        };
        self.font_size = if self.font_size.is_finite() {
            self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
        } else {
            default_font_size()
        };
    }

    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(MessageCardError::Validation(
                "Message text is empty".to_string(),
            ));
        }

        let len = self.text.chars().count();
        if len > MAX_MESSAGE_CHARS {
            return Err(MessageCardError::Validation(format!(
                "Message is {} characters long, the limit is {}",
                len, MAX_MESSAGE_CHARS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_text() {
        let config = MessageConfig::new("   \n ", AnimationStyle::Wave);
        assert!(matches!(
            config.validate(),
            Err(MessageCardError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_long_text() {
        let config = MessageConfig::new("x".repeat(MAX_MESSAGE_CHARS + 1), AnimationStyle::Zoom);
        assert!(config.validate().is_err());

        let config = MessageConfig::new("x".repeat(MAX_MESSAGE_CHARS), AnimationStyle::Zoom);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_clamps_params() {
        let config = MessageConfig::new("Hi", AnimationStyle::Bounce)
            .with_speed(100.0)
            .with_font_size(2.0);
        assert_eq!(config.speed, MAX_SPEED);
        assert_eq!(config.font_size, MIN_FONT_SIZE);

        let mut config = MessageConfig::new("Hi", AnimationStyle::Bounce);
        config.speed = f32::NAN;
        config.clamp_params();
        assert_eq!(config.speed, 1.0);
    }

    #[test]
    fn test_style_serializes_by_name() {
        let json = serde_json::to_string(&AnimationStyle::Typewriter).unwrap();
        assert_eq!(json, "\"Typewriter\"");

        let parsed: std::result::Result<AnimationStyle, _> = serde_json::from_str("\"Sparkle\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_params_use_defaults() {
        let config: MessageConfig =
            serde_json::from_str(r#"{"text":"Hello","style":"SlideIn"}"#).unwrap();
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.color, CardColor::Red);
        assert_eq!(config.font_size, 36.0);
    }
}
