//! Application state management
//!
//! This module provides the central state for the card UI: which screen is
//! showing, the card being animated, the compose draft and the save slot.

use crate::animation::{AnimationClock, AnimationEngine, Frame, TextLayout};
use crate::card::{AnimationStyle, CardColor, MessageConfig, MessageStore};
use crate::config::AppConfig;
use crate::{MessageCardError, Result};
use chrono::{DateTime, Local, Utc};
use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

/// Choices offered by the main menu, with their selection codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit = 0,
    Write = 1,
    Read = 2,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Write, MenuChoice::Read, MenuChoice::Exit];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::Write),
            2 => Some(MenuChoice::Read),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Write => "Write a new message",
            MenuChoice::Read => "Read the saved message",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Which screen the window is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu,
    Compose,
    Animate {
        /// The card was just written (as opposed to loaded)
        from_compose: bool,
    },
    LoadError {
        message: String,
    },
    Exiting,
}

/// Outcome of the last save
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Saved(DateTime<Utc>),
    Failed(String),
}

impl SaveStatus {
    pub fn describe(&self) -> String {
        match self {
            SaveStatus::Saved(at) => {
                format!("Saved at {}", at.with_timezone(&Local).format("%H:%M:%S"))
            }
            SaveStatus::Failed(reason) => format!("Not saved: {}", reason),
        }
    }
}

/// Editable fields of the compose screen
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeDraft {
    pub text: String,
    pub style: AnimationStyle,
    pub speed: f32,
    pub color: CardColor,
    pub font_size: f32,
}

impl Default for ComposeDraft {
    fn default() -> Self {
        Self::from_config(&MessageConfig::default())
    }
}

impl ComposeDraft {
    pub fn from_config(config: &MessageConfig) -> Self {
        Self {
            text: config.text.clone(),
            style: config.style,
            speed: config.speed,
            color: config.color,
            font_size: config.font_size,
        }
    }

    pub fn to_config(&self) -> MessageConfig {
        MessageConfig::new(self.text.trim_end(), self.style)
            .with_speed(self.speed)
            .with_color(self.color)
            .with_font_size(self.font_size)
    }

    /// The card this draft would produce, if it is valid
    pub fn validated(&self) -> Result<MessageConfig> {
        let config = self.to_config();
        config.validate()?;
        Ok(config)
    }
}

/// Debug information displayed in the debug panel
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    /// Current frame rate
    pub fps: f32,
    /// Recent log messages
    pub log_messages: VecDeque<String>,
}

impl DebugInfo {
    pub fn new() -> Self {
        Self {
            log_messages: VecDeque::with_capacity(100),
            ..Default::default()
        }
    }

    pub fn add_log(&mut self, message: String) {
        if self.log_messages.len() >= 100 {
            self.log_messages.pop_front();
        }
        self.log_messages.push_back(message);
    }
}

/// Central application state
pub struct AppState {
    /// Application settings
    pub settings: AppConfig,

    /// Save slot
    pub store: MessageStore,

    /// Card being shown
    pub card: MessageConfig,

    /// Wrapped text of `card`
    pub layout: TextLayout,

    /// Animation time
    pub clock: AnimationClock,

    /// Current screen
    pub screen: Screen,

    /// Compose form contents
    pub draft: ComposeDraft,

    /// Result of the last save, shown on the animate screen
    pub save_status: Option<SaveStatus>,

    /// Debug information
    pub debug_info: DebugInfo,

    /// Whether to show the debug panel
    pub show_debug_panel: bool,

    /// Frame time tracking for FPS
    frame_times: VecDeque<f64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: AppConfig) -> Self {
        let store = MessageStore::new(settings.save_path.clone());
        let card = MessageConfig::default();
        let layout = TextLayout::new(&card.text, settings.max_line_chars);
        let clock = AnimationClock::new(settings.target_fps);

        Self {
            settings,
            store,
            card,
            layout,
            clock,
            screen: Screen::Menu,
            draft: ComposeDraft::default(),
            save_status: None,
            debug_info: DebugInfo::new(),
            show_debug_panel: false,
            frame_times: VecDeque::with_capacity(60),
        }
    }

    fn log(&mut self, message: String) {
        debug!("{}", message);
        self.debug_info.add_log(message);
    }

    /// Update FPS calculation
    pub fn update_fps(&mut self, delta_time: f64) {
        self.frame_times.push_back(delta_time);
        if self.frame_times.len() > 60 {
            self.frame_times.pop_front();
        }

        if !self.frame_times.is_empty() {
            let avg_time: f64 =
                self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64;
            self.debug_info.fps = if avg_time > 0.0 {
                1.0 / avg_time as f32
            } else {
                0.0
            };
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.screen, Screen::Animate { .. })
    }

    /// Act on a menu selection
    pub fn dispatch(&mut self, choice: MenuChoice) {
        info!(?choice, code = choice.code(), "Menu selection");

        match choice {
            MenuChoice::Write => {
                self.draft = ComposeDraft::from_config(&self.card);
                self.screen = Screen::Compose;
            }
            MenuChoice::Read => match self.store.load() {
                Ok(saved) => {
                    self.log(format!(
                        "Loaded {:?} card saved {}",
                        saved.card.style, saved.saved_at
                    ));
                    self.save_status = None;
                    self.start_animation(saved.card, false);
                }
                Err(e) => {
                    match &e {
                        MessageCardError::NotFound(path) => {
                            info!(path = %path, "No saved message to read");
                        }
                        other => warn!("Failed to load saved message: {}", other),
                    }
                    self.log(format!("Load failed: {}", e));
                    self.screen = Screen::LoadError {
                        message: e.user_message(),
                    };
                }
            },
            MenuChoice::Exit => {
                self.screen = Screen::Exiting;
            }
        }
    }

    /// Install a freshly written card, save it and start animating
    pub fn submit_compose(&mut self, config: MessageConfig) {
        self.save_status = Some(match self.store.save(&config) {
            Ok(saved) => SaveStatus::Saved(saved.saved_at),
            Err(e) => {
                error!("Failed to save message: {}", e);
                SaveStatus::Failed(e.user_message())
            }
        });
        self.start_animation(config, true);
    }

    pub fn cancel_compose(&mut self) {
        self.screen = Screen::Menu;
    }

    fn start_animation(&mut self, card: MessageConfig, from_compose: bool) {
        self.layout = TextLayout::new(&card.text, self.settings.max_line_chars);
        self.card = card;
        self.clock.reset();
        self.screen = Screen::Animate { from_compose };
        self.log(format!(
            "Animating {:?} card ({} glyphs, {} lines)",
            self.card.style,
            self.layout.glyph_count(),
            self.layout.line_count()
        ));
    }

    /// Restart the current animation from the beginning
    pub fn replay(&mut self) {
        if self.is_animating() {
            self.clock.reset();
            self.log("Replaying animation".to_string());
        }
    }

    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    pub fn intro_duration(&self) -> f32 {
        AnimationEngine::intro_duration(&self.card, &self.layout)
    }

    /// The animation frame for the current clock time
    pub fn current_frame(&self) -> Frame {
        AnimationEngine::frame(&self.card, &self.layout, self.clock.elapsed())
    }

    /// Advance the animation clock by a frame delta.
    ///
    /// Returns to the menu once the settled card has been held for
    /// `hold_secs` (a zero hold keeps the card up until dismissed).
    pub fn tick(&mut self, delta: f32) {
        if !self.is_animating() {
            return;
        }

        self.clock.advance(delta);

        let hold = self.settings.hold_secs;
        if hold > 0.0 && self.clock.elapsed() > self.intro_duration() + hold {
            self.log("Animation finished".to_string());
            self.back_to_menu();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        AppState::new(AppConfig::default().with_save_path(dir.path().join("message.json")))
    }

    #[test]
    fn test_menu_codes() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_code(choice.code()), Some(choice));
        }
        assert_eq!(MenuChoice::Exit.code(), 0);
        assert_eq!(MenuChoice::Write.code(), 1);
        assert_eq!(MenuChoice::Read.code(), 2);
        assert_eq!(MenuChoice::from_code(3), None);
    }

    #[test]
    fn test_dispatch_write_opens_compose_with_current_card() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.card = MessageConfig::new("Old card", AnimationStyle::Zoom);

        state.dispatch(MenuChoice::Write);
        assert_eq!(state.screen, Screen::Compose);
        assert_eq!(state.draft.text, "Old card");
        assert_eq!(state.draft.style, AnimationStyle::Zoom);
    }

    #[test]
    fn test_dispatch_read_without_save_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        state.dispatch(MenuChoice::Read);
        assert_eq!(
            state.screen,
            Screen::LoadError {
                message: "No saved message found!".to_string()
            }
        );
    }

    #[test]
    fn test_dispatch_read_with_corrupt_save_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("message.json"), "{ not json").unwrap();
        let mut state = state_in(&dir);

        state.dispatch(MenuChoice::Read);
        assert!(matches!(state.screen, Screen::LoadError { .. }));
    }

    #[test]
    fn test_dispatch_read_animates_saved_card() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state
            .store
            .save(&MessageConfig::new("Saved hello", AnimationStyle::Typewriter))
            .unwrap();

        state.dispatch(MenuChoice::Read);
        assert_eq!(state.screen, Screen::Animate { from_compose: false });
        assert_eq!(state.card.text, "Saved hello");
        assert_eq!(state.card.style, AnimationStyle::Typewriter);
        assert_eq!(state.clock.elapsed(), 0.0);
    }

    #[test]
    fn test_dispatch_exit() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.dispatch(MenuChoice::Exit);
        assert_eq!(state.screen, Screen::Exiting);
    }

    #[test]
    fn test_submit_compose_saves_and_animates() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        state.submit_compose(MessageConfig::new("Congrats!", AnimationStyle::Bounce));
        assert_eq!(state.screen, Screen::Animate { from_compose: true });
        assert!(matches!(state.save_status, Some(SaveStatus::Saved(_))));
        assert_eq!(state.store.load().unwrap().card.text, "Congrats!");
    }

    #[test]
    fn test_tick_returns_to_menu_after_hold() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.settings.hold_secs = 0.5;
        state.submit_compose(MessageConfig::new("Hi", AnimationStyle::FadeIn));

        let intro = state.intro_duration();
        let mut waited = 0.0;
        while state.is_animating() && waited < intro + 2.0 {
            state.tick(0.1);
            waited += 0.1;
        }
        assert_eq!(state.screen, Screen::Menu);
        assert!(waited > intro + 0.5);
    }

    #[test]
    fn test_zero_hold_keeps_card_up() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.settings.hold_secs = 0.0;
        state.submit_compose(MessageConfig::new("Hi", AnimationStyle::Wave));

        for _ in 0..200 {
            state.tick(0.1);
        }
        assert!(state.is_animating());
    }

    #[test]
    fn test_replay_resets_clock() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.submit_compose(MessageConfig::new("Again", AnimationStyle::Zoom));
        state.tick(0.2);
        assert!(state.clock.elapsed() > 0.0);

        state.replay();
        assert_eq!(state.clock.elapsed(), 0.0);
    }

    #[test]
    fn test_draft_trims_trailing_whitespace() {
        let draft = ComposeDraft {
            text: "Hello\n\n".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validated().unwrap().text, "Hello");

        let blank = ComposeDraft::default();
        assert!(blank.validated().is_err());
    }
}
