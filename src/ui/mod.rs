//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for the card app.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::MessageCardApp;
pub use state::{AppState, ComposeDraft, DebugInfo, MenuChoice, SaveStatus, Screen};
pub use theme::Theme;
