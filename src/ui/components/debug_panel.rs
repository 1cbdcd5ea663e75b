//! F12 side panel with the animation clock, layout and recent events

use crate::ui::state::{AppState, SaveStatus, Screen};
use crate::ui::theme::Theme;
use egui::{self, RichText, ScrollArea};

/// Debug panel component
pub struct DebugPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> DebugPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Card internals");
                    ui.label(
                        RichText::new(format!("● {:.0} fps", self.state.debug_info.fps))
                            .small()
                            .color(self.fps_color()),
                    );
                });
                ui.separator();

                egui::Grid::new("debug_stats")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for (name, value) in self.stats() {
                            ui.label(RichText::new(name).small().color(self.theme.text_muted));
                            ui.monospace(if value.is_empty() { "-".to_string() } else { value });
                            ui.end_row();
                        }
                    });

                ui.add_space(self.theme.spacing_sm);

                let log = &self.state.debug_info.log_messages;
                egui::CollapsingHeader::new(format!("Events ({})", log.len()))
                    .default_open(true)
                    .show(ui, |ui| {
                        ScrollArea::vertical()
                            .max_height(120.0)
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                if log.is_empty() {
                                    ui.weak("Nothing yet");
                                }
                                for line in log {
                                    ui.label(
                                        RichText::new(line)
                                            .monospace()
                                            .small()
                                            .color(self.theme.text_secondary),
                                    );
                                }
                            });
                    });
            });
    }

    fn stats(&self) -> [(&'static str, String); 6] {
        let state = self.state;
        [
            ("Screen", self.screen_name()),
            ("Style", format!("{:?}", state.card.style)),
            (
                "Elapsed",
                format!(
                    "{:.2}s of {:.2}s intro",
                    state.clock.elapsed(),
                    state.intro_duration()
                ),
            ),
            (
                "Layout",
                format!(
                    "{} lines, {} glyphs",
                    state.layout.line_count(),
                    state.layout.glyph_count()
                ),
            ),
            ("Save file", state.store.path().display().to_string()),
            ("Last save", self.save_status()),
        ]
    }

    fn screen_name(&self) -> String {
        match &self.state.screen {
            Screen::Menu => "Menu".to_string(),
            Screen::Compose => "Compose".to_string(),
            Screen::Animate { from_compose: true } => "Animate (new)".to_string(),
            Screen::Animate { from_compose: false } => "Animate (saved)".to_string(),
            Screen::LoadError { .. } => "Load error".to_string(),
            Screen::Exiting => "Exiting".to_string(),
        }
    }

    fn save_status(&self) -> String {
        self.state
            .save_status
            .as_ref()
            .map(SaveStatus::describe)
            .unwrap_or_default()
    }

    /// Readout color relative to the configured frame rate
    fn fps_color(&self) -> egui::Color32 {
        let target = self.state.settings.target_fps as f32;
        match self.state.debug_info.fps / target {
            r if r >= 0.9 => self.theme.success,
            r if r >= 0.5 => self.theme.warning,
            _ => self.theme.error,
        }
    }
}
