//! Animated card component

use crate::animation::paint_frame;
use crate::ui::state::{AppState, SaveStatus, Screen};
use crate::ui::theme::Theme;
use egui::{self, Key, Rect, RichText, Sense, Stroke};

const CONTROL_BAR_HEIGHT: f32 = 48.0;

/// What the user asked for on the card screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    None,
    Replay,
    Back,
}

/// Draws the current animation frame on a card
pub struct CardView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> CardView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> CardAction {
        let available = ui.available_rect_before_wrap();
        let card_rect = Rect::from_min_max(
            available.min,
            egui::pos2(available.max.x, available.max.y - CONTROL_BAR_HEIGHT),
        )
        .shrink(self.theme.spacing);

        ui.painter().rect(
            card_rect,
            self.theme.card_rounding,
            self.theme.card_bg,
            Stroke::new(2.0, self.theme.card_border),
        );

        let frame = self.state.current_frame();
        paint_frame(
            &ui.painter().with_clip_rect(card_rect),
            card_rect,
            &self.state.layout,
            &frame,
            self.state.card.font_size,
        );

        let text = self.state.card.text.clone();
        ui.allocate_rect(card_rect, Sense::hover())
            .widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &text));

        let mut action = CardAction::None;

        ui.horizontal(|ui| {
            ui.add_space(self.theme.spacing);

            if ui.button("Back").clicked() {
                action = CardAction::Back;
            }
            if ui.button("Replay").clicked() {
                action = CardAction::Replay;
            }

            if let Screen::Animate { from_compose: true } = self.state.screen {
                if let Some(status) = &self.state.save_status {
                    let color = match status {
                        SaveStatus::Saved(_) => self.theme.success,
                        SaveStatus::Failed(_) => self.theme.error,
                    };
                    ui.label(RichText::new(status.describe()).size(12.0).color(color));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(self.theme.spacing);
                ui.label(
                    RichText::new("R replay, Esc back")
                        .size(11.0)
                        .color(self.theme.text_muted),
                );
            });
        });

        if action == CardAction::None {
            action = ui.input(|i| {
                if i.key_pressed(Key::Escape) {
                    CardAction::Back
                } else if i.key_pressed(Key::R) || i.key_pressed(Key::Space) {
                    CardAction::Replay
                } else {
                    CardAction::None
                }
            });
        }

        action
    }
}
