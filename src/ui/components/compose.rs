//! Compose form component
//!
//! Text entry plus animation style, speed, size and color pickers.

use crate::card::types::{MAX_FONT_SIZE, MAX_MESSAGE_CHARS, MAX_SPEED, MIN_FONT_SIZE, MIN_SPEED};
use crate::card::{AnimationStyle, CardColor, MessageConfig};
use crate::ui::state::ComposeDraft;
use crate::ui::theme::Theme;
use egui::{self, Key, RichText, Vec2};

/// What the user did with the form this frame
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeOutcome {
    Pending,
    Submitted(MessageConfig),
    Cancelled,
}

/// Compose form for a new card
pub struct ComposeForm<'a> {
    draft: &'a mut ComposeDraft,
    theme: &'a Theme,
}

impl<'a> ComposeForm<'a> {
    pub fn new(draft: &'a mut ComposeDraft, theme: &'a Theme) -> Self {
        Self { draft, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) -> ComposeOutcome {
        let mut outcome = ComposeOutcome::Pending;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(self.theme.spacing);
                ui.heading("Write your message");
                ui.add_space(self.theme.spacing_sm);

                self.show_text_input(ui);
                ui.add_space(self.theme.spacing);

                self.show_style_picker(ui);
                ui.add_space(self.theme.spacing_sm);

                self.show_color_picker(ui);
                ui.add_space(self.theme.spacing_sm);

                ui.add(
                    egui::Slider::new(&mut self.draft.speed, MIN_SPEED..=MAX_SPEED)
                        .text("Speed")
                        .suffix("x")
                        .fixed_decimals(2),
                );
                ui.add(
                    egui::Slider::new(&mut self.draft.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE)
                        .text("Text size")
                        .integer(),
                );

                ui.add_space(self.theme.spacing);
                self.show_preview(ui);
                ui.add_space(self.theme.spacing);

                outcome = self.show_actions(ui);
            });

        outcome
    }

    fn show_text_input(&mut self, ui: &mut egui::Ui) {
        let text_edit = egui::TextEdit::multiline(&mut self.draft.text)
            .hint_text("Type your message...")
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .id(egui::Id::new("compose_text"));

        let response = ui.add(text_edit);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Message text")
        });

        let count = self.draft.text.chars().count();
        let color = if count > MAX_MESSAGE_CHARS {
            self.theme.error
        } else {
            self.theme.text_muted
        };
        ui.label(
            RichText::new(format!("{} / {}", count, MAX_MESSAGE_CHARS))
                .size(11.0)
                .color(color),
        );
    }

    fn show_style_picker(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Animation").strong());
        ui.horizontal_wrapped(|ui| {
            for style in AnimationStyle::ALL {
                ui.selectable_value(&mut self.draft.style, style, style.label())
                    .on_hover_text(style.description());
            }
        });
    }

    fn show_color_picker(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Color").strong());
        ui.horizontal_wrapped(|ui| {
            for color in CardColor::ALL {
                ui.selectable_value(
                    &mut self.draft.color,
                    color,
                    RichText::new(color.label()).color(color.to_color32()),
                );
            }
        });
    }

    fn show_preview(&self, ui: &mut egui::Ui) {
        let first_line = self
            .draft
            .text
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("Your message");

        egui::Frame::none()
            .fill(self.theme.card_bg)
            .stroke(egui::Stroke::new(1.0, self.theme.card_border))
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(ui.available_width(), 48.0));
                ui.label(
                    RichText::new(first_line)
                        .size(self.draft.font_size.min(32.0))
                        .monospace()
                        .color(self.draft.color.to_color32()),
                );
            });
    }

    fn show_actions(&self, ui: &mut egui::Ui) -> ComposeOutcome {
        let validated = self.draft.validated();

        if let Err(e) = &validated {
            if !self.draft.text.is_empty() {
                ui.label(RichText::new(e.user_message()).color(self.theme.error));
            }
        }

        let mut outcome = ComposeOutcome::Pending;

        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                outcome = ComposeOutcome::Cancelled;
            }

            let play = egui::Button::new(RichText::new("Play").strong())
                .fill(self.theme.primary)
                .rounding(self.theme.button_rounding);
            let response = ui
                .add_enabled(validated.is_ok(), play)
                .on_hover_text("Save and play (Ctrl+Enter)");
            if response.clicked() {
                if let Ok(config) = &validated {
                    outcome = ComposeOutcome::Submitted(config.clone());
                }
            }
        });

        if outcome == ComposeOutcome::Pending {
            let (submit, cancel) = ui.input(|i| {
                (
                    i.modifiers.command && i.key_pressed(Key::Enter),
                    i.key_pressed(Key::Escape),
                )
            });

            if cancel {
                outcome = ComposeOutcome::Cancelled;
            } else if submit {
                if let Ok(config) = validated {
                    outcome = ComposeOutcome::Submitted(config);
                }
            }
        }

        outcome
    }
}
