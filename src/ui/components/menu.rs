//! Main menu component
//!
//! Offers write, read and exit, and reports which one was picked.

use crate::ui::state::MenuChoice;
use crate::ui::theme::Theme;
use egui::{self, Key, RichText, Vec2};

const BUTTON_SIZE: Vec2 = Vec2::new(260.0, 44.0);

/// Main menu
pub struct MenuPanel<'a> {
    theme: &'a Theme,
    has_saved_card: bool,
}

impl<'a> MenuPanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            has_saved_card: true,
        }
    }

    /// Dim the read button hint when nothing has been saved yet
    pub fn has_saved_card(mut self, has_saved_card: bool) -> Self {
        self.has_saved_card = has_saved_card;
        self
    }

    /// Show the menu; returns the choice made this frame, if any
    pub fn show(self, ui: &mut egui::Ui) -> Option<MenuChoice> {
        let mut choice = None;

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);

            ui.label(
                RichText::new("Message Card")
                    .size(36.0)
                    .strong()
                    .color(self.theme.primary),
            );
            ui.label(
                RichText::new("Write a message and watch it come to life")
                    .size(14.0)
                    .color(self.theme.text_muted),
            );

            ui.add_space(self.theme.spacing_lg);

            for option in MenuChoice::ALL {
                let hint = match option {
                    MenuChoice::Write => "1",
                    MenuChoice::Read => "2",
                    MenuChoice::Exit => "Esc",
                };

                let button = egui::Button::new(RichText::new(option.label()).size(16.0))
                    .min_size(BUTTON_SIZE)
                    .rounding(self.theme.button_rounding);

                let response = ui.add(button).on_hover_text(format!("Shortcut: {}", hint));
                if response.clicked() {
                    choice = Some(option);
                }

                if option == MenuChoice::Read && !self.has_saved_card {
                    ui.label(
                        RichText::new("Nothing saved yet")
                            .size(11.0)
                            .italics()
                            .color(self.theme.text_muted),
                    );
                }

                ui.add_space(self.theme.spacing_sm);
            }
        });

        choice.or_else(|| Self::shortcut(ui))
    }

    fn shortcut(ui: &egui::Ui) -> Option<MenuChoice> {
        ui.input(|i| {
            if i.key_pressed(Key::Num1) {
                Some(MenuChoice::Write)
            } else if i.key_pressed(Key::Num2) {
                Some(MenuChoice::Read)
            } else if i.key_pressed(Key::Escape) {
                Some(MenuChoice::Exit)
            } else {
                None
            }
        })
    }
}
