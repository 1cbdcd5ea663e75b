//! Small secondary window reporting that the saved card could not be read

use crate::ui::theme::Theme;
use egui::{self, Key, RichText};

pub const NOTICE_SIZE: [f32; 2] = [400.0, 200.0];
const NOTICE_TITLE: &str = "Error";

/// Error notice shown when reading the saved card fails
pub struct LoadErrorNotice<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> LoadErrorNotice<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }

    /// Show the notice; returns true once the user dismissed it.
    ///
    /// Opens a separate native window where the backend supports it and falls
    /// back to an in-window `egui::Window` otherwise.
    pub fn show(self, ctx: &egui::Context) -> bool {
        let builder = egui::ViewportBuilder::default()
            .with_title(NOTICE_TITLE)
            .with_inner_size(NOTICE_SIZE)
            .with_resizable(false);

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("load_error_notice"),
            builder,
            |ctx, class| {
                if class == egui::ViewportClass::Embedded {
                    let mut dismissed = false;
                    egui::Window::new(NOTICE_TITLE)
                        .collapsible(false)
                        .resizable(false)
                        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                        .default_size(NOTICE_SIZE)
                        .show(ctx, |ui| {
                            dismissed = self.contents(ui);
                        });
                    dismissed
                } else {
                    let dismissed = egui::CentralPanel::default()
                        .show(ctx, |ui| self.contents(ui))
                        .inner;
                    dismissed || ctx.input(|i| i.viewport().close_requested())
                }
            },
        )
    }

    fn contents(&self, ui: &mut egui::Ui) -> bool {
        let mut dismissed = false;

        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.spacing_lg);
            ui.label(
                RichText::new(self.message)
                    .size(20.0)
                    .color(self.theme.error),
            );
            ui.add_space(self.theme.spacing_sm);
            ui.label(
                RichText::new("Press ESC to return")
                    .size(16.0)
                    .color(self.theme.text_muted),
            );
            ui.add_space(self.theme.spacing);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        dismissed || ui.input(|i| i.key_pressed(Key::Escape))
    }
}
