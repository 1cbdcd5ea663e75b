//! Main application struct and eframe integration
//!
//! This module contains the MessageCardApp that implements eframe::App and
//! drives the menu, compose, animate cycle.

use crate::config::AppConfig;
use crate::ui::components::{
    CardAction, CardView, ComposeForm, ComposeOutcome, DebugPanel, LoadErrorNotice, MenuPanel,
};
use crate::ui::state::{AppState, Screen};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, Key, RichText, SidePanel};
use std::time::{Duration, Instant};
use tracing::info;

/// Main card application
pub struct MessageCardApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Last frame time for the frame delta
    last_frame_time: Instant,
    /// Whether the app has been initialized
    initialized: bool,
}

impl MessageCardApp {
    /// Create a new card application
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppConfig) -> Self {
        let theme = Theme::from_choice(settings.theme);
        theme.apply(&cc.egui_ctx);

        Self::with_state(AppState::new(settings), theme)
    }

    /// Build the app around an existing state, without an eframe context
    pub fn with_state(state: AppState, theme: Theme) -> Self {
        Self {
            state,
            theme,
            last_frame_time: Instant::now(),
            initialized: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Initialize on the first frame
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        info!(path = %self.state.store.path().display(), "Card UI initialized");
        self.state
            .debug_info
            .add_log("Card UI initialized".to_string());
        self.initialized = true;
    }

    /// Run one frame with an explicit frame delta in seconds
    pub fn render(&mut self, ctx: &egui::Context, delta: f32) {
        self.state.update_fps(delta as f64);
        self.initialize();

        if ctx.input(|i| i.key_pressed(Key::F12)) {
            self.state.show_debug_panel = !self.state.show_debug_panel;
        }

        self.state.tick(delta);

        self.show_debug_panel(ctx);

        match self.state.screen.clone() {
            Screen::Menu => self.show_menu(ctx),
            Screen::Compose => self.show_compose(ctx),
            Screen::Animate { .. } => {
                self.show_card(ctx);
                ctx.request_repaint_after(Duration::from_secs_f32(self.state.clock.step()));
            }
            Screen::LoadError { message } => self.show_load_error(ctx, &message),
            Screen::Exiting => {
                info!("Exit requested from menu");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        let has_saved_card = self.state.store.exists();
        let choice = CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                MenuPanel::new(&self.theme)
                    .has_saved_card(has_saved_card)
                    .show(ui)
            })
            .inner;

        if let Some(choice) = choice {
            self.state.dispatch(choice);
        }
    }

    fn show_compose(&mut self, ctx: &egui::Context) {
        let outcome = CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| ComposeForm::new(&mut self.state.draft, &self.theme).show(ui))
            .inner;

        match outcome {
            ComposeOutcome::Submitted(config) => self.state.submit_compose(config),
            ComposeOutcome::Cancelled => self.state.cancel_compose(),
            ComposeOutcome::Pending => {}
        }
    }

    fn show_card(&mut self, ctx: &egui::Context) {
        let action = CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| CardView::new(&self.state, &self.theme).show(ui))
            .inner;

        match action {
            CardAction::Back => self.state.back_to_menu(),
            CardAction::Replay => self.state.replay(),
            CardAction::None => {}
        }
    }

    fn show_load_error(&mut self, ctx: &egui::Context, message: &str) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.4);
                    ui.label(
                        RichText::new("Could not open the saved card")
                            .size(16.0)
                            .color(self.theme.text_muted),
                    );
                });
            });

        if LoadErrorNotice::new(message, &self.theme).show(ctx) {
            self.state.back_to_menu();
        }
    }

    /// Show the debug panel on the side
    fn show_debug_panel(&mut self, ctx: &egui::Context) {
        if !self.state.show_debug_panel {
            return;
        }

        SidePanel::right("debug_panel")
            .resizable(true)
            .default_width(300.0)
            .min_width(250.0)
            .max_width(500.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                DebugPanel::new(&self.state, &self.theme).show(ui);
            });
    }
}

impl eframe::App for MessageCardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.render(ctx, delta);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Message card shutting down");
    }
}
