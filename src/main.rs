//! Message card - write a short message and watch it animate
//!
//! Main entry point for the desktop application.

use anyhow::Result;
use eframe::egui;
use messagecard::config::AppConfig;
use messagecard::ui::MessageCardApp;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "messagecard=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting message card");

    let settings = AppConfig::discover();
    info!(
        save_path = %settings.save_path.display(),
        hold_secs = settings.hold_secs,
        target_fps = settings.target_fps,
        "Using settings"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Message Card"),
        ..Default::default()
    };

    eframe::run_native(
        "Message Card",
        options,
        Box::new(|cc| Ok(Box::new(MessageCardApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))?;

    Ok(())
}
