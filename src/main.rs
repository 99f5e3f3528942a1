//! Free Gear - pseudo-3D arcade racer
//!
//! Main entry point for the application.

use anyhow::Context;
use eframe::egui;
use freegear::storage::config::{get_config_path, load_config, save_config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Free Gear v{}", env!("CARGO_PKG_VERSION"));

    let first_run = !get_config_path().exists();
    let config = load_config().context("failed to load game configuration")?;
    if first_run {
        match save_config(&config) {
            Ok(()) => tracing::info!(path = %get_config_path().display(), "wrote default configuration"),
            Err(e) => tracing::warn!(error = %e, "could not write default configuration"),
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Free Gear"),
        ..Default::default()
    };

    eframe::run_native(
        "Free Gear",
        options,
        Box::new(move |cc| Ok(Box::new(app::FreeGearApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
