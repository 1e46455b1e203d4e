//! Logslice - Log-Slicing Arcade Game
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Logslice v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Logslice"),
        ..Default::default()
    };

    eframe::run_native(
        "Logslice",
        options,
        Box::new(|cc| Ok(Box::new(app::LogsliceApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
