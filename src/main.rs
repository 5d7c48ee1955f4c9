//! Memovox - Animated voice-memo recorder
//!
//! Main entry point for the Memovox application.

use anyhow::Result;
use eframe::egui;
use memovox::ui::MemovoxApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memovox=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Memovox voice recorder");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([360.0, 520.0])
            .with_title("Memovox"),
        ..Default::default()
    };

    eframe::run_native(
        "Memovox",
        options,
        Box::new(|cc| Ok(Box::new(MemovoxApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(())
}
