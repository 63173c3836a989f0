//! Gomoku GUI
//!
//! Play against the AI in a window. Settings come from `gomoku.toml` in the
//! working directory, or from the file given as the first argument.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::GameConfig;

fn main() -> Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gomoku.toml"));

    // Parse before logging is up so the filter can come from the file
    let config = if path.exists() {
        GameConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?
    } else {
        GameConfig::default()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !path.exists() {
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)?))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the window: {e}"))
}
