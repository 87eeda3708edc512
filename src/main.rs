use std::path::Path;

use anyhow::Context;
use avocado_analytics::app::AvocadoApp;
use avocado_analytics::state::AppState;
use avocado_analytics::{config, data};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is loaded once; failing here means the window never opens.
    let path = Path::new(config::DATA_PATH);
    let dataset = data::loader::load_file(path)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", path.display()))
        .with_context(|| format!("loading {}", path.display()))?;
    let state = AppState::new(dataset).context("dataset has no records")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(AvocadoApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {e}"))
}
