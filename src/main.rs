mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::PenguinDashApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is loaded exactly once; failure aborts startup.
    let dataset = data::loader::load().context("loading the penguin dataset")?;
    log::info!("Loaded {} penguin observations", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguins Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard: {e}"))
}
