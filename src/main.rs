mod app;
mod color;
mod state;
mod ui;

use anyhow::Context;
use app::BloomingInsightsApp;
use blooming_insights::{load_dataset, report};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = load_dataset().context("loading bundled Iris dataset")?;
    print!("{}", report::render(&dataset)?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Blooming Insights – Iris Flower Gallery",
        options,
        Box::new(move |_cc| Ok(Box::new(BloomingInsightsApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("gallery window failed: {e}"))
}
