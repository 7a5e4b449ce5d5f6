mod app;
mod color;
mod data;
mod options;
mod reactive;
mod render;
mod state;
mod ui;

use std::sync::Arc;

use app::PenguinExplorerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = match data::loader::load_penguins() {
        Ok(table) => {
            log::info!("Loaded {} penguin records", table.len());
            Arc::new(table)
        }
        Err(e) => {
            log::error!("Failed to load the penguin dataset: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguin Data Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinExplorerApp::new(dataset)))),
    )
}
