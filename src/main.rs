mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::DataGlanceApp;
use clap::Parser;
use config::Cli;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let (config, initial_file) = Cli::parse().into_parts();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([600.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Data Glance",
        options,
        Box::new(|_cc| Ok(Box::new(DataGlanceApp::new(config, initial_file)))),
    )
}
