use std::path::PathBuf;

use eframe::egui::{self, ScrollArea, Ui};

use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DataGlanceApp {
    pub state: AppState,
}

impl DataGlanceApp {
    /// Create the app, loading `initial_file` straight away when given.
    pub fn new(config: ViewerConfig, initial_file: Option<PathBuf>) -> Self {
        let mut state = AppState::new(config);
        if let Some(path) = initial_file {
            state.load_path(&path);
        }
        Self { state }
    }
}

impl eframe::App for DataGlanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::handle_dropped_files(ctx, &mut self.state);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: preview mode + series ----
        egui::SidePanel::left("series_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: preview, statistics, chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &self.state);
        });
    }
}

fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Upload a CSV or JSON file to get started.  (File → Open… or drop a file here)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Uploaded Data Preview");
            tables::preview(ui, state, dataset);
            ui.add_space(12.0);

            ui.heading("Summary Statistics");
            tables::summary_table(ui, state);
            ui.add_space(12.0);

            ui.heading("Trends & Charts");
            plot::trend_plot(ui, state, dataset);
        });
}
