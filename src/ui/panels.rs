use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, PreviewMode};

// ---------------------------------------------------------------------------
// Left side panel – preview mode and series toggles
// ---------------------------------------------------------------------------

/// Render the left side panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("View");
    ui.separator();

    ui.strong("Preview as");
    ui.horizontal(|ui: &mut Ui| {
        ui.radio_value(&mut state.preview_mode, PreviewMode::Json, "JSON");
        ui.radio_value(&mut state.preview_mode, PreviewMode::Table, "Table");
    });
    ui.separator();

    ui.heading("Series");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }
    if state.numeric_columns.is_empty() {
        ui.label("No numeric columns.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_series();
        }
        if ui.small_button("None").clicked() {
            state.select_no_series();
        }
    });

    // Clone so the checkboxes can mutate the selection.
    let columns = state.numeric_columns.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for col in &columns {
                let mut checked = state.series.contains(col);
                let text = RichText::new(col).color(state.series_colors.color_for(col));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_series(col);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = state.source_name.as_deref().unwrap_or("dataset");
            ui.label(format!(
                "{source}: {} rows, {} numeric columns",
                ds.len(),
                state.numeric_columns.len()
            ));
            ui.separator();
        }

        if let Some(status) = &state.status {
            ui.label(RichText::new(&status.headline).color(Color32::RED))
                .on_hover_text(status.detail.as_str());
        }
    });
}

// ---------------------------------------------------------------------------
// File input
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open data file")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Picked {}", path.display());
        state.load_path(&path);
    }
}

/// Load the first file dropped onto the window, if any.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let Some(file) = dropped.first() else {
        return;
    };
    match &file.path {
        Some(path) => state.load_path(path),
        None => log::warn!("Dropped file '{}' has no path on disk", file.name),
    }
}
