use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;
use crate::state::{AppState, PreviewMode};

const PREVIEW_BACKGROUND: Color32 = Color32::from_gray(34);

// ---------------------------------------------------------------------------
// Data preview
// ---------------------------------------------------------------------------

/// Render the first rows of the dataset, then the count of rows left out.
pub fn preview(ui: &mut Ui, state: &AppState, dataset: &Dataset) {
    match state.preview_mode {
        PreviewMode::Json => {
            egui::Frame::group(ui.style())
                .fill(PREVIEW_BACKGROUND)
                .show(ui, |ui: &mut Ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(&state.preview_text)
                            .monospace()
                            .color(Color32::WHITE),
                    );
                });
        }
        PreviewMode::Table => preview_table(ui, dataset, state.config.preview_rows),
    }

    ui.label(format!("...and {} more rows", state.remaining_rows()));
}

fn preview_table(ui: &mut Ui, dataset: &Dataset, rows: usize) {
    let head = dataset.head(rows);
    if dataset.columns.is_empty() {
        ui.label("No columns.");
        return;
    }
    if dataset.is_empty() {
        ui.label("No rows.");
        return;
    }

    ui.push_id("preview_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .columns(Column::auto().at_least(60.0), dataset.columns.len())
            .header(20.0, |mut header| {
                for col in &dataset.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(col.as_str());
                    });
                }
            })
            .body(|mut body| {
                for row in head {
                    body.row(18.0, |mut table_row| {
                        for col in &dataset.columns {
                            table_row.col(|ui: &mut Ui| {
                                // Missing cells stay blank.
                                if let Some(value) = row.get(col) {
                                    ui.label(value.to_string());
                                }
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Column / Min / Max / Mean table for every numeric column.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    if state.numeric_columns.is_empty() {
        ui.label("No numeric columns found for summary statistics.");
        return;
    }

    egui::Grid::new("summary_stats")
        .striped(true)
        .num_columns(4)
        .min_col_width(80.0)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Column");
            ui.strong("Min");
            ui.strong("Max");
            ui.strong("Mean");
            ui.end_row();

            for col in &state.numeric_columns {
                ui.label(col.as_str());
                match state.summary.get(col) {
                    Some(stat) => {
                        ui.label(stat.min.to_string());
                        ui.label(stat.max.to_string());
                        ui.label(stat.mean.to_string());
                    }
                    None => {
                        ui.label("");
                        ui.label("");
                        ui.label("");
                    }
                }
                ui.end_row();
            }
        });

    if ui.button("Copy as JSON").clicked() {
        match serde_json::to_string_pretty(&state.summary) {
            Ok(text) => ui.ctx().copy_text(text),
            Err(e) => log::warn!("Failed to serialise summary: {e}"),
        }
    }
}
