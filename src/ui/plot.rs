use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};

use crate::data::model::Dataset;
use crate::data::series::{axis_labels, trend_segments};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trend chart
// ---------------------------------------------------------------------------

/// Line chart of every visible numeric column over the leading rows.
pub fn trend_plot(ui: &mut Ui, state: &AppState, dataset: &Dataset) {
    if state.numeric_columns.is_empty() {
        ui.label("No numeric columns to plot trends.");
        return;
    }

    let limit = state.config.chart_rows;
    let labels = axis_labels(dataset, limit);
    let x_label = dataset.category_column().unwrap_or("row").to_string();

    Plot::new("trend_plot")
        .legend(Legend::default())
        .height(state.config.chart_height)
        .x_axis_label(x_label)
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for col in state.visible_series() {
                let color = state.series_colors.color_for(col);

                // One line per unbroken run; a shared name merges them in the legend.
                for segment in trend_segments(dataset, col, limit) {
                    let points: PlotPoints = segment.into_iter().collect();
                    let line = Line::new(points).name(col).color(color).width(1.5);
                    plot_ui.line(line);
                }
            }
        });
}

/// Label for an axis mark: only whole row indices inside the data get one.
fn category_label(labels: &[String], value: f64) -> String {
    if value < 0.0 || value.fract() != 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}
