use std::collections::BTreeMap;
use std::path::Path;

use crate::color::SeriesColors;
use crate::config::ViewerConfig;
use crate::data::error::user_message;
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::data::series::{SeriesSelection, init_selection, visible_series};
use crate::data::stats::{SummaryStat, numeric_columns, summary_stats};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// How the first rows are rendered in the preview section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Json,
    Table,
}

/// A load failure as shown in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// One of the two user-facing messages.
    pub headline: String,
    /// Full error chain, shown on hover.
    pub detail: String,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// File name the dataset came from.
    pub source_name: Option<String>,

    /// Numeric columns of the dataset, detected on load.
    pub numeric_columns: Vec<String>,

    /// Min / max / mean per numeric column (cached).
    pub summary: BTreeMap<String, SummaryStat>,

    /// Pretty-printed JSON of the preview rows (cached).
    pub preview_text: String,

    /// Which numeric columns are drawn in the chart.
    pub series: SeriesSelection,

    pub series_colors: SeriesColors,

    pub preview_mode: PreviewMode,

    /// Error message shown in the UI.
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            dataset: None,
            source_name: None,
            numeric_columns: Vec::new(),
            summary: BTreeMap::new(),
            preview_text: String::new(),
            series: SeriesSelection::new(),
            series_colors: SeriesColors::default(),
            preview_mode: PreviewMode::default(),
            status: None,
        }
    }

    /// Ingest a newly loaded dataset and derive everything the panels show.
    pub fn set_dataset(&mut self, dataset: Dataset, source_name: Option<String>) {
        self.numeric_columns = numeric_columns(&dataset);
        self.summary = summary_stats(&dataset, &self.numeric_columns);
        log::debug!(
            "numeric columns {:?}, summary {:?}",
            self.numeric_columns,
            self.summary
        );

        self.preview_text = match dataset.preview_json(self.config.preview_rows) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to render preview: {e}");
                String::new()
            }
        };

        self.series = init_selection(&self.numeric_columns);
        self.series_colors = SeriesColors::new(&self.numeric_columns);
        self.dataset = Some(dataset);
        self.source_name = source_name;
        self.status = None;
    }

    /// Load a file from disk. On failure the previous dataset stays in place.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?} from {}",
                    dataset.len(),
                    dataset.columns,
                    path.display()
                );
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned());
                self.set_dataset(dataset, name);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status = Some(StatusMessage {
                    headline: user_message(&e).to_string(),
                    detail: format!("{e:#}"),
                });
            }
        }
    }

    /// Rows not covered by the preview.
    pub fn remaining_rows(&self) -> usize {
        self.dataset
            .as_ref()
            .map(|ds| ds.remaining_after(self.config.preview_rows))
            .unwrap_or(0)
    }

    /// Selected series in column order.
    pub fn visible_series(&self) -> Vec<&str> {
        visible_series(&self.numeric_columns, &self.series)
    }

    /// Toggle a single series on or off.
    pub fn toggle_series(&mut self, column: &str) {
        if !self.series.remove(column) {
            self.series.insert(column.to_string());
        }
    }

    pub fn select_all_series(&mut self) {
        self.series = init_selection(&self.numeric_columns);
    }

    pub fn select_no_series(&mut self) {
        self.series.clear();
    }
}
