use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const DEFAULT_CHART_ROWS: usize = 50;
pub const DEFAULT_CHART_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "data-glance", version, about = "Preview, summarise and chart CSV or JSON files")]
pub struct Cli {
    /// CSV or JSON file to open on startup.
    pub file: Option<PathBuf>,

    /// Rows shown in the data preview.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS, value_parser = parse_row_count)]
    pub preview_rows: usize,

    /// Leading rows plotted in the trend chart.
    #[arg(long, default_value_t = DEFAULT_CHART_ROWS, value_parser = parse_row_count)]
    pub chart_rows: usize,

    /// Chart height in logical pixels.
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT, value_parser = parse_chart_height)]
    pub chart_height: f32,
}

fn parse_row_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_chart_height(s: &str) -> Result<f32, String> {
    match s.parse::<f32>() {
        Ok(h) if h.is_finite() && h > 0.0 => Ok(h),
        Ok(_) => Err("must be a finite, positive number of pixels".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Display settings carried by the application state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub preview_rows: usize,
    pub chart_rows: usize,
    pub chart_height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            chart_rows: DEFAULT_CHART_ROWS,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl Cli {
    /// Split into the viewer settings and the optional startup file.
    pub fn into_parts(self) -> (ViewerConfig, Option<PathBuf>) {
        let config = ViewerConfig {
            preview_rows: self.preview_rows,
            chart_rows: self.chart_rows,
            chart_height: self.chart_height,
        };
        (config, self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer_config() {
        let cli = Cli::try_parse_from(["data-glance"]).unwrap();
        let (config, file) = cli.into_parts();

        assert_eq!(config, ViewerConfig::default());
        assert!(file.is_none());
    }

    #[test]
    fn accepts_file_and_overrides() {
        let cli = Cli::try_parse_from([
            "data-glance",
            "sales.csv",
            "--preview-rows",
            "10",
            "--chart-rows",
            "200",
        ])
        .unwrap();
        let (config, file) = cli.into_parts();

        assert_eq!(file, Some(PathBuf::from("sales.csv")));
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.chart_rows, 200);
    }

    #[test]
    fn rejects_zero_rows() {
        assert!(Cli::try_parse_from(["data-glance", "--chart-rows", "0"]).is_err());
        assert!(Cli::try_parse_from(["data-glance", "--preview-rows", "x"]).is_err());
    }

    #[test]
    fn rejects_degenerate_chart_height() {
        for bad in ["0", "-10", "nan", "inf"] {
            assert!(
                Cli::try_parse_from(["data-glance", "--chart-height", bad]).is_err(),
                "accepted chart height {bad}"
            );
        }

        let cli = Cli::try_parse_from(["data-glance", "--chart-height", "420.5"]).unwrap();
        assert_eq!(cli.chart_height, 420.5);
    }
}
