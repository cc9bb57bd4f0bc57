use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Series selection: which numeric columns are drawn in the trend chart
// ---------------------------------------------------------------------------

/// Names of the numeric columns currently plotted.
/// A column absent from the set is hidden.
pub type SeriesSelection = BTreeSet<String>;

/// Start with every numeric column visible.
pub fn init_selection(numeric_columns: &[String]) -> SeriesSelection {
    numeric_columns.iter().cloned().collect()
}

/// Selected columns in their column order (not the set's sorted order).
pub fn visible_series<'a>(
    numeric_columns: &'a [String],
    selection: &SeriesSelection,
) -> Vec<&'a str> {
    numeric_columns
        .iter()
        .filter(|col| selection.contains(col.as_str()))
        .map(String::as_str)
        .collect()
}

// ---------------------------------------------------------------------------
// Chart geometry
// ---------------------------------------------------------------------------

/// `[row_index, value]` points of `column` over the first `limit` rows.
///
/// The points are split into runs wherever a cell is missing or not numeric,
/// so the chart leaves a gap instead of bridging it.
pub fn trend_segments(dataset: &Dataset, column: &str, limit: usize) -> Vec<Vec<[f64; 2]>> {
    let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (idx, row) in dataset.head(limit).iter().enumerate() {
        match row.get(column).and_then(|cell| cell.as_number()) {
            Some(value) => current.push([idx as f64, value]),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// X-axis labels: the category column's value for each of the first `limit` rows.
///
/// Rows without that column get an empty label.
pub fn axis_labels(dataset: &Dataset, limit: usize) -> Vec<String> {
    let Some(category) = dataset.category_column() else {
        return Vec::new();
    };
    dataset
        .head(limit)
        .iter()
        .map(|row| row.get(category).map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{parse_csv, parse_json};

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn visible_series_keep_column_order() {
        let numeric = cols(&["zeta", "alpha", "mid"]);
        let mut selection = init_selection(&numeric);
        selection.remove("mid");

        assert_eq!(visible_series(&numeric, &selection), vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_selection_hides_everything() {
        let numeric = cols(&["a"]);
        assert!(visible_series(&numeric, &SeriesSelection::new()).is_empty());
    }

    #[test]
    fn segments_break_on_gaps() {
        let ds = parse_csv("t,v\n0,1\n1,2\n2,n/a\n3\n4,5\n").unwrap();
        let segments = trend_segments(&ds, "v", 50);

        assert_eq!(
            segments,
            vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[4.0, 5.0]]]
        );
    }

    #[test]
    fn segments_respect_row_limit() {
        let ds = parse_csv("v\n1\n2\n3\n4\n").unwrap();
        let segments = trend_segments(&ds, "v", 2);
        assert_eq!(segments, vec![vec![[0.0, 1.0], [1.0, 2.0]]]);
    }

    #[test]
    fn unknown_column_has_no_segments() {
        let ds = parse_csv("v\n1\n").unwrap();
        assert!(trend_segments(&ds, "nope", 50).is_empty());
    }

    #[test]
    fn axis_labels_use_first_column_of_first_row() {
        let ds = parse_json(r#"[{"day": "mon", "v": 1}, {"v": 2}, {"day": 3, "v": 4}]"#).unwrap();
        assert_eq!(axis_labels(&ds, 50), vec!["mon", "", "3"]);
        assert_eq!(axis_labels(&ds, 1), vec!["mon"]);
    }
}
