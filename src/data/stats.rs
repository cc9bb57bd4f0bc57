use std::collections::BTreeMap;

use serde::Serialize;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Numeric column detection
// ---------------------------------------------------------------------------

/// Columns of the first row whose value coerces to a number, in row order.
///
/// Only the first row is inspected: a column that becomes numeric further
/// down is not reported.
pub fn numeric_columns(dataset: &Dataset) -> Vec<String> {
    let Some(first) = dataset.first_row() else {
        return Vec::new();
    };
    first
        .iter()
        .filter(|(_, value)| value.is_numeric())
        .map(|(name, _)| name.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Min / max / mean of one numeric column. `mean` is rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStat {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Compute a [`SummaryStat`] for each requested column.
///
/// Missing and non-numeric cells are skipped. A column without a single
/// numeric cell is left out of the result.
pub fn summary_stats(dataset: &Dataset, columns: &[String]) -> BTreeMap<String, SummaryStat> {
    let mut stats = BTreeMap::new();

    for col in columns {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;

        for value in dataset
            .rows
            .iter()
            .filter_map(|row| row.get(col))
            .filter_map(|cell| cell.as_number())
        {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }

        if count > 0 {
            let mean = round2(sum / count as f64);
            stats.insert(col.clone(), SummaryStat { min, max, mean });
        }
    }

    stats
}

/// Round the exact binary value to two decimals.
///
/// Only odd multiples of 1/8 sit exactly on a half at the second decimal;
/// those round away from zero. Everything else goes through the exact
/// decimal expansion of `{:.2}`, so `2.675` (stored as 2.67499…) gives 2.67.
pub fn round2(value: f64) -> f64 {
    if (value * 8.0).fract() == 0.0 {
        // value * 100 is exact here
        return (value * 100.0).round() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{parse_csv, parse_json};

    #[test]
    fn detects_numeric_columns_from_first_row() {
        let ds = parse_csv("date,temp,city,rain\n2024-01-01,3.5,Oslo,\n2024-01-02,4,Bergen,2\n")
            .unwrap();
        assert_eq!(numeric_columns(&ds), vec!["temp".to_string()]);
    }

    #[test]
    fn numeric_columns_follow_first_row_order() {
        let ds = parse_json(r#"[{"b": 2, "a": "1", "label": "x"}]"#).unwrap();
        assert_eq!(numeric_columns(&ds), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn empty_dataset_has_no_numeric_columns() {
        let ds = parse_csv("a,b\n").unwrap();
        assert!(numeric_columns(&ds).is_empty());
    }

    #[test]
    fn min_max_mean_of_known_values() {
        let ds = parse_csv("v\n4\n8\n15\n16\n23\n42\n").unwrap();
        let stats = summary_stats(&ds, &["v".to_string()]);

        assert_eq!(
            stats.get("v"),
            Some(&SummaryStat {
                min: 4.0,
                max: 42.0,
                mean: 18.0
            })
        );
    }

    #[test]
    fn non_numeric_and_missing_cells_are_skipped() {
        let ds = parse_csv("v,w\n1,a\nn/a\n2,b\n,c\n").unwrap();
        let stats = summary_stats(&ds, &["v".to_string()]);

        let v = stats["v"];
        assert_eq!(v.min, 1.0);
        assert_eq!(v.max, 2.0);
        assert_eq!(v.mean, 1.5);
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        let ds = parse_json(r#"[{"v": 1}, {"v": 2}, {"v": 2}]"#).unwrap();
        let stats = summary_stats(&ds, &["v".to_string()]);
        assert_eq!(stats["v"].mean, 1.67);
    }

    #[test]
    fn columns_without_numbers_are_omitted() {
        let ds = parse_csv("name\nAda\nGrace\n").unwrap();
        let stats = summary_stats(&ds, &["name".to_string(), "missing".to_string()]);
        assert!(stats.is_empty());
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.999), 2.0);
    }

    #[test]
    fn round2_uses_the_stored_value_not_the_literal() {
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
        assert_eq!(round2(-2.675), -2.67);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn mean_rounds_the_exact_average() {
        let ds = parse_csv("v\n2.675\n").unwrap();
        assert_eq!(summary_stats(&ds, &["v".to_string()])["v"].mean, 2.67);

        // 0.015 is stored just below the half
        let ds = parse_csv("v\n0.01\n0.02\n").unwrap();
        assert_eq!(summary_stats(&ds, &["v".to_string()])["v"].mean, 0.01);
    }
}
