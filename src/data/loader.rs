use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

use super::error::{LoadError, LoadResult};
use super::model::{CellValue, Dataset, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Which parser a file goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Json,
}

impl FileKind {
    /// Dispatch by extension (case-insensitive).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(FileKind::Csv),
            "json" => Ok(FileKind::Json),
            _ => Err(LoadError::UnsupportedFileType { extension: ext }),
        }
    }
}

/// Load a dataset from a file.
///
/// Supported formats:
/// * `.csv`  – header row followed by records
/// * `.json` – `[{ "col": value, ... }, ...]`, a single object, or NDJSON
pub fn load_file(path: &Path) -> Result<Dataset> {
    let kind = FileKind::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_text(kind, &text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse already-read file contents.
pub fn parse_text(kind: FileKind, text: &str) -> LoadResult<Dataset> {
    match kind {
        FileKind::Csv => parse_csv(text),
        FileKind::Json => parse_json(text),
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// The first record names the columns; every later record becomes a row.
///
/// Headers and cells are trimmed and blank lines are skipped. Short records
/// lack their trailing columns and surplus cells are dropped.
pub fn parse_csv(text: &str) -> LoadResult<Dataset> {
    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Row::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.as_str(), CellValue::Text(value.to_string()));
        }
        rows.push(row);
    }

    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        if !columns.contains(&header) {
            columns.push(header);
        }
    }

    Ok(Dataset::new(columns, rows))
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Records-oriented JSON, e.g. the output of `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "date": "2024-01-01", "sales": 120 },
///   { "date": "2024-01-02", "sales": 98 }
/// ]
/// ```
///
/// A lone object is a one-row dataset. Text that is not one JSON document
/// is retried as newline-delimited JSON.
pub fn parse_json(text: &str) -> LoadResult<Dataset> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LoadError::Empty);
    }

    match serde_json::from_str::<JsonValue>(trimmed) {
        Ok(JsonValue::Array(items)) => rows_from_json(items),
        Ok(obj @ JsonValue::Object(_)) => rows_from_json(vec![obj]),
        Ok(_) => Err(LoadError::NotTabular),
        Err(err) if !trimmed.contains('\n') => Err(err.into()),
        Err(_) => {
            let values = trimmed
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(serde_json::from_str::<JsonValue>)
                .collect::<Result<Vec<_>, _>>()?;
            rows_from_json(values)
        }
    }
}

fn rows_from_json(records: Vec<JsonValue>) -> LoadResult<Dataset> {
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.into_iter().enumerate() {
        let JsonValue::Object(obj) = rec else {
            return Err(LoadError::NotAnObject { row: i + 1 });
        };

        let mut row = Row::with_capacity(obj.len());
        for (key, val) in obj {
            row.insert(key, CellValue::from(val));
        }
        rows.push(row);
    }

    Ok(Dataset::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn csv_simple_rows() {
        let ds = parse_csv("name,score\nAda,98.5\nGrace,91\n").unwrap();

        assert_eq!(ds.columns, vec!["name", "score"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0].get("name"), Some(&text("Ada")));
        assert_eq!(ds.rows[0].get("score"), Some(&text("98.5")));
        assert_eq!(ds.rows[1].get("score"), Some(&text("91")));
    }

    #[test]
    fn csv_trims_headers_and_cells() {
        let ds = parse_csv(" a , b \r\n 1 , 2 \r\n").unwrap();
        assert_eq!(ds.columns, vec!["a", "b"]);
        assert_eq!(ds.rows[0].get("b"), Some(&text("2")));
    }

    #[test]
    fn csv_ragged_rows_are_not_validated() {
        let ds = parse_csv("a,b,c\n1,2\n3,4,5,6\n").unwrap();

        assert_eq!(ds.rows[0].get("c"), None);
        assert_eq!(ds.rows[0].keys().count(), 2);
        assert_eq!(ds.rows[1].get("c"), Some(&text("5")));
        assert_eq!(ds.rows[1].keys().count(), 3);
    }

    #[test]
    fn csv_quoted_fields_keep_embedded_commas() {
        let ds = parse_csv("city,pop\n\"Portland, OR\",650000\n").unwrap();
        assert_eq!(ds.rows[0].get("city"), Some(&text("Portland, OR")));
        assert_eq!(ds.rows[0].get("pop"), Some(&text("650000")));
    }

    #[test]
    fn csv_blank_lines_are_skipped() {
        let ds = parse_csv("a\n1\n\n2\n\n").unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn csv_header_only_is_an_empty_dataset() {
        let ds = parse_csv("a,b\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns, vec!["a", "b"]);
    }

    #[test]
    fn csv_empty_input_is_an_error() {
        assert!(matches!(parse_csv(""), Err(LoadError::Empty)));
        assert!(matches!(parse_csv("  \n \n"), Err(LoadError::Empty)));
    }

    #[test]
    fn json_array_of_objects() {
        let ds = parse_json(r#"[{"day":"mon","sales":3},{"day":"tue","sales":4.5,"extra":true}]"#)
            .unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.columns, vec!["day", "sales", "extra"]);
        assert_eq!(ds.rows[0].keys().collect::<Vec<_>>(), vec!["day", "sales"]);
        assert_eq!(ds.rows[1].get("sales").and_then(CellValue::as_number), Some(4.5));
        assert_eq!(ds.rows[1].get("extra"), Some(&CellValue::Bool(true)));
    }

    #[test]
    fn json_single_object_is_one_row() {
        let ds = parse_json(r#"{"a": 1, "b": null, "c": [1, 2]}"#).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].get("b"), Some(&CellValue::Null));
        assert!(matches!(ds.rows[0].get("c"), Some(CellValue::Nested(_))));
    }

    #[test]
    fn json_ndjson_fallback() {
        let ds = parse_json("{\"a\": 1}\n\n{\"a\": 2}\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[1].get("a").and_then(CellValue::as_number), Some(2.0));
    }

    #[test]
    fn json_rejects_non_tabular_shapes() {
        assert!(matches!(parse_json("42"), Err(LoadError::NotTabular)));
        assert!(matches!(
            parse_json(r#"[{"a": 1}, 2]"#),
            Err(LoadError::NotAnObject { row: 2 })
        ));
        assert!(matches!(parse_json("{not json"), Err(LoadError::Json(_))));
        assert!(matches!(parse_json("   "), Err(LoadError::Empty)));
    }

    #[test]
    fn json_empty_array_is_an_empty_dataset() {
        let ds = parse_json("[]").unwrap();
        assert!(ds.is_empty());
        assert!(ds.columns.is_empty());
    }

    #[test]
    fn file_kind_dispatch() {
        assert_eq!(FileKind::from_path(Path::new("a.csv")).unwrap(), FileKind::Csv);
        assert_eq!(FileKind::from_path(Path::new("B.JSON")).unwrap(), FileKind::Json);
        assert!(matches!(
            FileKind::from_path(Path::new("notes.txt")),
            Err(LoadError::UnsupportedFileType { extension }) if extension == "txt"
        ));
        assert!(FileKind::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "data_glance_loader_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "x,y\n1,2\n3,4\n").unwrap();

        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[1].get("y"), Some(&text("4")));
    }

    #[test]
    fn load_file_rejects_unsupported_before_reading() {
        let err = load_file(Path::new("/definitely/missing/file.xlsx")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedFileType { .. })
        ));
    }
}
