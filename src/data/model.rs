use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Number, Value as JsonValue};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as it came out of the source file.
///
/// CSV cells are always `Text`; the other variants only come from JSON.
/// Nothing is coerced at load time, see [`CellValue::as_number`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// JSON number kept exactly as written in the file.
    Number(Number),
    Bool(bool),
    /// JSON array or object.
    Nested(JsonValue),
    Null,
}

impl CellValue {
    /// Try to interpret the cell as a finite number.
    ///
    /// Text is trimmed first; empty text, `NaN` and infinities are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(n) => n.as_f64()?,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            CellValue::Bool(_) | CellValue::Nested(_) | CellValue::Null => return None,
        };
        value.is_finite().then_some(value)
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

impl From<JsonValue> for CellValue {
    fn from(val: JsonValue) -> Self {
        match val {
            JsonValue::String(s) => CellValue::Text(s),
            JsonValue::Number(n) => CellValue::Number(n),
            JsonValue::Bool(b) => CellValue::Bool(b),
            JsonValue::Null => CellValue::Null,
            nested @ (JsonValue::Array(_) | JsonValue::Object(_)) => CellValue::Nested(nested),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Nested(v) => write!(f, "{v}"),
            CellValue::Null => write!(f, "null"),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => n.serialize(serializer),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Nested(v) => v.serialize(serializer),
            CellValue::Null => serializer.serialize_unit(),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – ordered column → cell mapping
// ---------------------------------------------------------------------------

/// One record of the dataset.
///
/// Keys keep the order they were first inserted in, which is the order they
/// appear in the file. Rows are narrow, so lookups are a linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn with_capacity(capacity: usize) -> Self {
        Row {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Insert a cell. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows of a loaded file plus the column names seen while loading.
///
/// Rows are not checked against `columns`: a ragged CSV line or a JSON object
/// with fewer keys simply lacks those cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Known column names in first-seen order.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { columns, rows }
    }

    /// Build a dataset whose columns are the union of all row keys.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.to_string());
                }
            }
        }
        Dataset { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// The first key of the first row, used as the chart's category axis.
    pub fn category_column(&self) -> Option<&str> {
        self.first_row().and_then(|row| row.keys().next())
    }

    /// The first `n` rows (or fewer).
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Number of rows left over after showing `n`.
    pub fn remaining_after(&self, n: usize) -> usize {
        self.rows.len().saturating_sub(n)
    }

    /// Pretty-printed JSON array of the first `n` rows.
    pub fn preview_json(&self, n: usize) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.head(n))
    }
}
