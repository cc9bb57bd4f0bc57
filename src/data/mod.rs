/// Data layer: core types, loading, statistics and chart series.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Row>, column names
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  stats    │   │  series   │  numeric columns, min/max/mean;
///   └──────────┘   └──────────┘  selected series → chart segments
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod series;
pub mod stats;
