use thiserror::Error;

/// Message shown when the file extension is neither `.csv` nor `.json`.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Unsupported file type. Please upload a CSV or JSON file.";

/// Message shown for every other load failure.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse file.";

/// Convenience result type for the parsers.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error returned by the CSV/JSON parsers and the file-type dispatch.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file type '.{extension}'")]
    UnsupportedFileType { extension: String },

    #[error("file is empty")]
    Empty,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// 1-based position of the offending record.
    #[error("row {row} is not a json object")]
    NotAnObject { row: usize },

    #[error("json must be an object, an array of objects, or NDJSON")]
    NotTabular,
}

/// Map any load failure onto one of the two messages shown to the user.
pub fn user_message(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::UnsupportedFileType { .. }) => UNSUPPORTED_FILE_MESSAGE,
        _ => PARSE_FAILURE_MESSAGE,
    }
}
