use serde::Serialize;
use thiserror::Error;

/// Convenience result type for ingestion and aggregation.
pub type ColumnSumResult<T> = Result<T, ColumnSumError>;

/// Error type returned by ingestion and aggregation functions.
///
/// The taxonomy is flat: every failure aborts the request and no partial sum is ever returned.
#[derive(Debug, Error)]
pub enum ColumnSumError {
    /// The upload carried no (or an empty) file name.
    #[error("no file uploaded")]
    MissingFile,

    /// The declared file name does not end in `.csv` (case-insensitive).
    #[error("not a csv file: '{file_name}'")]
    UnsupportedFormat { file_name: String },

    /// I/O or CSV-level parse failure while reading the upload.
    #[error("error processing csv: {0}")]
    CsvProcess(#[from] csv::Error),

    /// A record does not have the header's field count.
    #[error("malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Column lookup against a dataset that has no header row.
    #[error("empty dataset: no header row to resolve columns against")]
    EmptyDataset,

    /// No header field matches the requested column name.
    #[error("no such column found: '{column}'")]
    ColumnNotFound { column: String },

    /// A field in the summed column is not a valid decimal number.
    #[error("failed to parse number at row {row} column {column}: {message} (raw='{raw}')")]
    NumberFormat {
        row: usize,
        column: usize,
        raw: String,
        message: String,
    },

    /// A row is too short to contain the summed column.
    #[error("column index out of bounds at row {row}: index {index} but row has {width} fields")]
    ColumnOutOfBounds {
        row: usize,
        index: usize,
        width: usize,
    },
}

impl From<std::io::Error> for ColumnSumError {
    fn from(err: std::io::Error) -> Self {
        Self::CsvProcess(csv::Error::from(err))
    }
}

/// Stable, transport-friendly classification of a [`ColumnSumError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingFile,
    UnsupportedFormat,
    CsvProcess,
    MalformedRow,
    EmptyDataset,
    ColumnNotFound,
    NumberFormat,
    ColumnOutOfBounds,
}

impl ColumnSumError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFile => ErrorKind::MissingFile,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::CsvProcess(_) => ErrorKind::CsvProcess,
            Self::MalformedRow { .. } => ErrorKind::MalformedRow,
            Self::EmptyDataset => ErrorKind::EmptyDataset,
            Self::ColumnNotFound { .. } => ErrorKind::ColumnNotFound,
            Self::NumberFormat { .. } => ErrorKind::NumberFormat,
            Self::ColumnOutOfBounds { .. } => ErrorKind::ColumnOutOfBounds,
        }
    }

    /// Whether this error belongs to the processing-failure class (I/O or parse) that is
    /// reported to an [`crate::ingestion::IngestionObserver`].
    pub fn is_processing_failure(&self) -> bool {
        matches!(self, Self::CsvProcess(_) | Self::MalformedRow { .. })
    }
}

/// Serializable error payload for callers that map failures onto a transport response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorResponse {
    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&ColumnSumError> for ErrorResponse {
    fn from(err: &ColumnSumError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
