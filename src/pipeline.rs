//! End-to-end entrypoint: upload in, column sum out.

use std::fmt;

use serde::Serialize;

use crate::error::ColumnSumResult;
use crate::ingestion::{ingest_upload, IngestionOptions, UploadedFile};
use crate::processing::{resolve_column_index, sum_column};

/// Successful result of [`sum_uploaded_column`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSum {
    /// Column name as requested by the caller.
    pub column: String,
    /// Zero-based position of the first header field matching `column`.
    pub column_index: usize,
    /// Number of data rows summed (header excluded).
    pub rows: usize,
    /// Sum of the column.
    pub total: f64,
}

impl ColumnSum {
    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Validate and parse `upload`, resolve `column` against its header, and sum that column.
///
/// Any failure aborts the whole call; see [`crate::error::ColumnSumError`] for the taxonomy.
///
/// ```rust
/// use csv_column_sum::ingestion::{IngestionOptions, UploadedFile};
/// use csv_column_sum::pipeline::sum_uploaded_column;
///
/// # fn main() -> Result<(), csv_column_sum::ColumnSumError> {
/// let upload = UploadedFile::new("sales.csv", "Name,Amount\nfoo,10.5\nbar,4.5\n");
/// let sum = sum_uploaded_column(&upload, "amount", &IngestionOptions::default())?;
/// assert_eq!(sum.column_index, 1);
/// assert_eq!(sum.total, 15.0);
/// # Ok(())
/// # }
/// ```
pub fn sum_uploaded_column(
    upload: &UploadedFile,
    column: &str,
    options: &IngestionOptions,
) -> ColumnSumResult<ColumnSum> {
    let dataset = ingest_upload(upload, options)?;
    let column_index = resolve_column_index(&dataset, column)?;
    let total = sum_column(&dataset, column_index)?;

    Ok(ColumnSum {
        column: column.to_owned(),
        column_index,
        rows: dataset.data_row_count(),
        total,
    })
}

/// Owned request object, for callers that queue work or hand it across threads.
#[derive(Clone)]
pub struct ColumnSumRequest {
    /// The uploaded file.
    pub upload: UploadedFile,
    /// Name of the column to sum.
    pub column: String,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl fmt::Debug for ColumnSumRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSumRequest")
            .field("upload", &self.upload)
            .field("column", &self.column)
            .field("options", &self.options)
            .finish()
    }
}

impl ColumnSumRequest {
    pub fn new(upload: UploadedFile, column: impl Into<String>) -> Self {
        Self {
            upload,
            column: column.into(),
            options: IngestionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: IngestionOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the request by calling [`sum_uploaded_column`].
    pub fn run(&self) -> ColumnSumResult<ColumnSum> {
        sum_uploaded_column(&self.upload, &self.column, &self.options)
    }
}
