//! `csv-column-sum` validates an uploaded CSV file, resolves a column by name, and sums the
//! column's numeric values across all data rows.
//!
//! The primary entrypoint is [`pipeline::sum_uploaded_column`]. It runs two stages in sequence:
//!
//! 1. [`ingestion::ingest_upload`]: checks that a file name was declared and carries a `.csv`
//!    extension (case-insensitive), then parses the bytes into a [`types::Dataset`] whose first
//!    row is the header row.
//! 2. [`processing::resolve_column_index`] and [`processing::sum_column`]: case-insensitive
//!    header lookup (first match wins), then an `f64` sum over every row after the header.
//!
//! Any failure aborts the call with a [`ColumnSumError`]; no partial sums are returned.
//!
//! ## Quick example
//!
//! ```rust
//! use csv_column_sum::ingestion::{IngestionOptions, UploadedFile};
//! use csv_column_sum::pipeline::sum_uploaded_column;
//!
//! # fn main() -> Result<(), csv_column_sum::ColumnSumError> {
//! let upload = UploadedFile::new("data.csv", "a,b\n1,2\n3,4\n");
//! let sum = sum_uploaded_column(&upload, "B", &IngestionOptions::default())?;
//! assert_eq!(sum.total, 6.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage
//!
//! Uploads are parsed straight from memory by default. [`ingestion::StorageMode::Spool`] writes
//! the bytes to a uniquely named temporary file first; the client-supplied file name is never
//! used as a path.
//!
//! ## Observability
//!
//! Logging is injected, not global: set [`ingestion::IngestionOptions::observer`] to any
//! [`ingestion::IngestionObserver`] (for example [`ingestion::TracingObserver`]). I/O and parse
//! failures are reported to it before they are returned.
//!
//! ## Modules
//!
//! - [`ingestion`]: upload validation, CSV parsing, observers
//! - [`processing`]: column lookup and summation
//! - [`pipeline`]: the end-to-end call and an owned request type
//! - [`types`]: the in-memory dataset
//! - [`error`]: the error taxonomy and a serializable error payload

pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{ColumnSumError, ColumnSumResult, ErrorKind, ErrorResponse};
pub use pipeline::{sum_uploaded_column, ColumnSum, ColumnSumRequest};
