//! Upload ingestion entrypoint.
//!
//! Most callers should use [`ingest_upload`], which validates an [`UploadedFile`] and parses it
//! into an in-memory [`crate::types::Dataset`].
//!
//! - The declared file name is checked (present, `.csv` extension) before any bytes are read.
//! - The content is parsed from memory unless [`IngestionOptions::storage`] asks for a spool
//!   file. Spool files get generated names; the declared name never becomes a path.
//! - If an [`super::observability::IngestionObserver`] is provided, success and processing
//!   failures (I/O or parse) are reported to it.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ColumnSumError, ColumnSumResult};
use crate::types::Dataset;

use super::csv;
use super::observability::{
    severity_for_error, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
};
use super::validate::{check_file_extension, check_file_uploaded};

/// A file as received from an upload transport.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied file name. Untrusted.
    pub file_name: Option<String>,
    /// Raw uploaded bytes.
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            content: content.into(),
        }
    }

    /// An upload whose transport supplied no file name at all.
    pub fn unnamed(content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: None,
            content: content.into(),
        }
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("content_len", &self.content.len())
            .finish()
    }
}

/// Where upload content is parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Parse straight from the uploaded bytes.
    #[default]
    InMemory,
    /// Write the bytes to a uniquely named temporary file in `dir`, then parse that file.
    ///
    /// The file is removed once parsing finishes, successfully or not.
    Spool { dir: PathBuf },
}

impl StorageMode {
    /// Spool into the system temporary directory.
    pub fn spool_in_temp_dir() -> Self {
        Self::Spool {
            dir: std::env::temp_dir(),
        }
    }

    pub fn kind(&self) -> StorageKind {
        match self {
            Self::InMemory => StorageKind::InMemory,
            Self::Spool { .. } => StorageKind::Spool,
        }
    }
}

/// Fieldless view of [`StorageMode`] for observer context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    InMemory,
    Spool,
}

/// Options controlling upload ingestion.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Where the content is parsed from.
    pub storage: StorageMode,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("storage", &self.storage)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            storage: StorageMode::default(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Validate and parse an upload.
///
/// Validation order is fixed and fail-fast:
///
/// 1. missing or empty file name → [`ColumnSumError::MissingFile`]
/// 2. extension other than `csv` → [`ColumnSumError::UnsupportedFormat`]
///
/// Neither failure touches the content or the observer. After validation the content is parsed
/// (see [`StorageMode`]); I/O and parse failures come back as [`ColumnSumError::CsvProcess`] or
/// [`ColumnSumError::MalformedRow`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on processing failure, with a computed severity
/// - `on_alert` on processing failure when the severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```rust
/// use csv_column_sum::ingestion::{ingest_upload, IngestionOptions, UploadedFile};
///
/// # fn main() -> Result<(), csv_column_sum::ColumnSumError> {
/// let upload = UploadedFile::new("sales.csv", "Name,Amount\nfoo,10.5\nbar,4.5\n");
/// let ds = ingest_upload(&upload, &IngestionOptions::default())?;
/// assert_eq!(ds.data_row_count(), 2);
/// # Ok(())
/// # }
/// ```
///
/// ## Logging through `tracing`
///
/// ```rust
/// use std::sync::Arc;
///
/// use csv_column_sum::ingestion::{ingest_upload, IngestionOptions, TracingObserver, UploadedFile};
///
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
///
/// // Ragged rows are a processing failure and get logged at error level.
/// let upload = UploadedFile::new("bad.csv", "a,b\n1\n");
/// assert!(ingest_upload(&upload, &opts).is_err());
/// ```
pub fn ingest_upload(upload: &UploadedFile, options: &IngestionOptions) -> ColumnSumResult<Dataset> {
    let file_name = check_file_uploaded(upload.file_name.as_deref())?;
    check_file_extension(file_name)?;

    let ctx = IngestionContext {
        file_name: file_name.to_owned(),
        bytes: upload.content.len(),
        storage: options.storage.kind(),
    };

    let result = match &options.storage {
        StorageMode::InMemory => csv::parse_csv_bytes(&upload.content),
        StorageMode::Spool { dir } => spool_and_parse(dir, &upload.content),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(&ctx, IngestionStats { rows: ds.row_count() }),
            Err(e) if e.is_processing_failure() => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
            Err(_) => {}
        }
    }

    result
}

fn spool_and_parse(dir: &Path, content: &[u8]) -> ColumnSumResult<Dataset> {
    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(".csv")
        .tempfile_in(dir)?;
    file.write_all(content)?;
    file.flush()?;

    let ds = csv::ingest_csv_from_path(file.path());
    // Surface removal failures only when parsing itself succeeded.
    let closed = file.close().map_err(ColumnSumError::from);
    let ds = ds?;
    closed?;
    Ok(ds)
}
