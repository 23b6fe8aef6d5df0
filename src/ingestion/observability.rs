use std::fmt;
use std::sync::Arc;

use crate::error::ColumnSumError;

use super::upload::StorageKind;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (the underlying cause was I/O).
    Critical,
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// File name as declared by the uploader. Used for log lines only, never as a path.
    pub file_name: String,
    /// Size of the uploaded content in bytes.
    pub bytes: usize,
    /// Where the content was parsed from.
    pub storage: StorageKind,
}

/// Minimal stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of parsed rows, header included.
    pub rows: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Passed in through [`super::IngestionOptions`]; implementors record logs, metrics or alerts.
/// Only processing failures (I/O or parse) are reported; validation failures are returned to
/// the caller without notification.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &ColumnSumError) {}

    /// Called when ingestion failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ColumnSumError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ColumnSumError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ColumnSumError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        eprintln!(
            "[ingest][ok] file={} bytes={} storage={:?} rows={}",
            ctx.file_name, ctx.bytes, ctx.storage, stats.rows
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ColumnSumError) {
        eprintln!(
            "[ingest][{:?}] file={} bytes={} storage={:?} err={}",
            severity, ctx.file_name, ctx.bytes, ctx.storage, error
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ColumnSumError) {
        eprintln!(
            "[ALERT][ingest][{:?}] file={} bytes={} storage={:?} err={}",
            severity, ctx.file_name, ctx.bytes, ctx.storage, error
        );
    }
}

/// Emits ingestion events through `tracing`.
///
/// Failures are logged at `ERROR` regardless of severity; successes at `DEBUG`. Installing a
/// subscriber is left to the host application.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::debug!(
            file = %ctx.file_name,
            bytes = ctx.bytes,
            storage = ?ctx.storage,
            rows = stats.rows,
            "csv ingested"
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ColumnSumError) {
        tracing::error!(
            file = %ctx.file_name,
            bytes = ctx.bytes,
            storage = ?ctx.storage,
            severity = ?severity,
            error = %error,
            "error processing csv"
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ColumnSumError) {
        tracing::error!(
            file = %ctx.file_name,
            bytes = ctx.bytes,
            storage = ?ctx.storage,
            severity = ?severity,
            error = %error,
            alert = true,
            "error processing csv"
        );
    }
}

/// Severity for a processing failure: `Critical` when the root cause is I/O, `Error` otherwise.
pub fn severity_for_error(e: &ColumnSumError) -> IngestionSeverity {
    match e {
        ColumnSumError::CsvProcess(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        _ => IngestionSeverity::Error,
    }
}
