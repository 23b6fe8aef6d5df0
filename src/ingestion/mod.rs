//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_upload`] (from [`upload`]) which:
//!
//! - validates the declared file name (present, `.csv` extension)
//! - parses the content into an in-memory [`crate::types::Dataset`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The building blocks are also available under:
//! - [`csv`]
//! - [`validate`]

pub mod csv;
pub mod observability;
pub mod upload;
pub mod validate;

pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver, TracingObserver,
};
pub use upload::{ingest_upload, IngestionOptions, StorageKind, StorageMode, UploadedFile};
