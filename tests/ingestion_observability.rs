use std::sync::{Arc, Mutex};

use csv_column_sum::ingestion::{
    ingest_upload, CompositeObserver, IngestionContext, IngestionObserver, IngestionOptions,
    IngestionSeverity, IngestionStats, StorageMode, TracingObserver, UploadedFile,
};
use csv_column_sum::ColumnSumError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push(stats.rows);
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ColumnSumError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ColumnSumError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn opts_with(obs: Arc<RecordingObserver>) -> IngestionOptions {
    IngestionOptions {
        observer: Some(obs),
        alert_at_or_above: IngestionSeverity::Critical,
        ..Default::default()
    }
}

#[test]
fn observer_receives_success_with_row_count() {
    let obs = Arc::new(RecordingObserver::default());
    ingest_upload(&UploadedFile::new("a.csv", "a\n1\n2\n"), &opts_with(obs.clone())).unwrap();

    assert_eq!(*obs.successes.lock().unwrap(), vec![3]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_without_alert_for_parse_error() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = ingest_upload(&UploadedFile::new("a.csv", "a,b\n1\n"), &opts_with(obs.clone())).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        storage: StorageMode::Spool {
            dir: std::env::temp_dir().join("csv-column-sum-missing-dir/inner"),
        },
        ..opts_with(obs.clone())
    };

    let _ = ingest_upload(&UploadedFile::new("a.csv", "a\n1\n"), &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Critical]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![IngestionSeverity::Critical]);
}

#[test]
fn validation_failures_are_not_reported() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = opts_with(obs.clone());

    let _ = ingest_upload(&UploadedFile::unnamed("a\n1\n"), &opts).unwrap_err();
    let _ = ingest_upload(&UploadedFile::new("a.json", "a\n1\n"), &opts).unwrap_err();

    assert!(obs.failures.lock().unwrap().is_empty());
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn IngestionObserver>> = vec![a.clone(), b.clone(), Arc::new(TracingObserver)];
    let composite = CompositeObserver::new(observers);
    let opts = IngestionOptions {
        observer: Some(Arc::new(composite)),
        alert_at_or_above: IngestionSeverity::Error,
        ..Default::default()
    };

    let _ = ingest_upload(&UploadedFile::new("a.csv", "a,b\n1\n"), &opts).unwrap_err();

    for obs in [&a, &b] {
        assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Error]);
        assert_eq!(*obs.alerts.lock().unwrap(), vec![IngestionSeverity::Error]);
    }
}
