//! CSV parsing into a [`Dataset`].

use std::path::Path;

use crate::error::{ColumnSumError, ColumnSumResult};
use crate::types::{Dataset, Row};

const BOM: char = '\u{feff}';

/// Parse CSV held in memory.
pub fn parse_csv_bytes(bytes: &[u8]) -> ColumnSumResult<Dataset> {
    let mut rdr = reader_builder().from_reader(bytes);
    ingest_csv_from_reader(&mut rdr)
}

/// Parse a CSV file on disk.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> ColumnSumResult<Dataset> {
    let mut rdr = reader_builder().from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Parse CSV from an existing reader.
///
/// Rules:
///
/// - The first record is the header row and is kept as `rows[0]`.
/// - Every record must have the header's field count.
/// - Fields are kept verbatim (no trimming); a leading BOM on the first header field is dropped.
///
/// The reader should be built with `has_headers(false)` and `flexible(true)` (see
/// [`reader_builder`]); otherwise the header is consumed by the reader or width mismatches
/// surface as a generic CSV error instead of [`ColumnSumError::MalformedRow`].
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ColumnSumResult<Dataset> {
    let mut rows: Vec<Row> = Vec::new();
    let mut expected: Option<usize> = None;

    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let mut row: Row = record.iter().map(str::to_owned).collect();

        match expected {
            None => {
                if let Some(first) = row.first_mut() {
                    if first.starts_with(BOM) {
                        first.remove(0);
                    }
                }
                expected = Some(row.len());
            }
            Some(width) if row.len() != width => {
                return Err(ColumnSumError::MalformedRow {
                    // 1-based, header is row 1.
                    row: idx + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Ok(Dataset::new(rows))
}

/// Reader configuration used by every entry point in this module.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true);
    builder
}
