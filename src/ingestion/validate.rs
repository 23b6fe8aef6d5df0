//! Upload validation: presence and file-type checks.
//!
//! Both checks run before any bytes are read.

use crate::error::{ColumnSumError, ColumnSumResult};

/// Extension (without the dot) required on the declared file name.
pub const CSV_EXTENSION: &str = "csv";

/// Fail with [`ColumnSumError::MissingFile`] if no file name was declared.
///
/// Returns the declared name on success.
pub fn check_file_uploaded(file_name: Option<&str>) -> ColumnSumResult<&str> {
    match file_name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ColumnSumError::MissingFile),
    }
}

/// Fail with [`ColumnSumError::UnsupportedFormat`] unless the name ends in `.csv` (any case).
pub fn check_file_extension(file_name: &str) -> ColumnSumResult<()> {
    if file_extension(file_name).eq_ignore_ascii_case(CSV_EXTENSION) {
        Ok(())
    } else {
        Err(ColumnSumError::UnsupportedFormat {
            file_name: file_name.to_owned(),
        })
    }
}

/// Suffix after the last `.` of the final path component, or `""` if there is none.
///
/// Both `/` and `\` count as separators since the name comes from an arbitrary client.
pub fn file_extension(file_name: &str) -> &str {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    base.rsplit_once('.').map_or("", |(_, ext)| ext)
}
