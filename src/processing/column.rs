//! Column name resolution against the header row.

use crate::error::{ColumnSumError, ColumnSumResult};
use crate::types::Dataset;

/// Resolve `column_name` to a zero-based index by case-insensitive match against the header.
///
/// The first matching header field wins.
///
/// - Fails with [`ColumnSumError::EmptyDataset`] if there is no header row.
/// - Fails with [`ColumnSumError::ColumnNotFound`] if no header field matches.
pub fn resolve_column_index(dataset: &Dataset, column_name: &str) -> ColumnSumResult<usize> {
    let header = dataset.header().ok_or(ColumnSumError::EmptyDataset)?;
    header
        .iter()
        .position(|h| eq_ignore_case(h, column_name))
        .ok_or_else(|| ColumnSumError::ColumnNotFound {
            column: column_name.to_owned(),
        })
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
