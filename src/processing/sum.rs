//! Column summation over the data rows of a [`crate::types::Dataset`].

use crate::error::{ColumnSumError, ColumnSumResult};
use crate::types::Dataset;

/// Sum the numeric values at `column_index` across all data rows (header excluded).
///
/// - Rows are summed in order with plain `f64` addition.
/// - Each field is trimmed and parsed with standard float literal rules. An empty or
///   non-numeric field fails with [`ColumnSumError::NumberFormat`]; no partial sum is returned.
/// - A row too short to hold `column_index` fails with [`ColumnSumError::ColumnOutOfBounds`].
/// - A dataset with no data rows sums to `0.0`.
pub fn sum_column(dataset: &Dataset, column_index: usize) -> ColumnSumResult<f64> {
    dataset
        .data_rows()
        .iter()
        .enumerate()
        .try_fold(0.0_f64, |acc, (row_idx0, row)| -> ColumnSumResult<f64> {
            // 1-based, +1 again because the header is row 1.
            let user_row = row_idx0 + 2;
            let raw = row.get(column_index).ok_or(ColumnSumError::ColumnOutOfBounds {
                row: user_row,
                index: column_index,
                width: row.len(),
            })?;
            Ok(acc + parse_number(user_row, column_index, raw)?)
        })
}

fn parse_number(row: usize, column: usize, raw: &str) -> ColumnSumResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ColumnSumError::NumberFormat {
            row,
            column,
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::sum_column;
    use crate::error::ColumnSumError;
    use crate::types::Dataset;

    #[test]
    fn header_row_is_excluded() {
        // A numeric header would change the total if it were summed.
        let ds = Dataset::from_records([["100", "200"], ["1", "2"], ["3", "4"]]);
        assert_eq!(sum_column(&ds, 1).unwrap(), 6.0);
    }

    #[test]
    fn accepts_signs_exponents_and_surrounding_whitespace() {
        let ds = Dataset::from_records([["v"], [" -1.5 "], ["2e1"], ["+0.5"]]);
        assert_eq!(sum_column(&ds, 0).unwrap(), 19.0);
    }

    #[test]
    fn header_only_and_empty_datasets_sum_to_zero() {
        assert_eq!(sum_column(&Dataset::from_records([["a"]]), 0).unwrap(), 0.0);
        assert_eq!(sum_column(&Dataset::default(), 0).unwrap(), 0.0);
    }

    #[test]
    fn non_numeric_field_fails_without_partial_sum() {
        let ds = Dataset::from_records([["a"], ["1"], ["x"], ["2"]]);
        match sum_column(&ds, 0).unwrap_err() {
            ColumnSumError::NumberFormat { row, column, raw, .. } => {
                assert_eq!((row, column, raw.as_str()), (3, 0, "x"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_field_is_not_a_number() {
        let ds = Dataset::from_records([["a"], [""]]);
        assert!(matches!(
            sum_column(&ds, 0),
            Err(ColumnSumError::NumberFormat { .. })
        ));
    }

    #[test]
    fn short_row_is_out_of_bounds() {
        let ds = Dataset::new(vec![
            vec!["a".into(), "b".into()],
            vec!["1".into(), "2".into()],
            vec!["3".into()],
        ]);
        match sum_column(&ds, 1).unwrap_err() {
            ColumnSumError::ColumnOutOfBounds { row, index, width } => {
                assert_eq!((row, index, width), (3, 1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
