//! Core data model types.
//!
//! An upload is parsed into a [`Dataset`]: an ordered list of string [`Row`]s whose first row is
//! the header row holding column names.

/// A single record: ordered string fields, positionally aligned with the header row.
pub type Row = Vec<String>;

/// In-memory tabular dataset, header row included.
///
/// Rows are expected to share the header's field count. Parsing enforces this; datasets built
/// with [`Dataset::new`] are taken as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// All rows in input order. `rows[0]` is the header row.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset from rows (header first).
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a dataset from string slices. Handy for tests and examples.
    pub fn from_records<R, S>(records: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            records
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// The header row, if any.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows, header excluded.
    pub fn data_row_count(&self) -> usize {
        self.data_rows().len()
    }

    /// Field count of the header row (0 for an empty dataset).
    pub fn width(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
