//! Column aggregation over a parsed [`crate::types::Dataset`].
//!
//! Both operations are pure, synchronous, single-pass:
//!
//! - [`resolve_column_index()`]: case-insensitive header lookup
//! - [`sum_column()`]: sum of a column across the data rows
//!
//! ## Example
//!
//! ```rust
//! use csv_column_sum::processing::{resolve_column_index, sum_column};
//! use csv_column_sum::types::Dataset;
//!
//! let ds = Dataset::from_records([["a", "b"], ["1", "2"], ["3", "4"]]);
//! let idx = resolve_column_index(&ds, "B").unwrap();
//! assert_eq!(idx, 1);
//! assert_eq!(sum_column(&ds, idx).unwrap(), 6.0);
//! ```

pub mod column;
pub mod sum;

pub use column::resolve_column_index;
pub use sum::sum_column;
