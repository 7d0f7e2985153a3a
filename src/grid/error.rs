//! Error types for month grid generation and date resolution.

use chrono::NaiveDate;

/// Error type for fallible grid operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The calendar could not materialize the date at a grid cell.
    ///
    /// Callers skip the cell and continue with the rest of the grid.
    #[error("could not resolve a date for grid index {index} (day offset {offset})")]
    DateResolution {
        /// Grid index that was being resolved.
        index: usize,
        /// Day offset from the start of the month.
        offset: i64,
    },

    /// The configured end date falls before the start date.
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A month index lies outside the configured range.
    #[error("month index {index} is outside the configured range")]
    MonthOutOfRange { index: usize },
}
