//! Month grid generation and grid-index to date resolution.

mod error;
mod month;
mod params;
mod resolve;

pub use error::GridError;
pub use month::{MonthInfo, generate_months, month_info_for, month_start, number_of_months};
pub use params::{
    ConfigurationParameters, DAYS_IN_WEEK, InDateCellGeneration, MAX_ROWS_PER_MONTH,
    OutDateCellGeneration,
};
pub use resolve::{DateBoundary, DateOwner, ResolvedDate, resolve, resolve_all, resolve_with_owner};

impl ConfigurationParameters {
    /// Boundary spanning the first through last day of the configured months.
    pub fn boundary(&self) -> Result<DateBoundary, GridError> {
        let count = number_of_months(self)?;
        let first = month_start(self, 0)?;
        let last = month_start(self, count)?
            .pred_opt()
            .ok_or(GridError::MonthOutOfRange { index: count })?;
        Ok(DateBoundary { first, last })
    }
}
