use chrono::NaiveDate;

use super::error::GridError;
use super::params::{
    ConfigurationParameters, DAYS_IN_WEEK, MAX_ROWS_PER_MONTH, OutDateCellGeneration,
};
use crate::calendar::{Calendar, leading_days};

/// Grid description of one month, derived from [`ConfigurationParameters`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthInfo {
    /// Position of the month within the configured range.
    pub index: usize,
    /// Days from the first month of the range to the 1st of this month.
    pub start_day_index: usize,
    pub number_of_days_in_month: usize,
    pub number_of_days_in_month_grid: usize,
    /// Leading cells taken from the previous month.
    pub in_dates: usize,
    /// Trailing cells taken from the following month.
    pub out_dates: usize,
    pub rows: usize,
    /// Cell count of each row-section.
    pub sections: Vec<usize>,
}

impl MonthInfo {
    /// Rows a month cell divides its height into.
    #[must_use]
    pub fn max_number_of_rows_for_full(&self, developer_rows: usize) -> usize {
        if (1..MAX_ROWS_PER_MONTH).contains(&developer_rows) {
            developer_rows
        } else {
            self.rows.max(1)
        }
    }

    /// Grid index of the 1st of the month.
    #[must_use]
    pub fn first_day_index(&self) -> usize {
        self.in_dates
    }

    /// Grid index of the last day of the month.
    #[must_use]
    pub fn last_day_index(&self) -> usize {
        self.in_dates + self.number_of_days_in_month - 1
    }
}

/// First day of the month `index` months after the range start.
pub fn month_start(params: &ConfigurationParameters, index: usize) -> Result<NaiveDate, GridError> {
    let calendar = &params.calendar;
    let months = i32::try_from(index).map_err(|_| GridError::MonthOutOfRange { index })?;
    calendar
        .start_of_month(params.start_date)
        .and_then(|start| calendar.add_months(start, months))
        .ok_or(GridError::MonthOutOfRange { index })
}

/// Number of months covered by `start_date..=end_date`.
pub fn number_of_months(params: &ConfigurationParameters) -> Result<usize, GridError> {
    let diff = params
        .calendar
        .months_between(params.start_date, params.end_date);
    usize::try_from(diff)
        .map(|d| d + 1)
        .map_err(|_| GridError::InvalidRange {
            start: params.start_date,
            end: params.end_date,
        })
}

/// Builds the grid description of every month in the configured range.
pub fn generate_months(params: &ConfigurationParameters) -> Result<Vec<MonthInfo>, GridError> {
    if params.end_date < params.start_date {
        return Err(GridError::InvalidRange {
            start: params.start_date,
            end: params.end_date,
        });
    }

    let count = number_of_months(params)?;
    let rows_per_section = params.rows_per_section();
    let mut months = Vec::with_capacity(count);
    let mut start_day_index = 0;

    for index in 0..count {
        let first = month_start(params, index)?;
        let month = build_month(params, index, count, first, start_day_index, rows_per_section)?;
        start_day_index += month.number_of_days_in_month;
        months.push(month);
    }

    tracing::debug!(
        months = months.len(),
        start = %params.start_date,
        end = %params.end_date,
        "generated month grids"
    );
    Ok(months)
}

/// Generates month `index` on its own, with `start_day_index` zero.
///
/// Resolve its cells against the month's own first day.
pub fn month_info_for(
    params: &ConfigurationParameters,
    index: usize,
) -> Result<(MonthInfo, NaiveDate), GridError> {
    let first = month_start(params, index)?;
    let single = params.single_month(first);
    let mut months = generate_months(&single)?;
    let mut month = months.pop().ok_or(GridError::MonthOutOfRange { index })?;
    month.index = index;
    Ok((month, first))
}

fn build_month(
    params: &ConfigurationParameters,
    index: usize,
    count: usize,
    first: NaiveDate,
    start_day_index: usize,
    rows_per_section: usize,
) -> Result<MonthInfo, GridError> {
    let calendar = &params.calendar;
    let days = calendar
        .days_in_month(first)
        .ok_or(GridError::MonthOutOfRange { index })? as usize;

    let in_dates = if params.generates_in_dates_for(index) {
        leading_days(calendar.weekday(first), params.first_day_of_week) as usize
    } else {
        0
    };

    let rows = match params.generate_out_dates {
        OutDateCellGeneration::TillEndOfGrid => MAX_ROWS_PER_MONTH,
        _ => (in_dates + days).div_ceil(DAYS_IN_WEEK),
    };

    let out_dates = if params.generates_out_dates_for(index, count) {
        (DAYS_IN_WEEK * rows).saturating_sub(in_dates + days)
    } else {
        0
    };

    let grid = in_dates + days + out_dates;
    let section_size = rows_per_section * DAYS_IN_WEEK;
    let mut sections = Vec::new();
    let mut remaining = grid;
    while remaining > 0 && sections.len() < MAX_ROWS_PER_MONTH {
        let cells = section_size.min(remaining);
        sections.push(cells);
        remaining -= cells;
    }

    Ok(MonthInfo {
        index,
        start_day_index,
        number_of_days_in_month: days,
        number_of_days_in_month_grid: grid,
        in_dates,
        out_dates,
        rows,
        sections,
    })
}
