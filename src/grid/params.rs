use std::rc::Rc;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, Gregorian};

/// Maximum rows a month grid can span.
pub const MAX_ROWS_PER_MONTH: usize = 6;
pub const DAYS_IN_WEEK: usize = 7;

/// Which months get leading cells from the previous month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InDateCellGeneration {
    #[default]
    ForAllMonths,
    ForFirstMonthOnly,
    Off,
}

/// How far trailing cells from the following month extend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutDateCellGeneration {
    #[default]
    TillEndOfRow,
    TillEndOfGrid,
    Off,
}

/// Setup for a calendar's month grids. Built once by the host and passed by reference.
#[derive(Debug, Clone)]
pub struct ConfigurationParameters {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_rows: usize,
    pub calendar: Rc<dyn Calendar>,
    pub generate_in_dates: InDateCellGeneration,
    pub generate_out_dates: OutDateCellGeneration,
    pub first_day_of_week: Weekday,
    pub has_strict_boundaries: bool,
}

impl ConfigurationParameters {
    /// Full six-row grids, weeks starting on Sunday, every filler cell generated.
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            number_of_rows: MAX_ROWS_PER_MONTH,
            calendar: Rc::new(Gregorian),
            generate_in_dates: InDateCellGeneration::default(),
            generate_out_dates: OutDateCellGeneration::default(),
            first_day_of_week: Weekday::Sun,
            has_strict_boundaries: true,
        }
    }

    #[must_use]
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Rc::new(calendar);
        self
    }

    #[must_use]
    pub fn with_rows(mut self, number_of_rows: usize) -> Self {
        self.number_of_rows = number_of_rows;
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    #[must_use]
    pub fn with_in_dates(mut self, mode: InDateCellGeneration) -> Self {
        self.generate_in_dates = mode;
        self
    }

    #[must_use]
    pub fn with_out_dates(mut self, mode: OutDateCellGeneration) -> Self {
        self.generate_out_dates = mode;
        self
    }

    #[must_use]
    pub fn with_strict_boundaries(mut self, strict: bool) -> Self {
        self.has_strict_boundaries = strict;
        self
    }

    /// Rows per section, falling back to a full grid when out of `1..=6`.
    #[must_use]
    pub fn rows_per_section(&self) -> usize {
        if (1..=MAX_ROWS_PER_MONTH).contains(&self.number_of_rows) {
            self.number_of_rows
        } else {
            tracing::warn!(
                rows = self.number_of_rows,
                "number_of_rows must be between 1 and 6, using 6"
            );
            MAX_ROWS_PER_MONTH
        }
    }

    /// Months scroll continuously instead of each starting on a fresh row.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        !self.has_strict_boundaries && self.rows_per_section() < MAX_ROWS_PER_MONTH
    }

    #[must_use]
    pub fn generates_in_dates_for(&self, month_index: usize) -> bool {
        let mode = if self.is_continuous() && self.generate_in_dates != InDateCellGeneration::Off
        {
            InDateCellGeneration::ForFirstMonthOnly
        } else {
            self.generate_in_dates
        };
        match mode {
            InDateCellGeneration::ForAllMonths => true,
            InDateCellGeneration::ForFirstMonthOnly => month_index == 0,
            InDateCellGeneration::Off => false,
        }
    }

    #[must_use]
    pub fn generates_out_dates_for(&self, month_index: usize, number_of_months: usize) -> bool {
        match self.generate_out_dates {
            OutDateCellGeneration::Off => false,
            _ if self.is_continuous() => month_index + 1 == number_of_months,
            _ => true,
        }
    }

    /// Same settings narrowed to a single month, as a month cell sets itself up.
    #[must_use]
    pub fn single_month(&self, month_start: NaiveDate) -> Self {
        Self {
            start_date: month_start,
            end_date: month_start,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ConfigurationParameters {
        ConfigurationParameters::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
    }

    #[test]
    fn test_rows_out_of_range_fall_back_to_six() {
        assert_eq!(params().with_rows(0).rows_per_section(), 6);
        assert_eq!(params().with_rows(9).rows_per_section(), 6);
        assert_eq!(params().with_rows(3).rows_per_section(), 3);
    }

    #[test]
    fn test_strict_boundaries_generate_everywhere() {
        let p = params().with_rows(1);
        assert!(p.generates_in_dates_for(4));
        assert!(p.generates_out_dates_for(4, 12));
    }

    #[test]
    fn test_continuous_limits_fillers_to_range_edges() {
        let p = params().with_rows(1).with_strict_boundaries(false);
        assert!(p.is_continuous());
        assert!(p.generates_in_dates_for(0));
        assert!(!p.generates_in_dates_for(1));
        assert!(!p.generates_out_dates_for(10, 12));
        assert!(p.generates_out_dates_for(11, 12));
    }

    #[test]
    fn test_non_strict_full_grid_is_not_continuous() {
        let p = params().with_strict_boundaries(false);
        assert!(!p.is_continuous());
        assert!(p.generates_in_dates_for(5));
    }

    #[test]
    fn test_first_month_only() {
        let p = params().with_in_dates(InDateCellGeneration::ForFirstMonthOnly);
        assert!(p.generates_in_dates_for(0));
        assert!(!p.generates_in_dates_for(1));
    }
}
