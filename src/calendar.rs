use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Date arithmetic used by the grid generator and resolver.
///
/// Every operation returns `None` when the result cannot be represented,
/// which callers surface as a date resolution failure for that cell.
pub trait Calendar: fmt::Debug {
    fn add_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate>;

    fn add_months(&self, date: NaiveDate, months: i32) -> Option<NaiveDate>;

    fn days_in_month(&self, date: NaiveDate) -> Option<u32>;

    fn weekday(&self, date: NaiveDate) -> Weekday;

    fn start_of_month(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.with_day(1)
    }

    /// Whole months from the month of `from` to the month of `to`.
    fn months_between(&self, from: NaiveDate, to: NaiveDate) -> i32 {
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
    }
}

/// Proleptic Gregorian calendar backed by chrono.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl Calendar for Gregorian {
    fn add_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate> {
        if days >= 0 {
            date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        }
    }

    fn add_months(&self, date: NaiveDate, months: i32) -> Option<NaiveDate> {
        if months >= 0 {
            date.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        }
    }

    fn days_in_month(&self, date: NaiveDate) -> Option<u32> {
        let first = date.with_day(1)?;
        let next = first.checked_add_months(Months::new(1))?;
        u32::try_from(next.signed_duration_since(first).num_days()).ok()
    }

    fn weekday(&self, date: NaiveDate) -> Weekday {
        date.weekday()
    }
}

/// Number of leading cells before day 1 when weeks start on `first_day_of_week`.
#[must_use]
pub fn leading_days(first_of_month: Weekday, first_day_of_week: Weekday) -> u32 {
    (first_of_month.num_days_from_monday() + 7 - first_day_of_week.num_days_from_monday()) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_crosses_year_backwards() {
        assert_eq!(Gregorian.add_days(date(2024, 1, 1), -1), Some(date(2023, 12, 31)));
    }

    #[test]
    fn test_add_days_overflow_is_none() {
        assert_eq!(Gregorian.add_days(NaiveDate::MAX, 1), None);
        assert_eq!(Gregorian.add_days(NaiveDate::MIN, -1), None);
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(Gregorian.add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(Gregorian.add_months(date(2024, 3, 15), -3), Some(date(2023, 12, 15)));
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(Gregorian.days_in_month(date(2024, 2, 10)), Some(29));
        assert_eq!(Gregorian.days_in_month(date(2023, 2, 10)), Some(28));
        assert_eq!(Gregorian.days_in_month(date(2023, 12, 1)), Some(31));
    }

    #[test]
    fn test_months_between() {
        assert_eq!(Gregorian.months_between(date(2023, 11, 20), date(2024, 2, 1)), 3);
        assert_eq!(Gregorian.months_between(date(2024, 2, 1), date(2024, 2, 29)), 0);
    }

    #[test]
    fn test_leading_days() {
        // 2024-01-01 is a Monday
        assert_eq!(leading_days(Weekday::Mon, Weekday::Sun), 1);
        assert_eq!(leading_days(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(leading_days(Weekday::Sun, Weekday::Mon), 6);
    }
}
