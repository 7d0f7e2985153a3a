use chrono::NaiveDate;

use super::error::GridError;
use super::month::MonthInfo;
use crate::calendar::Calendar;

/// Which month a grid cell's date belongs to, relative to the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOwner {
    ThisMonth,
    PreviousMonthWithinBoundary,
    PreviousMonthOutsideBoundary,
    FollowingMonthWithinBoundary,
    FollowingMonthOutsideBoundary,
}

/// Inclusive date range a calendar is configured to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBoundary {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateBoundary {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub owner: DateOwner,
}

impl ResolvedDate {
    #[must_use]
    pub fn is_within_month(&self) -> bool {
        self.owner == DateOwner::ThisMonth
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    InMonth,
    Leading,
    Trailing,
}

fn locate(grid_index: usize, month: &MonthInfo) -> Option<(Position, i64)> {
    let index = i64::try_from(grid_index).ok()?;
    let in_dates = i64::try_from(month.in_dates).ok()?;
    let start = i64::try_from(month.start_day_index).ok()?;

    if grid_index >= month.in_dates
        && grid_index < month.number_of_days_in_month.saturating_add(month.in_dates)
    {
        let offset = start.checked_add(index)?.checked_sub(in_dates)?;
        Some((Position::InMonth, offset))
    } else if grid_index < month.in_dates {
        let offset = index.checked_sub(in_dates)?.checked_add(start)?;
        Some((Position::Leading, offset))
    } else {
        // Only reached by out-dates; the in-month bound covers every day of the month.
        let offset = start.checked_sub(in_dates)?.checked_add(index)?;
        Some((Position::Trailing, offset))
    }
}

/// Resolves the date shown at `grid_index` of `month`.
///
/// `start_of_month` is the day `month.start_day_index` counts from: the first
/// day of the range's first month, or the month's own first day when it was
/// generated standalone.
pub fn resolve(
    grid_index: usize,
    month: &MonthInfo,
    start_of_month: NaiveDate,
    calendar: &(impl Calendar + ?Sized),
) -> Result<ResolvedDate, GridError> {
    // An offset past i64 cannot name a day any calendar can produce.
    let (position, offset) = locate(grid_index, month).ok_or(GridError::DateResolution {
        index: grid_index,
        offset: i64::MAX,
    })?;
    let date = calendar
        .add_days(start_of_month, offset)
        .ok_or(GridError::DateResolution {
            index: grid_index,
            offset,
        })?;

    let owner = match position {
        Position::InMonth => DateOwner::ThisMonth,
        Position::Leading => DateOwner::PreviousMonthWithinBoundary,
        Position::Trailing => DateOwner::FollowingMonthWithinBoundary,
    };
    Ok(ResolvedDate { date, owner })
}

/// Like [`resolve`], classifying filler days against the calendar's boundary.
pub fn resolve_with_owner(
    grid_index: usize,
    month: &MonthInfo,
    start_of_month: NaiveDate,
    calendar: &(impl Calendar + ?Sized),
    boundary: &DateBoundary,
) -> Result<ResolvedDate, GridError> {
    let mut resolved = resolve(grid_index, month, start_of_month, calendar)?;
    if !boundary.contains(resolved.date) {
        resolved.owner = match resolved.owner {
            DateOwner::PreviousMonthWithinBoundary => DateOwner::PreviousMonthOutsideBoundary,
            DateOwner::FollowingMonthWithinBoundary => DateOwner::FollowingMonthOutsideBoundary,
            owner => owner,
        };
    }
    Ok(resolved)
}

/// Resolves every cell of the month grid in order.
pub fn resolve_all<'a, C: Calendar + ?Sized>(
    month: &'a MonthInfo,
    start_of_month: NaiveDate,
    calendar: &'a C,
) -> impl Iterator<Item = (usize, Result<ResolvedDate, GridError>)> + 'a {
    (0..month.number_of_days_in_month_grid)
        .map(move |index| (index, resolve(index, month, start_of_month, calendar)))
}
