pub mod calendar;
pub mod config;
pub mod grid;
pub mod ui;

pub use calendar::{Calendar, Gregorian};
pub use grid::{
    ConfigurationParameters, DateBoundary, DateOwner, GridError, InDateCellGeneration, MonthInfo,
    OutDateCellGeneration, ResolvedDate, generate_months, month_info_for, resolve,
    resolve_with_owner,
};
