use std::rc::{Rc, Weak};

use chrono::NaiveDate;

use super::layout::{CellRect, Size};
use super::month_cell::{DayDrawing, DrawingHook, MonthCell};
use crate::grid::{ConfigurationParameters, GridError, MonthInfo, ResolvedDate, generate_months};

/// Horizontal spacing a year view leaves between its three month columns.
const MONTH_COLUMN_SPACING: f64 = 40.0;
const MONTH_COLUMNS: f64 = 3.0;

/// An entry of a year view: a month grid, or a host-defined item such as a year header.
#[derive(Debug, Clone, PartialEq)]
pub enum YearItem<T> {
    Month(MonthInfo),
    Other(T),
}

impl<T> YearItem<T> {
    #[must_use]
    pub fn as_month(&self) -> Option<&MonthInfo> {
        match self {
            Self::Month(month) => Some(month),
            Self::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum YearViewError {
    #[error("year view has no data source")]
    MissingDataSource,
    #[error("year view has no delegate")]
    MissingDelegate,
    #[error("item {index} is out of range ({count} items)")]
    ItemOutOfRange { index: usize, count: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub trait YearViewDataSource<T> {
    fn configure_calendar(&self) -> (ConfigurationParameters, Vec<YearItem<T>>);
}

pub trait YearViewDelegate<T> {
    /// Cell to show `item`; month items are set up by the view afterwards.
    fn cell_for(&self, item: &YearItem<T>, date: NaiveDate, index: usize) -> MonthCell;

    fn size_for(&self, _item: &YearItem<T>) -> Option<Size> {
        None
    }

    /// Custom drawing for one day of month `month_index`, in place of its default label.
    fn drawing_for(
        &self,
        _rect: CellRect,
        _day: &ResolvedDate,
        _month_index: usize,
    ) -> Option<DayDrawing> {
        None
    }
}

/// Default item list: one entry per month of the configured range.
pub fn months_data_source<T>(
    configuration: &ConfigurationParameters,
) -> Result<Vec<YearItem<T>>, GridError> {
    Ok(generate_months(configuration)?
        .into_iter()
        .map(YearItem::Month)
        .collect())
}

/// Maps a data source's items to dates, cells and sizes.
///
/// Delegate and data source are not owned; the host keeps them alive.
pub struct YearView<T> {
    configuration: Option<ConfigurationParameters>,
    items: Vec<YearItem<T>>,
    pub frame: Size,
    delegate: Option<Weak<dyn YearViewDelegate<T>>>,
    data_source: Option<Weak<dyn YearViewDataSource<T>>>,
}

impl<T> YearView<T> {
    #[must_use]
    pub fn new(frame: Size) -> Self {
        Self {
            configuration: None,
            items: Vec::new(),
            frame,
            delegate: None,
            data_source: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: &Rc<dyn YearViewDelegate<T>>) {
        self.delegate = Some(Rc::downgrade(delegate));
    }

    /// Attach a data source and load its configuration and items.
    pub fn set_data_source(
        &mut self,
        data_source: &Rc<dyn YearViewDataSource<T>>,
    ) -> Result<(), YearViewError> {
        self.data_source = Some(Rc::downgrade(data_source));
        self.setup()
    }

    /// Reload configuration and items from the data source.
    pub fn setup(&mut self) -> Result<(), YearViewError> {
        let Some(data_source) = self.data_source.as_ref().and_then(Weak::upgrade) else {
            tracing::warn!("invalid data source");
            return Err(YearViewError::MissingDataSource);
        };
        let (configuration, items) = data_source.configure_calendar();
        tracing::debug!(items = items.len(), start = %configuration.start_date, "year view setup");
        self.configuration = Some(configuration);
        self.items = items;
        Ok(())
    }

    #[must_use]
    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn configuration(&self) -> Option<&ConfigurationParameters> {
        self.configuration.as_ref()
    }

    fn item(&self, index: usize) -> Result<&YearItem<T>, YearViewError> {
        self.items.get(index).ok_or(YearViewError::ItemOutOfRange {
            index,
            count: self.items.len(),
        })
    }

    /// Range start advanced by the month's index, keeping the start's day of month.
    /// Other items take the date of the next month item, or the configured end
    /// date when none follows.
    pub fn date_for_item(&self, index: usize) -> Result<NaiveDate, YearViewError> {
        let configuration = self
            .configuration
            .as_ref()
            .ok_or(YearViewError::MissingDataSource)?;
        self.item(index)?;

        match self.items[index..].iter().find_map(YearItem::as_month) {
            Some(month) => {
                let months = i32::try_from(month.index)
                    .map_err(|_| GridError::MonthOutOfRange { index: month.index })?;
                Ok(configuration
                    .calendar
                    .add_months(configuration.start_date, months)
                    .ok_or(GridError::MonthOutOfRange { index: month.index })?)
            }
            None => Ok(configuration.end_date),
        }
    }

    /// Ask the delegate for the cell at `index`, setting it up when it shows a month.
    ///
    /// Month cells route per-day drawing back to the delegate without keeping it alive.
    pub fn cell_for_item(&self, index: usize) -> Result<MonthCell, YearViewError>
    where
        T: 'static,
    {
        let delegate = self
            .delegate
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(YearViewError::MissingDelegate)?;
        let item = self.item(index)?;
        let date = self.date_for_item(index)?;

        let mut cell = delegate.cell_for(item, date, index);
        if let (YearItem::Month(month), Some(configuration)) = (item, self.configuration.as_ref()) {
            cell.setup_with(configuration, month.index)?;
            let link = Rc::downgrade(&delegate);
            let hook: DrawingHook = Rc::new(move |rect: CellRect, day: &ResolvedDate, month_index: usize| {
                link.upgrade()
                    .and_then(|delegate| delegate.drawing_for(rect, day, month_index))
            });
            cell.set_drawing_hook(hook);
        }
        Ok(cell)
    }

    pub fn size_for_item(&self, index: usize) -> Result<Size, YearViewError> {
        let item = self.item(index)?;
        if let Some(size) = self
            .delegate
            .as_ref()
            .and_then(Weak::upgrade)
            .and_then(|d| d.size_for(item))
        {
            return Ok(size);
        }
        let width = match item {
            YearItem::Month(_) => (self.frame.width - MONTH_COLUMN_SPACING) / MONTH_COLUMNS,
            YearItem::Other(_) => self.frame.width,
        };
        Ok(Size::new(width, width))
    }
}
