use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;

use super::layout::{CellRect, EdgeInsets, ScrollDirection, Size, layout_offsets, size_for_item};
use super::surface::DaySurface;
use crate::grid::{
    ConfigurationParameters, GridError, MAX_ROWS_PER_MONTH, MonthInfo, ResolvedDate,
    month_info_for, resolve,
};

/// Replacement for the default label of one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDrawing {
    pub label: String,
    pub rect: CellRect,
}

/// Per-day drawing override: `(rect, day, month index)`. `None` keeps the default label.
pub type DrawingHook = Rc<dyn Fn(CellRect, &ResolvedDate, usize) -> Option<DayDrawing>>;

/// One month of a year view: owns its grid description and paints its day labels.
///
/// The section cache is plain `&mut self` state; a cell belongs to one thread.
#[derive(Clone, Default)]
pub struct MonthCell {
    days_in_section: HashMap<usize, usize>,
    pub frame: Size,
    pub section_inset: EdgeInsets,
    pub scroll_direction: ScrollDirection,
    month: Option<MonthInfo>,
    month_date: Option<NaiveDate>,
    configuration: Option<ConfigurationParameters>,
    drawing_hook: Option<DrawingHook>,
}

impl fmt::Debug for MonthCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthCell")
            .field("frame", &self.frame)
            .field("month", &self.month)
            .field("month_date", &self.month_date)
            .field("has_drawing_hook", &self.drawing_hook.is_some())
            .finish_non_exhaustive()
    }
}

impl MonthCell {
    #[must_use]
    pub fn new(frame: Size) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Prepare the cell to show month `index` of the configured range.
    pub fn setup_with(
        &mut self,
        configuration: &ConfigurationParameters,
        index: usize,
    ) -> Result<(), GridError> {
        let (month, month_date) = month_info_for(configuration, index)?;
        tracing::debug!(index, %month_date, grid = month.number_of_days_in_month_grid, "month cell setup");
        self.month = Some(month);
        self.month_date = Some(month_date);
        self.configuration = Some(configuration.clone());
        self.invalidate();
        Ok(())
    }

    pub fn set_drawing_hook(&mut self, hook: DrawingHook) {
        self.drawing_hook = Some(hook);
    }

    /// Drop memoized section sizes. Called whenever the configuration changes.
    pub fn invalidate(&mut self) {
        self.days_in_section.clear();
    }

    #[must_use]
    pub fn month(&self) -> Option<&MonthInfo> {
        self.month.as_ref()
    }

    #[must_use]
    pub fn month_date(&self) -> Option<NaiveDate> {
        self.month_date
    }

    /// Grid cell count of `months[index]`, memoized per index.
    pub fn number_of_days_in_section(&mut self, index: usize, months: &[MonthInfo]) -> Option<usize> {
        if let Some(&days) = self.days_in_section.get(&index) {
            return Some(days);
        }
        let days = months.get(index)?.number_of_days_in_month_grid;
        self.days_in_section.insert(index, days);
        Some(days)
    }

    #[must_use]
    pub fn cached_sections(&self) -> usize {
        self.days_in_section.len()
    }

    /// Cell size dividing the frame by every row the month grid spans.
    #[must_use]
    pub fn item_size(&self) -> Option<Size> {
        let month = self.month.as_ref()?;
        Some(size_for_item(
            month,
            self.frame,
            self.section_inset,
            MAX_ROWS_PER_MONTH,
        ))
    }

    /// Paint every day of the month. Returns how many cells were painted.
    ///
    /// Cells whose date cannot be resolved are skipped.
    pub fn draw(&self, surface: &mut impl DaySurface) -> usize {
        let (Some(month), Some(month_date), Some(configuration), Some(size)) = (
            self.month.as_ref(),
            self.month_date,
            self.configuration.as_ref(),
            self.item_size(),
        ) else {
            return 0;
        };

        let rects = layout_offsets(month, size, self.section_inset, self.scroll_direction);
        let mut painted = 0;
        for (index, rect) in rects.into_iter().enumerate() {
            match resolve(index, month, month_date, configuration.calendar.as_ref()) {
                Ok(day) => {
                    let custom = self
                        .drawing_hook
                        .as_ref()
                        .and_then(|hook| hook(rect, &day, month.index));
                    match custom {
                        Some(drawing) => surface.paint(&drawing.label, drawing.rect, &day),
                        None => surface.paint(&day.date.format("%d").to_string(), rect, &day),
                    }
                    painted += 1;
                }
                Err(e) => {
                    tracing::warn!(month = month.index, "skipping cell: {e}");
                }
            }
        }
        painted
    }
}
