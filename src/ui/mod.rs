//! Host-independent view models: layout geometry, month cells, year views and surfaces.

pub mod layout;
pub mod month_cell;
pub mod render;
pub mod surface;
pub mod year_view;

pub use layout::{CellRect, EdgeInsets, ScrollDirection, Size, layout_offsets, size_for_item};
pub use month_cell::{DayDrawing, DrawingHook, MonthCell};
pub use render::{render_month_text, weekday_header};
pub use surface::{DaySurface, buffer_to_text};
pub use year_view::{
    YearItem, YearView, YearViewDataSource, YearViewDelegate, YearViewError, months_data_source,
};
