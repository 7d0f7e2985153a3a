use crate::grid::{DAYS_IN_WEEK, MonthInfo};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ScrollDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Cell size that fits `developer_rows` rows of seven days into `frame`.
#[must_use]
pub fn size_for_item(
    month: &MonthInfo,
    frame: Size,
    section_inset: EdgeInsets,
    developer_rows: usize,
) -> Size {
    let rows = month.max_number_of_rows_for_full(developer_rows) as f64;
    let columns = DAYS_IN_WEEK as f64;
    let width =
        (frame.width - ((section_inset.left / columns) + (section_inset.right / columns))) / columns;
    let height = (frame.height - section_inset.top - section_inset.bottom) / rows;
    Size { width, height }
}

/// Offsets of every cell of `month`, in grid order.
///
/// Rows wrap at the end of each section and after every seventh cell of a section.
#[must_use]
pub fn layout_offsets(
    month: &MonthInfo,
    cell_size: Size,
    section_inset: EdgeInsets,
    scroll_direction: ScrollDirection,
) -> Vec<CellRect> {
    let y_shift = match scroll_direction {
        ScrollDirection::Horizontal => section_inset.top,
        ScrollDirection::Vertical => 0.0,
    };

    let mut x = section_inset.left;
    let mut y = 0.0;
    let mut rects = Vec::with_capacity(month.number_of_days_in_month_grid);

    for &days_in_section in &month.sections {
        for day_counter in 1..=days_in_section {
            rects.push(CellRect {
                x,
                y: y + y_shift,
                width: cell_size.width,
                height: cell_size.height,
            });
            x += cell_size.width;

            if day_counter == days_in_section || day_counter % DAYS_IN_WEEK == 0 {
                x = section_inset.left;
                y += cell_size.height;
            }
        }
    }
    rects
}
