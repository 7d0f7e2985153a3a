use chrono::Weekday;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::layout::{EdgeInsets, ScrollDirection, Size};
use super::month_cell::MonthCell;
use super::surface::buffer_to_text;
use crate::grid::{ConfigurationParameters, DAYS_IN_WEEK, GridError, MAX_ROWS_PER_MONTH};

/// Two-letter weekday names starting at `first`, each centered in `cell_width` columns.
#[must_use]
pub fn weekday_header(first: Weekday, cell_width: usize) -> String {
    let mut day = first;
    let mut header = String::new();
    for _ in 0..DAYS_IN_WEEK {
        let name: String = day.to_string().chars().take(2).collect();
        header.push_str(&format!("{name:^cell_width$}"));
        day = day.succ();
    }
    header.trim_end().to_string()
}

/// Month `index` of the configured range as plain text: title, weekday header, day grid.
pub fn render_month_text(
    configuration: &ConfigurationParameters,
    index: usize,
    cell_size: Size,
) -> Result<String, GridError> {
    let mut cell = MonthCell::default();
    cell.scroll_direction = ScrollDirection::Vertical;
    cell.section_inset = EdgeInsets::default();
    cell.setup_with(configuration, index)?;

    let Some(month) = cell.month() else {
        return Err(GridError::MonthOutOfRange { index });
    };
    let rows = month.max_number_of_rows_for_full(MAX_ROWS_PER_MONTH);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (columns, lines) = (
        (cell_size.width.max(1.0) * DAYS_IN_WEEK as f64).round() as u16,
        (cell_size.height.max(1.0) * rows as f64).round() as u16,
    );
    cell.frame = Size::new(f64::from(columns), f64::from(lines));

    let mut buffer = Buffer::empty(Rect::new(0, 0, columns, lines));
    cell.draw(&mut buffer);

    let title = cell
        .month_date()
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    let header = weekday_header(configuration.first_day_of_week, usize::from(columns) / DAYS_IN_WEEK);

    Ok(format!(
        "{title:^width$}\n{header}\n{grid}",
        title = title,
        width = usize::from(columns),
        grid = buffer_to_text(&buffer),
    )
    .trim_end()
    .to_string())
}
