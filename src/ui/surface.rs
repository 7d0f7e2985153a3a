use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use unicode_width::UnicodeWidthStr;

use super::layout::CellRect;
use crate::grid::{DateOwner, ResolvedDate};

/// Destination for day labels. Implemented by the host's rendering layer.
pub trait DaySurface {
    fn paint(&mut self, label: &str, rect: CellRect, day: &ResolvedDate);
}

/// Convert a cell rect to whole terminal cells, clipped to `area`.
fn to_terminal_rect(rect: CellRect, area: Rect) -> Option<Rect> {
    if rect.x < 0.0 || rect.y < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (x, y, width) = (
        rect.x.round() as u16,
        rect.y.round() as u16,
        rect.width.round().max(1.0) as u16,
    );
    let x = area.x.saturating_add(x);
    let y = area.y.saturating_add(y);
    if x >= area.right() || y >= area.bottom() {
        return None;
    }
    Some(Rect {
        x,
        y,
        width: width.min(area.right() - x),
        height: 1,
    })
}

fn style_for(owner: DateOwner) -> Style {
    match owner {
        DateOwner::ThisMonth => Style::new(),
        DateOwner::PreviousMonthWithinBoundary | DateOwner::FollowingMonthWithinBoundary => {
            Style::new().fg(Color::Gray).dim()
        }
        DateOwner::PreviousMonthOutsideBoundary | DateOwner::FollowingMonthOutsideBoundary => {
            Style::new().fg(Color::DarkGray).dim()
        }
    }
}

/// Terminal buffer as a surface: one text row per cell, labels centered.
impl DaySurface for Buffer {
    fn paint(&mut self, label: &str, rect: CellRect, day: &ResolvedDate) {
        let Some(target) = to_terminal_rect(rect, self.area) else {
            tracing::trace!(?rect, "cell outside buffer, skipped");
            return;
        };
        let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        let x = target.x + target.width.saturating_sub(label_width) / 2;
        self.set_stringn(
            x,
            target.y,
            label,
            usize::from(target.right() - x),
            style_for(day.owner),
        );
    }
}

/// Plain text of a buffer, one line per row with trailing spaces removed.
#[must_use]
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    buffer
        .content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(owner: DateOwner) -> ResolvedDate {
        ResolvedDate {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            owner,
        }
    }

    #[test]
    fn test_paint_centers_label() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 8, 1));
        let rect = CellRect {
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 1.0,
        };
        buffer.paint("01", rect, &day(DateOwner::ThisMonth));
        assert_eq!(buffer_to_text(&buffer), " 01");
    }

    #[test]
    fn test_paint_outside_area_is_skipped() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 1));
        let rect = CellRect {
            x: 10.0,
            y: 0.0,
            width: 3.0,
            height: 1.0,
        };
        buffer.paint("31", rect, &day(DateOwner::ThisMonth));
        assert_eq!(buffer_to_text(&buffer), "");
    }

    #[test]
    fn test_filler_days_are_dimmed() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 3, 1));
        let rect = CellRect {
            x: 0.0,
            y: 0.0,
            width: 3.0,
            height: 1.0,
        };
        buffer.paint("31", rect, &day(DateOwner::PreviousMonthWithinBoundary));
        let cell = &buffer.content[0];
        assert!(cell.modifier.contains(ratatui::style::Modifier::DIM));
    }
}
