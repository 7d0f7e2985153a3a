use chrono::NaiveDate;
use monthgrid::grid::{ConfigurationParameters, generate_months};
use monthgrid::ui::{
    CellRect, DaySurface, EdgeInsets, MonthCell, ScrollDirection, Size, layout_offsets,
    render_month_text,
};
use monthgrid::{DateOwner, ResolvedDate};

fn january_2024() -> monthgrid::MonthInfo {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let params = ConfigurationParameters::new(start, start);
    generate_months(&params).unwrap().remove(0)
}

#[test]
fn five_row_month_accumulates_five_row_heights() {
    let month = january_2024();
    let inset = EdgeInsets::new(0.0, 2.0, 0.0, 0.0);
    let rects = layout_offsets(&month, Size::new(10.0, 20.0), inset, ScrollDirection::Vertical);

    assert_eq!(rects.len(), 35);
    let last = rects.last().unwrap();
    assert_eq!(last.y + last.height, 5.0 * 20.0);
    for (i, rect) in rects.iter().enumerate() {
        if i % 7 == 0 {
            assert_eq!(rect.x, inset.left, "cell {i} should start at the left inset");
        } else {
            assert_eq!(rect.x, rects[i - 1].x + 10.0);
        }
    }
}

#[derive(Default)]
struct Labels(Vec<(String, CellRect, DateOwner)>);

impl DaySurface for Labels {
    fn paint(&mut self, label: &str, rect: CellRect, day: &ResolvedDate) {
        self.0.push((label.to_string(), rect, day.owner));
    }
}

#[test]
fn month_cell_paints_labels_in_layout_order() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let params = ConfigurationParameters::new(start, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    let mut cell = MonthCell::new(Size::new(70.0, 100.0));
    cell.scroll_direction = ScrollDirection::Vertical;
    cell.setup_with(&params, 1).unwrap();

    let mut labels = Labels::default();
    let painted = cell.draw(&mut labels);
    assert_eq!(painted, cell.month().unwrap().number_of_days_in_month_grid);

    // February 2024 begins on a Thursday
    let (label, rect, owner) = &labels.0[4];
    assert_eq!(label, "01");
    assert_eq!(*owner, DateOwner::ThisMonth);
    assert_eq!(rect.x, 40.0);
    assert_eq!(rect.y, 0.0);

    let (label, _, owner) = &labels.0[0];
    assert_eq!(label, "28");
    assert_eq!(*owner, DateOwner::PreviousMonthWithinBoundary);
}

#[test]
fn rendered_text_for_a_monday_first_grid() {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let params = ConfigurationParameters::new(start, start).with_first_day_of_week(chrono::Weekday::Mon);
    let text = render_month_text(&params, 0, Size::new(3.0, 1.0)).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
    assert_eq!(lines[2], "26 27 28 29 30 31 01");
    assert_eq!(lines.len(), 8);
}
