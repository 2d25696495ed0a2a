// File: crates/gantt-core/tests/ticks.rs
// Purpose: Weekly date-axis ticks, labels and the fitted view range.

use chrono::NaiveDate;
use gantt_core::grid::{major_ticks, minor_ticks};
use gantt_core::{prepare, Axis, Palette, TaskRow, ViewState};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn mondays_from_a_monday_origin() {
    // 2024-01-01 is a Monday.
    let axis = Axis::new(d(2024, 1, 1), -1.0, 40.0);
    assert_eq!(minor_ticks(&axis), vec![0.0, 7.0, 14.0, 21.0, 28.0, 35.0]);
    assert_eq!(major_ticks(&axis), vec![0.0, 35.0]);
    assert_eq!(axis.tick_label(0.0), "01-Jan");
    assert_eq!(axis.tick_label(35.0), "05-Feb");
}

#[test]
fn first_tick_is_next_monday() {
    // 2024-01-03 is a Wednesday; the next Monday is five days later.
    let axis = Axis::new(d(2024, 1, 3), 0.0, 20.0);
    assert_eq!(minor_ticks(&axis), vec![5.0, 12.0, 19.0]);
}

#[test]
fn empty_range_has_no_ticks() {
    let axis = Axis::new(d(2024, 1, 1), 1.2, 1.8);
    assert!(minor_ticks(&axis).is_empty());
}

#[test]
fn view_adds_margins_and_includes_today() {
    let rows = vec![
        TaskRow::new("a", "Task", d(2024, 1, 1), d(2024, 1, 21), None),
        TaskRow::new("b", "Task", d(2024, 1, 11), d(2024, 1, 21), None),
    ];
    let bars = prepare(&rows, &Palette::default()).unwrap();

    let v = ViewState::from_bars(&bars, None).unwrap();
    assert_eq!(v.origin, d(2024, 1, 1));
    assert!((v.x_min - -1.0).abs() < 1e-9);
    assert!((v.x_max - 21.0).abs() < 1e-9);
    assert!(v.y_min < -0.4 && v.y_max > 1.4);

    let v = ViewState::from_bars(&bars, Some(d(2024, 3, 1))).unwrap();
    assert!(v.x_max > 60.0, "today widens the range: {v:?}");

    assert!(ViewState::from_bars(&[], None).is_none());
}
