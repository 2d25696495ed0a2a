// File: crates/gantt-core/src/grid.rs
// Summary: Weekly tick layout for the date axis.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::axis::Axis;

/// Offsets (days from the axis origin) of every `interval`-th `weekday`
/// inside the visible range, starting from the first one on or after `min`.
pub fn weekday_ticks(axis: &Axis, weekday: Weekday, interval: u32) -> Vec<f64> {
    let interval = i64::from(interval.max(1));
    let first_day = axis.min.ceil() as i64;
    let last_day = axis.max.floor() as i64;
    if last_day < first_day {
        return Vec::new();
    }

    let first_date = axis.date_at(first_day);
    let ahead = (i64::from(weekday.num_days_from_monday())
        - i64::from(first_date.weekday().num_days_from_monday()))
    .rem_euclid(7);

    let mut out = Vec::new();
    let mut day = first_day + ahead;
    while day <= last_day {
        out.push(day as f64);
        day += 7 * interval;
    }
    out
}

/// Mondays, the minor grid.
pub fn minor_ticks(axis: &Axis) -> Vec<f64> {
    weekday_ticks(axis, Weekday::Mon, 1)
}

/// Every fifth Monday, the labelled major grid.
pub fn major_ticks(axis: &Axis) -> Vec<f64> {
    weekday_ticks(axis, Weekday::Mon, 5)
}

/// Day offset of `date` relative to `origin`.
pub fn day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days()
}

/// Date `days` after `origin`.
pub fn add_days(origin: NaiveDate, days: i64) -> NaiveDate {
    origin + Duration::days(days)
}
