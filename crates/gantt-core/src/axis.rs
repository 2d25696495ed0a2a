// File: crates/gantt-core/src/axis.rs
// Summary: Date axis model: an origin date and a visible range in fractional days.

use chrono::NaiveDate;

use crate::grid::{add_days, day_offset};

/// Major tick label format, e.g. `05-Feb`.
pub const TICK_FORMAT: &str = "%d-%b";

#[derive(Clone, Debug)]
pub struct Axis {
    /// Day 0.
    pub origin: NaiveDate,
    /// Visible range, in days from `origin`.
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(origin: NaiveDate, min: f64, max: f64) -> Self {
        Self { origin, min, max }
    }

    pub fn date_at(&self, day: i64) -> NaiveDate {
        add_days(self.origin, day)
    }

    pub fn offset_of(&self, date: NaiveDate) -> f64 {
        day_offset(self.origin, date) as f64
    }

    pub fn tick_label(&self, day: f64) -> String {
        self.date_at(day.round() as i64).format(TICK_FORMAT).to_string()
    }
}
