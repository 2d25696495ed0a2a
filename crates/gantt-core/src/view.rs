// File: crates/gantt-core/src/view.rs
// Visible ranges for a set of bars: day range on X (with margins) and lane range on Y.

use chrono::NaiveDate;

use crate::grid::day_offset;
use crate::prepare::{date_span, lane_count};
use crate::task::GanttBar;
use crate::types::{BAR_HEIGHT, X_MARGIN};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Day 0 of the X range; the project start.
    pub origin: NaiveDate,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit all bars, widening X to include `today` when it falls outside.
    pub fn from_bars(bars: &[GanttBar], today: Option<NaiveDate>) -> Option<Self> {
        let (origin, last_end) = date_span(bars)?;
        let mut x_min = 0.0f64;
        let mut x_max = day_offset(origin, last_end) as f64;
        if let Some(today) = today {
            let t = day_offset(origin, today) as f64;
            x_min = x_min.min(t);
            x_max = x_max.max(t);
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        let xm = (x_max - x_min) * X_MARGIN;

        let lanes = lane_count(bars) as f64;
        let half = BAR_HEIGHT * 0.5;
        let ym = (lanes - 1.0 + BAR_HEIGHT) * 0.05;
        Some(Self {
            origin,
            x_min: x_min - xm,
            x_max: x_max + xm,
            y_min: -half - ym,
            y_max: lanes - 1.0 + half + ym,
        })
    }
}
