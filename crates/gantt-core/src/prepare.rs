// File: crates/gantt-core/src/prepare.rs
// Summary: Chart data preparation: order rows, drop incomplete ones, derive day offsets,
// completed lengths, colors and lanes.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{GanttError, GanttResult};
use crate::palette::Palette;
use crate::task::{Category, CompletionCell, GanttBar, TaskRow};

/// A row with every required field present and completion filled.
struct CompleteRow {
    task: String,
    category: String,
    start: NaiveDate,
    end: NaiveDate,
    completion: f64,
}

/// Turn raw task rows into bars ordered by descending start.
///
/// Rows missing `Task`, `Category`, `Start` or `End`, or with a non-numeric
/// completion, are dropped; a missing completion counts as 0. Unknown
/// categories, `End < Start` and completions outside `[0, 1]` are errors.
pub fn prepare(rows: &[TaskRow], palette: &Palette) -> GanttResult<Vec<GanttBar>> {
    let mut sorted: Vec<&TaskRow> = rows.iter().collect();
    // Stable; rows without a start sink to the end and are dropped below.
    sorted.sort_by_key(|r| Reverse(r.start));

    let complete = sorted
        .into_iter()
        .filter_map(|row| {
            let filled = complete_row(row);
            if filled.is_none() {
                debug!(?row, "dropping incomplete or malformed row");
            }
            filled
        })
        .collect::<Vec<_>>();

    let Some(project_start) = complete.iter().map(|r| r.start).min() else {
        info!(input = rows.len(), "no usable task rows");
        return Ok(Vec::new());
    };

    let mut lanes: HashMap<String, usize> = HashMap::new();
    let mut bars = Vec::with_capacity(complete.len());
    for row in complete {
        let category = row.category.parse::<Category>().map_err(|value| {
            GanttError::UnknownCategory { task: row.task.clone(), value }
        })?;
        if row.end < row.start {
            return Err(GanttError::EndBeforeStart { task: row.task, start: row.start, end: row.end });
        }
        if !(0.0..=1.0).contains(&row.completion) {
            return Err(GanttError::CompletionOutOfRange { task: row.task, value: row.completion });
        }

        let start_num = (row.start - project_start).num_days();
        let end_num = (row.end - project_start).num_days();
        let days_start_to_end = end_num - start_num;
        let next_lane = lanes.len();
        let lane = *lanes.entry(row.task.clone()).or_insert(next_lane);

        bars.push(GanttBar {
            task: row.task,
            category,
            start: row.start,
            end: row.end,
            completion: row.completion,
            start_num,
            end_num,
            days_start_to_end,
            current_num: days_start_to_end as f64 * row.completion,
            color: palette.color(category),
            lane,
        });
    }

    info!(input = rows.len(), bars = bars.len(), lanes = lanes.len(), %project_start, "prepared chart data");
    Ok(bars)
}

fn complete_row(row: &TaskRow) -> Option<CompleteRow> {
    let completion = match &row.completion {
        CompletionCell::Missing => 0.0,
        CompletionCell::Value(v) => *v,
        CompletionCell::Malformed(_) => return None,
    };
    Some(CompleteRow {
        task: row.task.clone()?,
        category: row.category.clone()?,
        start: row.start?,
        end: row.end?,
        completion,
    })
}

/// Earliest start and latest end across the bars, if any.
pub fn date_span(bars: &[GanttBar]) -> Option<(NaiveDate, NaiveDate)> {
    let start = bars.iter().map(|b| b.start).min()?;
    let end = bars.iter().map(|b| b.end).max()?;
    Some((start, end))
}

/// Number of lanes the bars occupy.
pub fn lane_count(bars: &[GanttBar]) -> usize {
    bars.iter().map(|b| b.lane + 1).max().unwrap_or(0)
}
