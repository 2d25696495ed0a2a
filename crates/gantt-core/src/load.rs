// File: crates/gantt-core/src/load.rs
// Summary: CSV loader for task rows; resolves columns by header name and parses day-first dates.

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{GanttError, GanttResult};
use crate::task::{is_na, CompletionCell, TaskRow};

const SEPARATORS: [char; 3] = ['-', '/', '.'];
const YEAR_FIRST_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const DAY_FIRST_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
const DAY_FIRST_SHORT_FORMATS: [&str; 3] = ["%d/%m/%y", "%d-%m-%y", "%d.%m.%y"];

/// Load task rows from a comma-delimited file with a header row.
pub fn load_tasks_csv(path: impl AsRef<Path>) -> GanttResult<Vec<TaskRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let rows = read_tasks_csv(file)?;
    info!(path = %path.display(), rows = rows.len(), "loaded task rows");
    Ok(rows)
}

/// Read task rows from any CSV source.
pub fn read_tasks_csv<R: io::Read>(reader: R) -> GanttResult<Vec<TaskRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let required = |name: &'static str| {
        idx(&name.to_lowercase()).ok_or(GanttError::MissingColumn(name))
    };

    let i_task = required("Task")?;
    let i_category = required("Category")?;
    let i_start = required("Start")?;
    let i_end = required("End")?;
    let i_completion = idx("completion");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let text = |i: usize| rec.get(i).map(str::trim).filter(|s| !is_na(s));

        out.push(TaskRow {
            task: text(i_task).map(str::to_string),
            category: text(i_category).map(str::to_string),
            start: text(i_start).and_then(parse_day_first),
            end: text(i_end).and_then(parse_day_first),
            completion: i_completion
                .and_then(text)
                .map_or(CompletionCell::Missing, CompletionCell::parse),
        });
    }
    Ok(out)
}

/// Parse a calendar date, reading ambiguous numeric dates day-first.
/// A trailing time of day is ignored.
pub fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let date_part = s.split([' ', 'T']).next().unwrap_or(s);

    // A four-digit leading field is a year; everything else is read day-first.
    let formats = if date_part.find(SEPARATORS) == Some(4) {
        &YEAR_FIRST_FORMATS
    } else if date_part.rsplit(SEPARATORS).next().map_or(0, str::len) == 2 {
        &DAY_FIRST_SHORT_FORMATS
    } else {
        &DAY_FIRST_FORMATS
    };
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}
