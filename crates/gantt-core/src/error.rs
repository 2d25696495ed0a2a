// File: crates/gantt-core/src/error.rs
// Summary: Error type shared by task loading, palette parsing and chart data preparation.

use chrono::NaiveDate;
use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("task '{task}': unknown category '{value}' (expected Phase, Task or Deadline)")]
    UnknownCategory { task: String, value: String },

    #[error("task '{task}': end {end} is before start {start}")]
    EndBeforeStart { task: String, start: NaiveDate, end: NaiveDate },

    #[error("task '{task}': completion {value} is outside [0, 1]")]
    CompletionOutOfRange { task: String, value: f64 },

    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),
}
