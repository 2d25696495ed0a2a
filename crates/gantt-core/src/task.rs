// File: crates/gantt-core/src/task.rs
// Summary: Task rows as read from CSV and the derived per-bar geometry consumed by the renderer.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::palette::HexColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Phase,
    Task,
    Deadline,
}

impl Category {
    /// Legend order.
    pub const ALL: [Category; 3] = [Category::Phase, Category::Task, Category::Deadline];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Phase => "Phase",
            Category::Task => "Task",
            Category::Deadline => "Deadline",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Exact match on the trimmed text; the caller turns the rejected value into a typed error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Phase" => Ok(Category::Phase),
            "Task" => Ok(Category::Task),
            "Deadline" => Ok(Category::Deadline),
            other => Err(other.to_string()),
        }
    }
}

/// Cell texts read as missing, the same set pandas treats as NA by default.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>", "N/A",
    "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True for an empty cell or one of [`NA_TOKENS`].
pub fn is_na(cell: &str) -> bool {
    cell.is_empty() || NA_TOKENS.contains(&cell)
}

/// A `Completion` cell: absent, a number, or text that is not a number.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CompletionCell {
    #[default]
    Missing,
    Value(f64),
    Malformed(String),
}

impl CompletionCell {
    /// Classify trimmed cell text.
    pub fn parse(cell: &str) -> Self {
        if is_na(cell) {
            return CompletionCell::Missing;
        }
        cell.parse::<f64>()
            .map_or_else(|_| CompletionCell::Malformed(cell.to_string()), CompletionCell::Value)
    }
}

impl From<Option<f64>> for CompletionCell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(CompletionCell::Missing, CompletionCell::Value)
    }
}

/// One input row. Missing or unparsable dates and empty text cells load as `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskRow {
    pub task: Option<String>,
    pub category: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub completion: CompletionCell,
}

impl TaskRow {
    /// Fully populated row; convenient for tests and programmatic use.
    pub fn new(
        task: impl Into<String>,
        category: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        completion: Option<f64>,
    ) -> Self {
        Self {
            task: Some(task.into()),
            category: Some(category.into()),
            start: Some(start),
            end: Some(end),
            completion: completion.into(),
        }
    }
}

/// A prepared bar: the row plus every derived field the renderer needs.
#[derive(Clone, Debug, PartialEq)]
pub struct GanttBar {
    pub task: String,
    pub category: Category,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub completion: f64,
    /// Days from project start to `start`.
    pub start_num: i64,
    /// Days from project start to `end`.
    pub end_num: i64,
    pub days_start_to_end: i64,
    /// Length of the completed portion, in days.
    pub current_num: f64,
    pub color: HexColor,
    /// Vertical slot; 0 sits next to the time axis.
    pub lane: usize,
}

impl GanttBar {
    /// Completion as a truncated whole percentage, e.g. `"42%"`.
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.completion * 100.0) as i64)
    }

    /// Deadlines are milestones and carry no percentage annotation.
    pub fn shows_percentage(&self) -> bool {
        self.category != Category::Deadline
    }
}
