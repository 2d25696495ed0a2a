// File: crates/gantt-core/src/lib.rs
// Summary: Core library entry point; exports task loading, chart data preparation and rendering.

pub mod error;
pub mod task;
pub mod palette;
pub mod load;
pub mod prepare;
pub mod chart;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;

pub use error::{GanttError, GanttResult};
pub use task::{Category, CompletionCell, GanttBar, TaskRow};
pub use palette::{HexColor, Palette};
pub use load::{load_tasks_csv, parse_day_first, read_tasks_csv};
pub use prepare::prepare;
pub use chart::{BarRects, GanttChart, LegendPosition, PercentageLabel, RenderOptions};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
