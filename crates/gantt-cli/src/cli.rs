// File: crates/gantt-cli/src/cli.rs
// Summary: Command-line flags and their mapping onto core render options.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use gantt_core::{LegendPosition, PercentageLabel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PercentageLabelArg {
    #[value(name = "in bar")]
    InBar,
    #[value(name = "after bar")]
    AfterBar,
    #[value(name = "disable")]
    Disable,
}

impl From<PercentageLabelArg> for PercentageLabel {
    fn from(arg: PercentageLabelArg) -> Self {
        match arg {
            PercentageLabelArg::InBar => PercentageLabel::InBar,
            PercentageLabelArg::AfterBar => PercentageLabel::AfterBar,
            PercentageLabelArg::Disable => PercentageLabel::Disabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LegendPosArg {
    #[value(name = "in plot")]
    InPlot,
    #[value(name = "under plot")]
    UnderPlot,
    #[value(name = "disable")]
    Disable,
}

impl From<LegendPosArg> for LegendPosition {
    fn from(arg: LegendPosArg) -> Self {
        match arg {
            LegendPosArg::InPlot => LegendPosition::InPlot,
            LegendPosArg::UnderPlot => LegendPosition::UnderPlot,
            LegendPosArg::Disable => LegendPosition::Disabled,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gantt-chart", about = "Generate Gantt Chart.")]
pub struct CommandLineArgs {
    /// Path to the CSV file containing Gantt Chart data. A relative path is
    /// tried in the working directory, then next to the executable.
    #[arg(long = "file_path", alias = "file-path", default_value = "gantt.csv")]
    pub file_path: PathBuf,

    /// Label position for task percentage.
    #[arg(long = "percentage_label", alias = "percentage-label", value_enum, default_value = "in bar")]
    pub percentage_label: PercentageLabelArg,

    /// Legend position.
    #[arg(long = "legend_pos", alias = "legend-pos", value_enum, default_value = "in plot")]
    pub legend_pos: LegendPosArg,

    /// Where the PNG is written.
    #[arg(long, default_value = "output/gantt_chart.png")]
    pub output: PathBuf,

    /// Skip writing the PNG.
    #[arg(long)]
    pub no_save: bool,

    /// Show the chart in a window (requires the `viewer` feature).
    #[arg(long)]
    pub show: bool,

    #[arg(long, default_value = gantt_core::chart::DEFAULT_TITLE)]
    pub title: String,

    /// Theme preset (light, dark).
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Date of the "today" marker, day-first; defaults to the local date.
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    #[arg(long, default_value_t = gantt_core::types::WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = gantt_core::types::HEIGHT)]
    pub height: i32,

    /// Override a category color, e.g. `--color Phase=#00cd95` or `--color Task=blue`. Repeatable.
    #[arg(long = "color", value_name = "CATEGORY=COLOR")]
    pub colors: Vec<String>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    gantt_core::parse_day_first(s).ok_or_else(|| format!("unrecognised date '{s}'"))
}
