// File: crates/gantt-cli/src/main.rs
// Summary: Loads a task CSV, prepares bar geometry and renders the Gantt chart to PNG (and optionally a window).

use anyhow::{Context, Result};
use clap::Parser;
use gantt_core::{load_tasks_csv, prepare, theme, GanttChart, Palette, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::info;

mod cli;
#[cfg(feature = "viewer")]
mod viewer;

use cli::CommandLineArgs;

fn main() -> Result<()> {
    init_tracing();
    let args = CommandLineArgs::parse();
    ensure_viewer(args.show)?;

    let input = resolve_path(&args.file_path)?;
    let path = input.as_path();
    info!(path = %path.display(), "using input file");

    let palette = Palette::with_overrides(&args.colors).context("invalid --color override")?;
    let rows = load_tasks_csv(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    let bars = prepare(&rows, &palette)
        .with_context(|| format!("invalid task data in '{}'", path.display()))?;
    if bars.is_empty() {
        anyhow::bail!("no complete task rows loaded; check headers/delimiter.");
    }

    let chart = GanttChart::new(bars)
        .with_title(args.title.as_str())
        .with_palette(palette)
        .with_theme(theme::find(&args.theme));

    let mut opts = RenderOptions::default();
    opts.width = args.width;
    opts.height = args.height;
    opts.percentage_label = args.percentage_label.into();
    opts.legend_position = args.legend_pos.into();
    if args.today.is_some() {
        opts.today = args.today;
    }

    if !args.no_save {
        chart.render_to_png(&opts, &args.output)?;
        info!(path = %args.output.display(), "wrote chart");
    }

    if args.show {
        show(chart, opts)?;
    }
    Ok(())
}

/// Compact fmt subscriber; `RUST_LOG` overrides the `info` default.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// A relative path is tried against the working directory, then the executable's directory.
fn resolve_path(p: &Path) -> Result<PathBuf> {
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if p.is_relative() {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(p)))
            .filter(|candidate| candidate.exists());
        if let Some(found) = beside_exe {
            return Ok(found);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn ensure_viewer(show: bool) -> Result<()> {
    if show && !cfg!(feature = "viewer") {
        anyhow::bail!("--show needs the `viewer` feature; rebuild with `--features viewer`");
    }
    Ok(())
}

#[cfg(feature = "viewer")]
fn show(chart: GanttChart, opts: RenderOptions) -> Result<()> {
    viewer::run(chart, opts)
}

#[cfg(not(feature = "viewer"))]
fn show(_chart: GanttChart, _opts: RenderOptions) -> Result<()> {
    ensure_viewer(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_paths_resolve_unchanged() {
        let dir = std::env::temp_dir().join("gantt-cli-resolve");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("tasks.csv");
        std::fs::write(&file, "Task,Category,Start,End\n").unwrap();

        assert_eq!(resolve_path(&file).unwrap(), file);
    }

    #[test]
    fn missing_paths_are_reported() {
        let err = resolve_path(Path::new("no/such/gantt.csv")).unwrap_err();
        assert!(err.to_string().contains("file not found"), "{err}");
    }

    #[test]
    fn show_flag_matches_viewer_feature() {
        assert!(ensure_viewer(false).is_ok());
        assert_eq!(ensure_viewer(true).is_ok(), cfg!(feature = "viewer"));
    }

    #[cfg(not(feature = "viewer"))]
    #[test]
    fn show_without_viewer_is_an_error() {
        let chart = GanttChart::new(Vec::new());
        assert!(show(chart, RenderOptions::default()).is_err());
    }
}
