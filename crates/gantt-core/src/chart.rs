// File: crates/gantt-core/src/chart.rs
// Summary: GanttChart and headless rendering pipeline (RGBA / PNG) using Skia CPU raster surfaces.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::grid::{major_ticks, minor_ticks};
use crate::palette::Palette;
use crate::scale::{LaneScale, TimeScale};
use crate::task::GanttBar;
use crate::text::{estimate_width, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, BAR_HEIGHT, HEIGHT, WIDTH};
use crate::view::ViewState;

pub const DEFAULT_TITLE: &str = "Master Thesis Gantt Chart";

const FONT_SIZE: f32 = 13.0;
const TITLE_SIZE: f32 = 18.0;
const TITLE_BAND: i32 = 32;
const LEGEND_BAND: i32 = 40;
const TICK_LABEL_BAND: f32 = 48.0;
const LABEL_GAP: i32 = 8;

/// Where each bar's completion percentage is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PercentageLabel {
    /// Inside the bar, one day after its start.
    #[default]
    InBar,
    /// Half a day past the bar's end.
    AfterBar,
    Disabled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    /// Top-right corner of the plot area.
    #[default]
    InPlot,
    /// Centered under the date axis, one row.
    UnderPlot,
    Disabled,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub percentage_label: PercentageLabel,
    pub legend_position: LegendPosition,
    /// Draws the "today" marker when set.
    pub today: Option<NaiveDate>,
    /// Text is skipped entirely when false (deterministic pixels across platforms).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            percentage_label: PercentageLabel::default(),
            legend_position: LegendPosition::default(),
            today: Some(chrono::Local::now().date_naive()),
            draw_labels: true,
        }
    }
}

/// Pixel rectangles of one drawn bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRects {
    pub lane: usize,
    /// Solid completed portion, ending at `start_num + current_num`.
    pub done: skia::Rect,
    /// Full duration at half alpha, ending at `end_num`.
    pub full: skia::Rect,
}

pub struct GanttChart {
    pub bars: Vec<GanttBar>,
    pub title: String,
    pub palette: Palette,
    pub theme: Theme,
}

/// Pixel placement derived from the options and the bars.
struct Layout {
    plot: RectI32,
    axis: Axis,
    time: TimeScale,
    lanes: LaneScale,
}

impl GanttChart {
    pub fn new(bars: Vec<GanttBar>) -> Self {
        Self {
            bars,
            title: DEFAULT_TITLE.to_string(),
            palette: Palette::default(),
            theme: Theme::light(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render and encode to PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading pixels from raster surface failed");
        }
        Ok((pixels, w, h, stride))
    }

    /// Where each bar lands on a surface rendered with `opts`, in `self.bars` order.
    pub fn bar_rects(&self, opts: &RenderOptions) -> Result<Vec<BarRects>> {
        if self.bars.is_empty() {
            anyhow::bail!("no tasks to render");
        }
        let shaper = opts.draw_labels.then(TextShaper::new);
        let layout = self.layout(opts, shaper.as_ref())?;
        Ok(self.bars.iter().map(|bar| bar_rects(&layout, bar)).collect())
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if self.bars.is_empty() {
            anyhow::bail!("no tasks to render");
        }
        let shaper = opts.draw_labels.then(TextShaper::new);
        let layout = self.layout(opts, shaper.as_ref())?;
        debug!(plot = ?layout.plot, x_min = layout.axis.min, x_max = layout.axis.max, "chart layout");

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.background);

        draw_grid(canvas, &layout, &self.theme);

        canvas.save();
        canvas.clip_rect(layout.plot.to_skia(), skia::ClipOp::Intersect, true);
        draw_bars(canvas, &layout, &self.bars);
        if let Some(shaper) = &shaper {
            draw_percentages(canvas, shaper, &layout, &self.bars, &self.theme, opts.percentage_label);
        }
        if let Some(today) = opts.today {
            draw_today(canvas, &layout, &self.theme, today);
        }
        canvas.restore();

        draw_frame(canvas, &layout, &self.theme);
        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &layout, &self.bars, &self.theme);
            shaper.draw_centered(
                canvas,
                &self.title,
                opts.width as f32 * 0.5,
                (opts.insets.top as i32 + TITLE_BAND) as f32 - 10.0,
                TITLE_SIZE,
                self.theme.title,
                false,
            );
        }
        draw_legend(canvas, shaper.as_ref(), &layout, &self.palette, &self.theme, opts.legend_position);

        Ok(surface)
    }

    fn layout(&self, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Result<Layout> {
        let view = ViewState::from_bars(&self.bars, opts.today)
            .ok_or_else(|| anyhow!("no tasks to render"))?;

        let label_w = self
            .bars
            .iter()
            .map(|b| text_width(shaper, &b.task, FONT_SIZE))
            .fold(0.0f32, f32::max);
        let legend_band = if opts.legend_position == LegendPosition::UnderPlot { LEGEND_BAND } else { 0 };

        let plot = RectI32::from_ltrb(
            opts.insets.left as i32 + label_w.ceil() as i32 + LABEL_GAP,
            opts.insets.top as i32 + TITLE_BAND,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32 - legend_band,
        );
        if plot.width() <= 0 || plot.height() <= 0 {
            anyhow::bail!("surface {}x{} is too small for the chart layout", opts.width, opts.height);
        }

        Ok(Layout {
            plot,
            axis: Axis::new(view.origin, view.x_min, view.x_max),
            time: TimeScale::fit(plot.left as f32, plot.right as f32, view.x_min, view.x_max),
            lanes: LaneScale::new(plot.top as f32, plot.bottom as f32, view.y_min, view.y_max),
        })
    }
}

// ---- helpers ----------------------------------------------------------------

fn text_width(shaper: Option<&TextShaper>, text: &str, size: f32) -> f32 {
    match shaper {
        Some(s) => s.measure_width(text, size, false),
        None => estimate_width(text, size),
    }
}

fn stroke(color: skia::Color, width: f32, dash: Option<&[f32]>) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    if let Some(intervals) = dash {
        paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
    }
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let (t, b) = (layout.plot.top as f32, layout.plot.bottom as f32);

    let minor = stroke(theme.grid_minor, 0.5, Some(&[1.0, 2.0][..]));
    for d in minor_ticks(&layout.axis) {
        let x = layout.time.to_px(d);
        canvas.draw_line((x, t), (x, b), &minor);
    }

    let major = stroke(theme.grid_major, 1.0, Some(&[1.5, 2.5][..]));
    for d in major_ticks(&layout.axis) {
        let x = layout.time.to_px(d);
        canvas.draw_line((x, t), (x, b), &major);
    }
}

fn draw_frame(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let frame = stroke(theme.axis_line, 1.0, None);
    canvas.draw_rect(layout.plot.to_skia(), &frame);
}

fn bar_rects(layout: &Layout, bar: &GanttBar) -> BarRects {
    let half_h = layout.lanes.len_px(BAR_HEIGHT) * 0.5;
    let yc = layout.lanes.to_px(bar.lane as f64);
    let x0 = layout.time.to_px(bar.start_num as f64);
    let done_x = layout.time.to_px(bar.start_num as f64 + bar.current_num);
    let end_x = layout.time.to_px(bar.end_num as f64);
    BarRects {
        lane: bar.lane,
        done: skia::Rect::from_ltrb(x0, yc - half_h, done_x, yc + half_h),
        full: skia::Rect::from_ltrb(x0, yc - half_h, end_x, yc + half_h),
    }
}

/// Completed portion solid, full duration at half alpha on top, as two stacked bars.
fn draw_bars(canvas: &skia::Canvas, layout: &Layout, bars: &[GanttBar]) {
    for bar in bars {
        let rects = bar_rects(layout, bar);
        canvas.draw_rect(rects.done, &fill(bar.color.to_skia(255)));
        canvas.draw_rect(rects.full, &fill(bar.color.to_skia(128)));
    }
}

fn draw_percentages(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &Layout,
    bars: &[GanttBar],
    theme: &Theme,
    mode: PercentageLabel,
) {
    let (offset_days, color) = match mode {
        PercentageLabel::InBar => (1.0, theme.in_bar_text),
        PercentageLabel::AfterBar => (0.5, theme.axis_label.with_a(204)),
        PercentageLabel::Disabled => return,
    };
    for bar in bars.iter().filter(|b| b.shows_percentage()) {
        let anchor = match mode {
            PercentageLabel::AfterBar => bar.end_num,
            _ => bar.start_num,
        };
        let x = layout.time.to_px(anchor as f64 + offset_days);
        let y = layout.lanes.to_px(bar.lane as f64) + FONT_SIZE * 0.35;
        shaper.draw_left(canvas, &bar.percent_label(), x, y, FONT_SIZE, color, false);
    }
}

fn draw_today(canvas: &skia::Canvas, layout: &Layout, theme: &Theme, today: NaiveDate) {
    let x = layout.time.to_px(layout.axis.offset_of(today));
    let marker = stroke(theme.today_marker, 1.0, Some(&[4.0, 4.0][..]));
    canvas.draw_line((x, layout.plot.top as f32), (x, layout.plot.bottom as f32), &marker);
}

fn draw_tick_labels(canvas: &skia::Canvas, shaper: &TextShaper, layout: &Layout, bars: &[GanttBar], theme: &Theme) {
    let plot = &layout.plot;
    let tick = stroke(theme.axis_line, 1.0, None);

    for d in major_ticks(&layout.axis) {
        let x = layout.time.to_px(d);
        canvas.draw_line((x, plot.bottom as f32), (x, plot.bottom as f32 + 4.0), &tick);
        canvas.save();
        canvas.translate((x, plot.bottom as f32 + 20.0));
        canvas.rotate(-20.0, None);
        shaper.draw_centered(canvas, &layout.axis.tick_label(d), 0.0, 0.0, FONT_SIZE, theme.axis_label, false);
        canvas.restore();
    }

    // One label per lane, from the first bar occupying it.
    let mut labelled = vec![false; crate::prepare::lane_count(bars)];
    for bar in bars {
        if std::mem::replace(&mut labelled[bar.lane], true) {
            continue;
        }
        let y = layout.lanes.to_px(bar.lane as f64);
        canvas.draw_line((plot.left as f32 - 4.0, y), (plot.left as f32, y), &tick);
        shaper.draw_right(
            canvas,
            &bar.task,
            (plot.left - LABEL_GAP) as f32,
            y + FONT_SIZE * 0.35,
            FONT_SIZE,
            theme.axis_label,
        );
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    layout: &Layout,
    palette: &Palette,
    theme: &Theme,
    position: LegendPosition,
) {
    const SWATCH: f32 = 14.0;
    const GAP: f32 = 6.0;
    const PAD: f32 = 8.0;
    const ROW_H: f32 = 20.0;
    const SPACING: f32 = 16.0;

    let entries = palette.entries();
    let widths = entries.map(|(c, _)| text_width(shaper, c.as_str(), FONT_SIZE));
    let plot = &layout.plot;

    // Top-left of each entry's swatch.
    let (frame, origins): (skia::Rect, Vec<(f32, f32)>) = match position {
        LegendPosition::Disabled => return,
        LegendPosition::InPlot => {
            let w = PAD * 2.0 + SWATCH + GAP + widths.iter().copied().fold(0.0, f32::max);
            let h = PAD * 2.0 + ROW_H * entries.len() as f32;
            let x = plot.right as f32 - 10.0 - w;
            let y = plot.top as f32 + 10.0;
            let origins = (0..entries.len())
                .map(|i| (x + PAD, y + PAD + ROW_H * i as f32 + (ROW_H - SWATCH) * 0.5))
                .collect();
            (skia::Rect::from_xywh(x, y, w, h), origins)
        }
        LegendPosition::UnderPlot => {
            let row_w: f32 = widths.iter().map(|w| SWATCH + GAP + w).sum::<f32>()
                + SPACING * (entries.len() as f32 - 1.0);
            let w = row_w + PAD * 2.0;
            let h = ROW_H + PAD * 2.0;
            let x = plot.center_x() - w * 0.5;
            let y = plot.bottom as f32 + TICK_LABEL_BAND;
            let mut cursor = x + PAD;
            let origins = widths
                .iter()
                .map(|tw| {
                    let o = (cursor, y + PAD + (ROW_H - SWATCH) * 0.5);
                    cursor += SWATCH + GAP + tw + SPACING;
                    o
                })
                .collect();
            (skia::Rect::from_xywh(x, y, w, h), origins)
        }
    };

    canvas.draw_rect(frame, &fill(theme.legend_fill));
    canvas.draw_rect(frame, &stroke(theme.legend_border, 1.0, None));
    for ((category, color), (x, y)) in entries.iter().zip(origins) {
        canvas.draw_rect(skia::Rect::from_xywh(x, y, SWATCH, SWATCH), &fill(color.to_skia(255)));
        if let Some(shaper) = shaper {
            shaper.draw_left(canvas, category.as_str(), x + SWATCH + GAP, y + SWATCH - 2.0, FONT_SIZE, theme.axis_label, false);
        }
    }
}
