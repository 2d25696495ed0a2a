// File: crates/gantt-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chrono::NaiveDate;
use gantt_core::{prepare, GanttChart, LegendPosition, Palette, RenderOptions, TaskRow};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn render(today: Option<NaiveDate>) -> (Vec<u8>, u32, u32, usize) {
    let rows = vec![
        TaskRow::new("Phase one", "Phase", d(2024, 1, 1), d(2024, 2, 1), Some(1.0)),
        TaskRow::new("Task one", "Task", d(2024, 1, 8), d(2024, 1, 29), Some(0.5)),
    ];
    let chart = GanttChart::new(prepare(&rows, &Palette::default()).unwrap());

    let mut opts = RenderOptions::default();
    opts.width = 640;
    opts.height = 320;
    opts.today = today;
    opts.draw_labels = false; // avoid font variance
    chart.render_to_rgba8(&opts).expect("rgba render")
}

fn near(px: &[u8], rgb: (u8, u8, u8)) -> bool {
    let diff = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 2;
    diff(px[0], rgb.0) && diff(px[1], rgb.1) && diff(px[2], rgb.2) && px[3] == 255
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = render(None);
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Light theme background in the top-left pixel (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn completed_bars_use_category_colors() {
    let (px, _, _, _) = render(None);
    let pixels: Vec<&[u8]> = px.chunks_exact(4).collect();

    // Fully completed phase: solid color under a same-color half-alpha overlay.
    assert!(pixels.iter().any(|p| near(p, (0x00, 0xcd, 0x95))), "phase color present");
    assert!(pixels.iter().any(|p| near(p, (0x63, 0x6e, 0xfb))), "task color present");
}

#[test]
fn today_marker_changes_pixels() {
    let (without, ..) = render(None);
    let (with, ..) = render(Some(d(2024, 1, 20)));
    assert_ne!(without, with);
}

fn pixel(px: &[u8], w: u32, x: f32, y: f32) -> &[u8] {
    let i = (y as usize * w as usize + x as usize) * 4;
    &px[i..i + 4]
}

fn blend_over_white(c: u8) -> u8 {
    ((c as f32 * 128.0 + 255.0 * 127.0) / 255.0).round() as u8
}

#[test]
fn bar_pixels_follow_completion_and_duration() {
    // Tuesday to Saturday: no Monday grid line falls inside the plot.
    let rows = vec![
        TaskRow::new("Alpha", "Task", d(2024, 1, 2), d(2024, 1, 6), Some(0.5)),
        TaskRow::new("Beta", "Phase", d(2024, 1, 2), d(2024, 1, 6), Some(0.25)),
    ];
    let palette = Palette::default();
    let chart = GanttChart::new(prepare(&rows, &palette).unwrap());

    let mut opts = RenderOptions::default();
    opts.width = 640;
    opts.height = 320;
    opts.today = None;
    opts.legend_position = LegendPosition::Disabled;
    opts.draw_labels = false;

    let rects = chart.bar_rects(&opts).unwrap();
    let (px, w, _, _) = chart.render_to_rgba8(&opts).unwrap();

    for (bar, r) in chart.bars.iter().zip(&rects) {
        assert_eq!(r.done.left, r.full.left);
        let ratio = (r.done.right - r.done.left) / (r.full.right - r.full.left);
        assert!((ratio as f64 - bar.completion).abs() < 1e-3, "{}: ratio {ratio}", bar.task);

        let c = bar.color;
        let y = r.full.center_y().floor();
        let solid = (c.r, c.g, c.b);
        let faint = (blend_over_white(c.r), blend_over_white(c.g), blend_over_white(c.b));
        let near3 = |p: &[u8], rgb: (u8, u8, u8)| {
            let diff = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 3;
            diff(p[0], rgb.0) && diff(p[1], rgb.1) && diff(p[2], rgb.2)
        };

        let mid_done = (r.done.left + r.done.right) * 0.5;
        assert!(near(pixel(&px, w, mid_done, y), solid), "{}: solid inside completed part", bar.task);
        assert!(near(pixel(&px, w, r.done.right.floor() - 3.0, y), solid), "{}: solid before completion edge", bar.task);

        let after_done = r.done.right.ceil() + 2.0;
        assert!(near3(pixel(&px, w, after_done, y), faint), "{}: faint after completion edge", bar.task);
        let mid_rest = (r.done.right + r.full.right) * 0.5;
        assert!(near3(pixel(&px, w, mid_rest, y), faint), "{}: faint remainder", bar.task);
        assert!(near3(pixel(&px, w, r.full.right.floor() - 3.0, y), faint), "{}: faint before end", bar.task);

        assert_eq!(pixel(&px, w, r.full.right.ceil() + 3.0, y), &[255, 255, 255, 255], "{}: background past end", bar.task);
    }

    // The first bar in sort order sits in lane 0, nearest the time axis.
    assert!(rects[0].full.top > rects[1].full.top);
}
