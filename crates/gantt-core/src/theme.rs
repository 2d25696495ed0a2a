// File: crates/gantt-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, grid, axes, labels, today marker).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid_major: skia::Color,
    pub grid_minor: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub today_marker: skia::Color,
    pub in_bar_text: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid_major: skia::Color::from_argb(51, 0, 0, 0),
            grid_minor: skia::Color::from_argb(51, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            today_marker: skia::Color::from_argb(128, 0, 0, 0),
            in_bar_text: skia::Color::from_argb(204, 255, 255, 255),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid_major: skia::Color::from_argb(80, 200, 200, 210),
            grid_minor: skia::Color::from_argb(40, 200, 200, 210),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            today_marker: skia::Color::from_argb(128, 255, 230, 70),
            in_bar_text: skia::Color::from_argb(204, 255, 255, 255),
            legend_fill: skia::Color::from_argb(204, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
