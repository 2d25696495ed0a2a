// File: crates/gantt-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        // width of the longest line
        p.longest_line()
    }

    /// Draw with the baseline at `y`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let mut p = self.layout(text, size, color, bold);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size, false);
        self.draw_left(canvas, text, x - w, y, size, color, false);
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let w = self.measure_width(text, size, bold);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color, bold);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

/// Width estimate used when labels are disabled, so layout stays font-independent.
pub fn estimate_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.55
}
