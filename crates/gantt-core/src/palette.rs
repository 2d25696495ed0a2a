// File: crates/gantt-core/src/palette.rs
// Summary: Category -> color mapping, validated when built instead of failing on lookup.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::{GanttError, GanttResult};
use crate::task::Category;

/// Opaque RGB color written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_skia(self, alpha: u8) -> skia::Color {
        skia::Color::from_argb(alpha, self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = GanttError;

    /// Any opaque CSS color; a bare `rrggbb` is read as hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let css = if raw.len() == 6 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            format!("#{raw}")
        } else {
            raw.to_string()
        };
        let c = css
            .parse::<css_color_parser2::Color>()
            .map_err(|_| GanttError::InvalidColor(s.to_string()))?;
        if c.a < 1.0 {
            return Err(GanttError::InvalidColor(s.to_string()));
        }
        Ok(Self::new(c.r, c.g, c.b))
    }
}

/// One color per category. Construction is the only place categories are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub phase: HexColor,
    pub task: HexColor,
    pub deadline: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            phase: HexColor::new(0x00, 0xcd, 0x95),
            task: HexColor::new(0x63, 0x6e, 0xfb),
            deadline: HexColor::new(0xef, 0x55, 0x3b),
        }
    }
}

impl Palette {
    pub fn color(&self, category: Category) -> HexColor {
        match category {
            Category::Phase => self.phase,
            Category::Task => self.task,
            Category::Deadline => self.deadline,
        }
    }

    pub fn set(&mut self, category: Category, color: HexColor) {
        match category {
            Category::Phase => self.phase = color,
            Category::Task => self.task = color,
            Category::Deadline => self.deadline = color,
        }
    }

    /// Categories and colors in legend order.
    pub fn entries(&self) -> [(Category, HexColor); 3] {
        Category::ALL.map(|c| (c, self.color(c)))
    }

    /// Apply `Category=<color>` overrides on top of the default table.
    pub fn with_overrides<I, S>(overrides: I) -> GanttResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Self::default();
        for entry in overrides {
            let entry = entry.as_ref();
            let (name, color) = entry
                .split_once('=')
                .ok_or_else(|| GanttError::InvalidColor(entry.to_string()))?;
            let category = name.parse::<Category>().map_err(|value| GanttError::UnknownCategory {
                task: "<palette>".to_string(),
                value,
            })?;
            palette.set(category, color.parse()?);
        }
        Ok(palette)
    }
}
