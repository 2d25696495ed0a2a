// File: crates/gantt-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, bar proportions).

/// Default surface width in pixels (16in at 100 dpi).
pub const WIDTH: i32 = 1600;
/// Default surface height in pixels (6in at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Fraction of a lane covered by a bar.
pub const BAR_HEIGHT: f64 = 0.8;
/// Share of the data span added on each side of the x range.
pub const X_MARGIN: f64 = 0.05;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(16, 24, 16, 56)
    }
}
