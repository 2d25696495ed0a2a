// File: crates/gantt-core/src/scale.rs
// Summary: Day (X) and lane (Y) transforms from chart coordinates to pixels.

/// Horizontal scale: days from the project start, at a fixed pixel spacing per day.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub start_day: f64,
    pub day_spacing: f32,
}

impl TimeScale {
    pub fn new(left_px: f32, start_day: f64, day_spacing: f32) -> Self {
        Self { left_px, start_day, day_spacing: day_spacing.max(0.01) }
    }

    /// Fit `[start_day, end_day]` into `[left_px, right_px]`.
    pub fn fit(left_px: f32, right_px: f32, start_day: f64, end_day: f64) -> Self {
        let span = (end_day - start_day).max(1e-9);
        Self::new(left_px, start_day, ((right_px - left_px) as f64 / span) as f32)
    }

    #[inline]
    pub fn to_px(&self, day: f64) -> f32 {
        self.left_px + ((day - self.start_day) as f32) * self.day_spacing
    }
}

/// Vertical scale mapping lane coordinates to `[top, bottom]` pixels, lane 0 at the bottom.
#[derive(Clone, Copy, Debug)]
pub struct LaneScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LaneScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    /// Pixel height of `lanes` lane units.
    #[inline]
    pub fn len_px(&self, lanes: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        (lanes / span) as f32 * (self.bottom_px - self.top_px)
    }
}
