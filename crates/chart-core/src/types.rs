// File: crates/chart-core/src/types.rs
// Summary: Shared sizes and paddings.

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Space reserved under the plot for the legend row, in pixels.
pub const LEGEND_HEIGHT: u32 = 28;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Chart margins plus room for axis ticks and the legend.
    fn default() -> Self {
        Self::new(20 + 60, 30, 5 + 10, 5 + 40 + LEGEND_HEIGHT)
    }
}
