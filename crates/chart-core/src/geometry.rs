// File: crates/chart-core/src/geometry.rs
// Summary: Plot-area rectangle and data-to-pixel mapping.

use crate::axis::Axis;
use crate::types::Insets;

/// Pixel rectangle the data is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Surface minus insets. Collapses to a zero-size rect rather than inverting.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left);
        let bottom = (height as f32 - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    #[inline]
    pub fn map_x(&self, axis: &Axis, x: f64) -> f32 {
        self.left + ((x - axis.min) / axis.span()) as f32 * self.width()
    }

    #[inline]
    pub fn map_y(&self, axis: &Axis, y: f64) -> f32 {
        self.bottom - ((y - axis.min) / axis.span()) as f32 * self.height()
    }
}
