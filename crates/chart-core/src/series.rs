// File: crates/chart-core/src/series.rs
// Summary: Line series model: ordered (x, y) points plus stroke styling.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub stroke_width: f32,
    /// Overrides the theme's line color when set.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn new() -> Self {
        Self::line(Vec::new())
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, stroke_width: 2.0, color: None }
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Bounding box `(x_min, x_max, y_min, y_max)` of finite points, if any.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}

impl Default for Series {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_non_finite() {
        let s = Series::line(vec![(1.0, 5.0), (f64::NAN, 100.0), (3.0, -2.0)]);
        assert_eq!(s.extent(), Some((1.0, 3.0, -2.0, 5.0)));
    }

    #[test]
    fn empty_has_no_extent() {
        assert!(Series::new().extent().is_none());
    }
}
