// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, fixed bounds, explicit ticks, grid, and tick styling.

use skia_safe as skia;

use crate::ticks::format_tick;

/// A single tick: position in data space plus the text drawn next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }

    /// Tick labelled with its own value.
    pub fn at(value: f64) -> Self {
        Self { value, label: format_tick(value) }
    }
}

/// Visual styling for tick marks and their labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    /// Counter-clockwise label rotation in degrees.
    pub rotation_deg: f32,
    pub font_size: f32,
    /// Outward length of the tick mark, in pixels.
    pub mark_len: f32,
    pub mark_width: f32,
    /// Overrides the theme's tick color when set.
    pub color: Option<skia::Color>,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self { rotation_deg: 0.0, font_size: 12.0, mark_len: 5.0, mark_width: 1.0, color: None }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Explicit tick positions. Empty means evenly spaced default ticks.
    pub ticks: Vec<Tick>,
    pub grid: bool,
    /// When false, bounds stay put no matter what data is plotted.
    pub autoscale: bool,
    pub tick_style: TickStyle,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: Vec::new(),
            grid: true,
            autoscale: true,
            tick_style: TickStyle::default(),
        }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    /// Set bounds and stop autoscaling, like pinning limits by hand.
    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
        self.autoscale = false;
    }

    pub fn set_ticks(&mut self, ticks: Vec<Tick>) {
        self.ticks = ticks;
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    pub fn contains(&self, v: f64) -> bool {
        let eps = self.span() * 1e-9;
        v >= self.min - eps && v <= self.max + eps
    }

    /// Ticks to draw: explicit ones inside the bounds, or `fallback` evenly spaced ones.
    pub fn visible_ticks(&self, fallback: usize) -> Vec<Tick> {
        if self.ticks.is_empty() {
            crate::ticks::linspace(self.min, self.max, fallback)
                .into_iter()
                .map(Tick::at)
                .collect()
        } else {
            self.ticks.iter().filter(|t| self.contains(t.value)).cloned().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bounds_disables_autoscale() {
        let mut a = Axis::new("v", 0.0, 1.0);
        assert!(a.autoscale);
        a.set_bounds(0.0, 31.0);
        assert!(!a.autoscale);
        assert_eq!((a.min, a.max), (0.0, 31.0));
    }

    #[test]
    fn explicit_ticks_outside_bounds_are_hidden() {
        let mut a = Axis::new("v", 1.0, 3.0);
        a.set_ticks(vec![Tick::at(0.0), Tick::at(1.0), Tick::at(3.0), Tick::at(4.0)]);
        let vis: Vec<f64> = a.visible_ticks(5).iter().map(|t| t.value).collect();
        assert_eq!(vis, vec![1.0, 3.0]);
    }

    #[test]
    fn default_ticks_span_bounds() {
        let a = Axis::new("v", 0.0, 4.0);
        let vis = a.visible_ticks(5);
        assert_eq!(vis.len(), 5);
        assert_eq!(vis[4].label, "4");
    }

    #[test]
    fn degenerate_span_stays_positive() {
        let a = Axis::new("v", 1.0, 1.0);
        assert!(a.span() > 0.0);
        assert!(a.contains(1.0));
    }
}
