// File: crates/chart-animate/src/configure.rs
// Summary: Fixed axis framing derived once from the full series and re-applied to every frame.

use chart_core::{arange, Axis, Chart, Tick, TickStyle};
use log::debug;

use crate::error::{AnimateError, Result};
use crate::samples::SampleSeries;

pub const X_LABEL: &str = "Interval";
pub const Y_LABEL: &str = "Value";

/// Tick styling shared by both axes: labels rotated 45°.
pub fn tick_style() -> TickStyle {
    TickStyle {
        rotation_deg: 45.0,
        font_size: 11.0,
        mark_len: 6.0,
        mark_width: 1.2,
        color: None,
    }
}

/// Everything one axis needs to render identically in every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub label: String,
    pub ticks: Vec<Tick>,
    pub min: f64,
    pub max: f64,
    pub grid: bool,
    pub autoscale: bool,
    pub tick_style: TickStyle,
}

impl AxisConfig {
    fn apply(&self, axis: &mut Axis) {
        axis.label.clone_from(&self.label);
        axis.set_bounds(self.min, self.max);
        axis.autoscale = self.autoscale;
        axis.set_ticks(self.ticks.clone());
        axis.grid = self.grid;
        axis.tick_style = self.tick_style;
    }
}

/// Axis framing for the whole animation. Never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub x: AxisConfig,
    pub y: AxisConfig,
    y_tick_step: f64,
}

impl ChartConfig {
    /// Derive ticks and bounds from the full series.
    ///
    /// X gets one tick per sample at `1..=len`. Y steps by `floor(max_y / 10)`
    /// from 0 up to `ceil(max_y) + 1` (exclusive). A step that floors to zero
    /// is reported as [`chart_core::ChartError::InvalidTickStep`]; it is never rounded up.
    pub fn from_samples(series: &SampleSeries) -> Result<Self> {
        let max_y = series.max_y().ok_or(AnimateError::EmptySeries)?;
        let n = series.len();

        let x_ticks = (1..=n).map(|i| Tick::new(i as f64, i.to_string())).collect();
        let x = AxisConfig {
            label: X_LABEL.to_string(),
            ticks: x_ticks,
            min: 1.0,
            max: n as f64,
            grid: true,
            autoscale: false,
            tick_style: tick_style(),
        };

        let step = (max_y / 10.0).floor();
        let upper = max_y.ceil() + 1.0;
        let y_ticks = match arange(0.0, upper, step) {
            Ok(values) => values.into_iter().map(Tick::at).collect(),
            Err(e) => {
                debug!("max_y {max_y} gives unusable y tick step {step}");
                return Err(e.into());
            }
        };
        let y = AxisConfig {
            label: Y_LABEL.to_string(),
            ticks: y_ticks,
            min: 0.0,
            max: upper,
            grid: true,
            autoscale: false,
            tick_style: tick_style(),
        };

        debug!("axis config: x [1, {n}], y [0, {upper}] step {step}");
        Ok(Self { x, y, y_tick_step: step })
    }

    /// Write the framing into `chart`. Safe to call any number of times.
    pub fn apply(&self, chart: &mut Chart) {
        self.x.apply(&mut chart.x_axis);
        self.y.apply(&mut chart.y_axis);
    }

    pub fn y_tick_step(&self) -> f64 { self.y_tick_step }

    pub fn y_upper_bound(&self) -> f64 { self.y.max }
}
