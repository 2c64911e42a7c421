// File: crates/chart-core/src/ticks.rs
// Summary: Tick layout helpers: evenly spaced ranges, stepped ranges, and label formatting.

use crate::error::{ChartError, Result};

/// `steps` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Half-open range `[start, stop)` advancing by `step`.
///
/// A zero, negative, or non-finite step never terminates, so it is reported
/// as [`ChartError::InvalidTickStep`] instead of being adjusted.
/// `stop <= start` yields an empty range.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidTickStep(step));
    }
    if stop <= start {
        return Ok(Vec::new());
    }
    // Index-based so accumulated float error cannot add or drop a tick.
    let n = ((stop - start) / step).ceil() as usize;
    Ok((0..n)
        .map(|i| start + step * i as f64)
        .filter(|v| *v < stop)
        .collect())
}

/// Integers print without a fractional part; everything else keeps one decimal.
pub fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.1}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(0.0, 10.0, 6);
        assert_eq!(v, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn arange_is_half_open() {
        let v = arange(0.0, 31.0, 3.0).unwrap();
        assert_eq!(v.first(), Some(&0.0));
        assert_eq!(v.last(), Some(&30.0));
        assert_eq!(v.len(), 11);

        let exact = arange(0.0, 9.0, 3.0).unwrap();
        assert_eq!(exact, vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn arange_rejects_zero_step() {
        match arange(0.0, 10.0, 0.0) {
            Err(ChartError::InvalidTickStep(s)) => assert_eq!(s, 0.0),
            other => panic!("expected invalid step, got {:?}", other),
        }
        assert!(arange(0.0, 10.0, -1.0).is_err());
        assert!(arange(0.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn arange_empty_when_stop_not_after_start() {
        assert!(arange(5.0, 5.0, 1.0).unwrap().is_empty());
        assert!(arange(5.0, 1.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(-12.0), "-12");
        assert_eq!(format_tick(2.5), "2.5");
    }
}
