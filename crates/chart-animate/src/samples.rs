// File: crates/chart-animate/src/samples.rs
// Summary: Synthetic sample series: X = 1..=N, Y trending upward with uniform noise.

use rand::Rng;

use crate::error::{AnimateError, Result};

/// Two equal-length sequences, immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSeries {
    /// `x = 1..=intervals`, `y = x * 10 * (1 + u)` with `u` drawn from U[0, 1) per point.
    ///
    /// Randomness comes from `rng`, so a seeded or mock generator gives a
    /// reproducible series.
    pub fn generate<R: Rng + ?Sized>(intervals: usize, rng: &mut R) -> Self {
        let mut xs = Vec::with_capacity(intervals);
        let mut ys = Vec::with_capacity(intervals);
        for i in 1..=intervals {
            let x = i as f64;
            let u: f64 = rng.gen();
            xs.push(x);
            ys.push(x * 10.0 * (1.0 + u));
        }
        Self { xs, ys }
    }

    pub fn from_values(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(AnimateError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] { &self.xs }

    pub fn ys(&self) -> &[f64] { &self.ys }

    pub fn len(&self) -> usize { self.xs.len() }

    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// Largest Y value, ignoring NaN.
    pub fn max_y(&self) -> Option<f64> {
        self.ys.iter().copied().filter(|y| !y.is_nan()).reduce(f64::max)
    }

    /// First `z` points as (x, y) pairs; `z` past the end yields the whole series.
    pub fn prefix(&self, z: usize) -> Vec<(f64, f64)> {
        let z = z.min(self.len());
        self.xs[..z].iter().copied().zip(self.ys[..z].iter().copied()).collect()
    }
}
