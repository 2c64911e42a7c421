// File: crates/chart-animate/src/error.rs
// Summary: Error type for the frame pipeline; wraps chart, image, and IO failures.

use chart_core::ChartError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimateError {
    #[error("chart: {0}")]
    Chart(#[from] ChartError),

    #[error("image: {0}")]
    Image(#[from] image::ImageError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("interval count must be at least 1")]
    NoIntervals,

    #[error("sample series is empty")]
    EmptySeries,

    #[error("series length mismatch: {xs} x values vs {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("no frames to encode")]
    NoFrames,

    #[error("frame {index} is {got:?} (w, h), expected {want:?}")]
    FrameSizeMismatch { index: usize, got: (u32, u32), want: (u32, u32) },
}

pub type Result<T> = std::result::Result<T, AnimateError>;
