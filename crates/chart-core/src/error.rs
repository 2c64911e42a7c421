// File: crates/chart-core/src/error.rs
// Summary: Error type shared by chart construction and rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("surface pixels are not addressable")]
    PeekPixels,

    #[error("PNG encode failed")]
    PngEncode,

    #[error("reading back surface pixels failed")]
    ReadPixels,

    /// A tick range was requested with a step that cannot advance.
    #[error("invalid tick step {0}: step must be finite and greater than zero")]
    InvalidTickStep(f64),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
