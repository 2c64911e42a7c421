// File: crates/chart-animate/src/config.rs
// Summary: Run configuration for one animation: frame count, output, raster and GIF options.

use std::path::PathBuf;

use chart_core::RenderOptions;

use crate::encode::GifOptions;

/// Default number of intervals; the animation has one more frame than this.
pub const DEFAULT_INTERVALS: usize = 50;
/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "line_growth.gif";

#[derive(Clone, Debug)]
pub struct AnimationConfig {
    pub intervals: usize,
    pub output: PathBuf,
    pub render: RenderOptions,
    pub gif: GifOptions,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVALS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            render: RenderOptions::default(),
            gif: GifOptions::default(),
        }
    }
}

impl AnimationConfig {
    /// Frames produced for this configuration (`intervals + 1`).
    pub fn frame_count(&self) -> usize {
        self.intervals + 1
    }

    /// Decoded RGBA bytes held in memory before the single GIF encode.
    pub fn frame_memory_bytes(&self) -> u64 {
        let w = self.render.width.max(0) as u64;
        let h = self.render.height.max(0) as u64;
        w * h * 4 * self.frame_count() as u64
    }
}
