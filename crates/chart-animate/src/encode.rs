// File: crates/chart-animate/src/encode.rs
// Summary: Collected RGBA frames -> one animated GIF, written in a single pass.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use log::{debug, info};

use crate::error::{AnimateError, Result};

/// How many times the animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopMode {
    Infinite,
    /// Plays `n` extra times after the first pass; `Finite(0)` plays once.
    Finite(u16),
}

impl LoopMode {
    /// Netscape loop extension to write, if any. A loop count of 0 means
    /// "forever" to decoders, so a single pass writes no extension at all.
    pub fn to_repeat(self) -> Option<Repeat> {
        match self {
            LoopMode::Infinite => Some(Repeat::Infinite),
            LoopMode::Finite(0) => None,
            LoopMode::Finite(n) => Some(Repeat::Finite(n)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifOptions {
    /// Display time of each frame.
    pub delay_ms: u32,
    pub repeat: LoopMode,
    /// Palette quantization speed, 1 (best) ..= 30 (fastest).
    pub speed: i32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self { delay_ms: 100, repeat: LoopMode::Infinite, speed: 10 }
    }
}

/// Encode `frames`, in order, as a GIF into `writer`.
pub fn encode_gif<W: Write>(frames: Vec<RgbaImage>, writer: W, opts: &GifOptions) -> Result<()> {
    if frames.is_empty() {
        return Err(AnimateError::NoFrames);
    }
    let count = frames.len();
    let delay = Delay::from_numer_denom_ms(opts.delay_ms, 1);

    let mut encoder = GifEncoder::new_with_speed(writer, opts.speed.clamp(1, 30));
    if let Some(repeat) = opts.repeat.to_repeat() {
        encoder.set_repeat(repeat)?;
    }
    encoder.encode_frames(frames.into_iter().map(|img| Frame::from_parts(img, 0, 0, delay)))?;
    // The trailer is written when the encoder goes away.
    drop(encoder);

    debug!("encoded {count} GIF frames at {} ms", opts.delay_ms);
    Ok(())
}

/// Encode `frames` to a GIF file at `path`. Returns the file size in bytes.
pub fn write_gif(frames: Vec<RgbaImage>, path: impl AsRef<Path>, opts: &GifOptions) -> Result<u64> {
    let path = path.as_ref();
    if frames.is_empty() {
        return Err(AnimateError::NoFrames);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let count = frames.len();
    let mut out = BufWriter::new(File::create(path)?);
    encode_gif(frames, &mut out, opts)?;
    out.flush()?;
    drop(out);

    let size = std::fs::metadata(path)?.len();
    info!("wrote {} ({} frames, {} bytes)", path.display(), count, size);
    Ok(size)
}
