// File: crates/chart-animate/src/animator.rs
// Summary: Frame loop: reset chart, re-apply framing, plot prefix, encode to buffer, decode, collect.

use std::path::PathBuf;

use chart_core::{Chart, RenderOptions, Series, TextShaper};
use image::RgbaImage;
use log::{debug, info, warn};
use rand::Rng;

use crate::buffer::FrameBuffer;
use crate::config::AnimationConfig;
use crate::configure::ChartConfig;
use crate::decode::decode_frame;
use crate::encode::write_gif;
use crate::error::{AnimateError, Result};
use crate::samples::SampleSeries;

/// Above this much decoded frame data a run is likely to thrash.
const FRAME_MEMORY_WARN_BYTES: u64 = 512 * 1024 * 1024;

/// Owns everything the frame loop touches: chart context, framing, and the shared buffer.
pub struct Animator {
    series: SampleSeries,
    config: ChartConfig,
    chart: Chart,
    opts: RenderOptions,
    shaper: Option<TextShaper>,
    buffer: FrameBuffer,
}

impl Animator {
    /// Computes the axis framing once; it is not recomputed per frame.
    pub fn new(series: SampleSeries, opts: RenderOptions) -> Result<Self> {
        let config = ChartConfig::from_samples(&series)?;
        let shaper = opts.draw_labels.then(TextShaper::new);
        Ok(Self {
            series,
            config,
            chart: Chart::new(),
            opts,
            shaper,
            buffer: FrameBuffer::with_capacity(64 * 1024),
        })
    }

    pub fn series(&self) -> &SampleSeries { &self.series }

    pub fn config(&self) -> &ChartConfig { &self.config }

    /// Chart state as left by the last rendered frame.
    pub fn chart(&self) -> &Chart { &self.chart }

    pub fn buffer(&self) -> &FrameBuffer { &self.buffer }

    /// `len + 1`: frame 0 is the empty chart.
    pub fn frame_count(&self) -> usize { self.series.len() + 1 }

    /// Draw the first `z` points and leave the PNG bytes in the shared buffer.
    pub fn render_frame(&mut self, z: usize) -> Result<()> {
        self.chart.reset();
        self.config.apply(&mut self.chart);
        self.chart.add_series(Series::line(self.series.prefix(z)));
        // Pinned axes ignore this; an unpinned one would follow the prefix.
        self.chart.autoscale_axes(0.05);

        self.buffer.reset();
        self.chart
            .render_png_into_with(&self.opts, self.shaper.as_ref(), &mut self.buffer)?;
        debug!("frame {z}: {} PNG bytes", self.buffer.len());
        Ok(())
    }

    /// Render frame `z` and decode it back into pixels.
    pub fn frame(&mut self, z: usize) -> Result<RgbaImage> {
        self.render_frame(z)?;
        decode_frame(&mut self.buffer)
    }

    /// Every frame `0..=len`, in order. All frames must share frame 0's size.
    pub fn render_frames(&mut self) -> Result<Vec<RgbaImage>> {
        let count = self.frame_count();
        let mut frames: Vec<RgbaImage> = Vec::with_capacity(count);
        for z in 0..count {
            let frame = self.frame(z)?;
            if let Some(first) = frames.first().map(RgbaImage::dimensions) {
                if frame.dimensions() != first {
                    return Err(AnimateError::FrameSizeMismatch {
                        index: z,
                        got: frame.dimensions(),
                        want: first,
                    });
                }
            }
            frames.push(frame);
        }
        info!("rendered {} frames", frames.len());
        Ok(frames)
    }
}

/// Outcome of a completed run.
#[derive(Clone, Debug)]
pub struct AnimationReport {
    pub output: PathBuf,
    pub frames: usize,
    pub width: u32,
    pub height: u32,
    pub bytes_written: u64,
    pub y_upper_bound: f64,
    pub y_tick_step: f64,
}

/// Generate samples, render every frame in memory, and write the GIF once.
pub fn run<R: Rng + ?Sized>(config: &AnimationConfig, rng: &mut R) -> Result<AnimationReport> {
    if config.intervals == 0 {
        return Err(AnimateError::NoIntervals);
    }
    if config.frame_memory_bytes() > FRAME_MEMORY_WARN_BYTES {
        warn!(
            "{} frames at {}x{} hold ~{} MiB of pixels before encoding",
            config.frame_count(),
            config.render.width,
            config.render.height,
            config.frame_memory_bytes() / (1024 * 1024)
        );
    }

    let series = SampleSeries::generate(config.intervals, rng);
    info!(
        "generated {} samples, max y {:.2}",
        series.len(),
        series.max_y().unwrap_or(0.0)
    );

    let mut animator = Animator::new(series, config.render.clone())?;
    let y_upper_bound = animator.config().y_upper_bound();
    let y_tick_step = animator.config().y_tick_step();

    let frames = animator.render_frames()?;
    let (width, height) = frames.first().map(RgbaImage::dimensions).unwrap_or((0, 0));
    let count = frames.len();
    let bytes_written = write_gif(frames, &config.output, &config.gif)?;

    Ok(AnimationReport {
        output: config.output.clone(),
        frames: count,
        width,
        height,
        bytes_written,
        y_upper_bound,
        y_tick_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn small_opts() -> RenderOptions {
        let mut opts = RenderOptions::default();
        opts.width = 240;
        opts.height = 160;
        opts.draw_labels = false;
        opts
    }

    fn animator(n: usize) -> Animator {
        let series = SampleSeries::generate(n, &mut StepRng::new(0, 0));
        Animator::new(series, small_opts()).unwrap()
    }

    #[test]
    fn frame_plots_exact_prefix() {
        let mut a = animator(4);
        for z in 0..=4 {
            a.render_frame(z).unwrap();
            let chart = a.chart();
            assert_eq!(chart.series.len(), 1);
            assert_eq!(chart.series[0].data_xy, a.series().prefix(z));
        }
    }

    #[test]
    fn framing_is_fixed_across_frames() {
        let mut a = animator(3);
        for z in 0..=3 {
            a.render_frame(z).unwrap();
            let chart = a.chart();
            assert_eq!((chart.x_axis.min, chart.x_axis.max), (1.0, 3.0));
            assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 31.0));
            assert_eq!(chart.y_axis.ticks, a.config().y.ticks);
        }
    }

    #[test]
    fn buffer_holds_only_latest_frame() {
        let mut a = animator(3);
        a.render_frame(3).unwrap();
        a.render_frame(0).unwrap();
        let fresh = a.chart().render_to_png_bytes(&small_opts()).unwrap();
        assert!(fresh.starts_with(&[137, 80, 78, 71]));
        assert_eq!(a.buffer().as_bytes(), fresh.as_slice());
    }

    #[test]
    fn frame_zero_is_blank_plot() {
        let mut a = animator(3);
        let empty = a.frame(0).unwrap();
        let one = a.frame(1).unwrap();
        let full = a.frame(3).unwrap();
        // A single point draws no line.
        assert_eq!(empty.as_raw(), one.as_raw());
        assert_ne!(empty.as_raw(), full.as_raw());
    }

    #[test]
    fn zero_intervals_rejected() {
        let mut cfg = AnimationConfig::default();
        cfg.intervals = 0;
        let err = run(&cfg, &mut StepRng::new(0, 0)).unwrap_err();
        assert!(matches!(err, AnimateError::NoIntervals));
    }
}
