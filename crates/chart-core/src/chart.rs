// File: crates/chart-core/src/chart.rs
// Summary: Owned chart context and headless PNG/RGBA rendering using Skia CPU raster surfaces.

use std::io::Write;
use std::path::Path;

use log::{debug, trace};
use skia_safe as skia;

use crate::axis::{Axis, Tick};
use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels and axis titles. Off gives font-independent pixels.
    pub draw_labels: bool,
    /// Number of evenly spaced ticks for axes without explicit ticks.
    pub default_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            default_ticks: 6,
        }
    }
}

/// Explicitly owned drawing context: axes plus the series plotted on them.
///
/// Nothing here is global. A frame loop holds one `Chart`, calls
/// [`Chart::reset`] between frames, and re-applies its axis configuration.
#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Drop every plotted element and restore default axes.
    pub fn reset(&mut self) {
        self.series.clear();
        self.x_axis = Axis::default_x();
        self.y_axis = Axis::default_y();
    }

    /// Fit bounds of autoscaling axes to the plotted data, padded by `margin` of the span.
    /// Axes with `autoscale == false` are left untouched.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let extent = self
            .series
            .iter()
            .filter_map(Series::extent)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));
        let Some((mut x_min, mut x_max, mut y_min, mut y_max)) = extent else {
            return;
        };
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        if self.x_axis.autoscale {
            let m = (x_max - x_min) * margin;
            x_min -= m;
            x_max += m;
            self.x_axis.min = x_min;
            self.x_axis.max = x_max;
        }
        if self.y_axis.autoscale {
            let m = (y_max - y_min) * margin;
            y_min -= m;
            y_max += m;
            self.y_axis.min = y_min;
            self.y_axis.max = y_max;
        }
    }

    /// Paint the whole chart onto `canvas`. Labels are drawn only when a shaper is given.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, shaper: Option<&TextShaper>) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = PlotRect::inset(opts.width, opts.height, &opts.insets);
        let x_ticks = self.x_axis.visible_ticks(opts.default_ticks);
        let y_ticks = self.y_axis.visible_ticks(opts.default_ticks);

        draw_grid(canvas, &plot, &self.x_axis, &x_ticks, &self.y_axis, &y_ticks, theme);
        draw_axes(canvas, &plot, theme);
        draw_tick_marks(canvas, &plot, &self.x_axis, &x_ticks, &self.y_axis, &y_ticks, theme);

        if let Some(shaper) = shaper {
            draw_tick_labels(canvas, shaper, &plot, &self.x_axis, &x_ticks, &self.y_axis, &y_ticks, theme);
            draw_axis_titles(canvas, shaper, &plot, opts, &self.x_axis, &self.y_axis);
        }

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme);
        }
        canvas.restore();
    }

    fn rasterize(&self, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts, shaper);
        trace!(
            "rasterized {}x{} with {} series",
            opts.width,
            opts.height,
            self.series.len()
        );
        Ok(surface)
    }

    /// Render and PNG-encode into `writer`, reusing a caller-owned text shaper.
    pub fn render_png_into_with<W: Write>(
        &self,
        opts: &RenderOptions,
        shaper: Option<&TextShaper>,
        writer: &mut W,
    ) -> Result<()> {
        let shaper = if opts.draw_labels { shaper } else { None };
        let mut surface = self.rasterize(opts, shaper)?;
        let pixmap = surface.peek_pixels().ok_or(ChartError::PeekPixels)?;
        if !skia::png_encoder::encode(&pixmap, writer, &skia::png_encoder::Options::default()) {
            return Err(ChartError::PngEncode);
        }
        Ok(())
    }

    /// Render and PNG-encode into `writer`.
    pub fn render_png_into<W: Write>(&self, opts: &RenderOptions, writer: &mut W) -> Result<()> {
        let shaper = opts.draw_labels.then(TextShaper::new);
        self.render_png_into_with(opts, shaper.as_ref(), writer)
    }

    /// Render to an owned PNG byte vector.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.render_png_into(opts, &mut bytes)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let shaper = opts.draw_labels.then(TextShaper::new);
        let mut surface = self.rasterize(opts, shaper.as_ref())?;
        let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, w, h, stride))
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    x_ticks: &[Tick],
    y_axis: &Axis,
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, 1.0);
    if x_axis.grid {
        for t in x_ticks {
            let x = plot.map_x(x_axis, t.value);
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
    if y_axis.grid {
        for t in y_ticks {
            let y = plot.map_y(y_axis, t.value);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &paint);
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    x_ticks: &[Tick],
    y_axis: &Axis,
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let xs = &x_axis.tick_style;
    let paint = stroke_paint(xs.color.unwrap_or(theme.tick), xs.mark_width);
    for t in x_ticks {
        let x = plot.map_x(x_axis, t.value);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + xs.mark_len), &paint);
    }

    let ys = &y_axis.tick_style;
    let paint = stroke_paint(ys.color.unwrap_or(theme.tick), ys.mark_width);
    for t in y_ticks {
        let y = plot.map_y(y_axis, t.value);
        canvas.draw_line((plot.left - ys.mark_len, y), (plot.left, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &PlotRect,
    x_axis: &Axis,
    x_ticks: &[Tick],
    y_axis: &Axis,
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let xs = &x_axis.tick_style;
    let color = xs.color.unwrap_or(theme.axis_label);
    let y = plot.bottom + xs.mark_len + 4.0;
    for t in x_ticks {
        let x = plot.map_x(x_axis, t.value);
        if xs.rotation_deg == 0.0 {
            shaper.draw(canvas, &t.label, x, y + xs.font_size, xs.font_size, color, Anchor::Center);
        } else {
            shaper.draw_rotated(canvas, &t.label, x, y, xs.rotation_deg, xs.font_size, color, Anchor::End);
        }
    }

    let ys = &y_axis.tick_style;
    let color = ys.color.unwrap_or(theme.axis_label);
    let x = plot.left - ys.mark_len - 4.0;
    for t in y_ticks {
        let y = plot.map_y(y_axis, t.value);
        shaper.draw_rotated(canvas, &t.label, x, y, ys.rotation_deg, ys.font_size, color, Anchor::End);
    }
}

fn draw_axis_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &PlotRect,
    opts: &RenderOptions,
    x_axis: &Axis,
    y_axis: &Axis,
) {
    let size = 14.0;
    let color = opts.theme.axis_label;
    let cx = (plot.left + plot.right) * 0.5;
    shaper.draw(canvas, &x_axis.label, cx, opts.height as f32 - 8.0, size, color, Anchor::Center);
    let cy = (plot.top + plot.bottom) * 0.5;
    shaper.draw_rotated(canvas, &y_axis.label, 14.0, cy, 90.0, size, color, Anchor::Center);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((plot.map_x(x_axis, x0), plot.map_y(y_axis, y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((plot.map_x(x_axis, x), plot.map_y(y_axis, y)));
    }

    let mut stroke = stroke_paint(series.color.unwrap_or(theme.line_stroke), series.stroke_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}
