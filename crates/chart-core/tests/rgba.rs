// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::line(vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is outside the plot area: pure background.
    let bg = opts.theme.background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn rgba_matches_png_decode() {
    let mut chart = Chart::new();
    chart.x_axis.set_bounds(1.0, 5.0);
    chart.y_axis.set_bounds(0.0, 51.0);
    chart.add_series(Series::line(vec![(1.0, 10.0), (2.0, 25.0), (3.0, 31.0)]));

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false;

    let (px, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba");
    let png = chart.render_to_png_bytes(&opts).expect("png");
    let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (w, h));
    assert_eq!(decoded.as_raw(), &px);
}
