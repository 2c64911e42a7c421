// File: crates/chart-core/tests/autoscale.rs
// Purpose: Pinned axes keep their framing while free axes follow the data.

use chart_core::{Chart, Series};

#[test]
fn pinned_axes_survive_growing_data() {
    let mut chart = Chart::new();
    chart.x_axis.set_bounds(1.0, 5.0);
    chart.y_axis.set_bounds(0.0, 51.0);

    let data = [(1.0, 12.0), (2.0, 27.0), (3.0, 33.0), (4.0, 41.0), (5.0, 50.0)];
    for z in 0..=data.len() {
        chart.series.clear();
        chart.add_series(Series::line(data[..z].to_vec()));
        chart.autoscale_axes(0.05);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (1.0, 5.0));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 51.0));
    }
}

#[test]
fn free_axes_follow_data() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::line(vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}
