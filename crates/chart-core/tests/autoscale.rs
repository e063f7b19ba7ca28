// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate auto domain over device lines with gaps.

use chart_core::{align_series, Chart, DeviceSeries, Reading, Series, ViewState};
use skia_safe::Color;

#[test]
fn autoscale_spans_all_devices() {
    let table = align_series(&[
        DeviceSeries::new("A", vec![Reading::new("1970-01-01T00:00:00Z", 1.0), Reading::new("1970-01-01T00:00:05Z", 3.0)]),
        DeviceSeries::new("B", vec![Reading::new("1970-01-01T00:00:02Z", 6.0), Reading::new("1970-01-01T00:00:03Z", -1.0)]),
    ])
    .unwrap();
    let chart = Chart::from_table(&table);

    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 5_000.0);
    // 2% margin around [-1, 6]
    assert!(chart.y_axis.min < -1.0 && chart.y_axis.min > -1.2);
    assert!(chart.y_axis.max > 6.0 && chart.y_axis.max < 6.2);
}

#[test]
fn gaps_do_not_affect_extents() {
    let mut chart = Chart::new();
    chart.add_series(Series::new("d", Color::BLACK).with_points(vec![(0.0, None), (1.0, Some(2.0)), (9.0, None)]));
    let v = ViewState::from_chart(&chart);
    assert_eq!(v.x_min, 1.0);
    // flat span widened by one unit
    assert_eq!(v.x_max, 2.0);
}

#[test]
fn empty_chart_falls_back_to_unit_square() {
    let v = ViewState::from_chart(&Chart::new());
    assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
}
