use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use chartlet::chart::{LineChart, LinePoint, LineSeries};
use chartlet::core::Viewport;
use chartlet::render::{Color, RecordingSurface};

fn series(points: &[(f64, f64)]) -> LineSeries {
    LineSeries::new(Color::rgb8(0, 0, 255)).with_points(
        points
            .iter()
            .map(|&(x, y)| LinePoint::new(x, y))
            .collect(),
    )
}

fn chart_without_axis_text(points: &[(f64, f64)]) -> LineChart {
    let mut chart = LineChart::new();
    chart.set_show_axis_values(false);
    chart.add_series(series(points));
    chart
}

#[test]
fn points_map_linearly_into_the_usable_rect() {
    let mut chart = chart_without_axis_text(&[(0.0, 0.0), (10.0, 5.0), (20.0, 10.0)]);
    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(200, 100), &mut surface)
        .expect("draw");

    // With axis text disabled the usable rect is the whole viewport.
    let circles = surface.circles();
    let outer: Vec<_> = circles.iter().step_by(2).collect();
    assert_eq!(outer.len(), 3);
    assert_relative_eq!(outer[0].cx, 0.0);
    assert_relative_eq!(outer[0].cy, 100.0);
    assert_relative_eq!(outer[1].cx, 100.0);
    assert_relative_eq!(outer[1].cy, 50.0);
    assert_relative_eq!(outer[2].cx, 200.0);
    assert_relative_eq!(outer[2].cy, 0.0);
}

#[test]
fn stroke_segments_connect_adjacent_points() {
    let mut chart = chart_without_axis_text(&[(0.0, 0.0), (10.0, 5.0), (20.0, 10.0)]);
    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(200, 100), &mut surface)
        .expect("draw");

    // One grid baseline plus two series segments.
    let segments = surface.segments();
    assert_eq!(segments.len(), 3);
    assert_relative_eq!(segments[1].x1, 0.0);
    assert_relative_eq!(segments[1].x2, 100.0);
    assert_relative_eq!(segments[2].x2, 200.0);
}

#[test]
fn single_point_series_stays_finite() {
    let mut chart = chart_without_axis_text(&[(5.0, 5.0)]);
    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(100, 100), &mut surface)
        .expect("draw must not divide by zero");

    let circles = surface.circles();
    assert_relative_eq!(circles[0].cx, 0.0);
    assert_relative_eq!(circles[0].cy, 100.0);
}

#[test]
fn pinned_range_overrides_data_bounds() {
    let mut chart = chart_without_axis_text(&[(0.0, 5.0), (10.0, 5.0)]);
    chart.set_range(0.0, 10.0);
    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(100, 100), &mut surface)
        .expect("draw");

    // y = 5 of a pinned [0, 10] range sits at mid-height.
    assert_relative_eq!(surface.circles()[0].cy, 50.0);
}

#[test]
fn fill_series_emits_one_quad_per_segment() {
    let mut chart = chart_without_axis_text(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)]);
    chart.set_fill_series(Some(0));
    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(100, 100), &mut surface)
        .expect("draw");

    let polygons = surface.polygons();
    assert_eq!(polygons.len(), 2);
    assert_eq!(polygons[0].points.len(), 4);
    assert!(polygons[0].color.alpha < 0.2, "fill must be translucent");
}

#[test]
fn axis_values_emit_tick_labels_on_both_axes() {
    let mut chart = LineChart::new();
    chart.add_series(series(&[(0.0, 0.0), (100.0, 200.0)]));
    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(400, 300), &mut surface)
        .expect("draw");

    let texts = surface.texts();
    assert!(texts.len() >= 4, "expected ticks on both axes");
    assert!(texts.iter().any(|t| t.text == "0"));
    assert!(texts.iter().any(|t| t.text == "100"));
    assert!(texts.iter().any(|t| t.text == "200"));
}

#[test]
fn text_setters_restyle_axis_labels() {
    let mut chart = LineChart::new();
    chart.add_series(series(&[(0.0, 0.0), (100.0, 200.0)]));
    let viewport = Viewport::new(400, 300);
    let mut surface = RecordingSurface::new();
    chart.draw(viewport, &mut surface).expect("draw");

    chart.set_text_color(Color::rgb8(255, 0, 0));
    assert!(chart.is_dirty());
    chart.set_text_size(24.0);

    surface.clear();
    chart.draw(viewport, &mut surface).expect("restyled draw");
    let texts = surface.texts();
    assert!(!texts.is_empty());
    for text in texts {
        assert_relative_eq!(text.font_size_px, 24.0);
        assert_relative_eq!(text.color.red, 1.0);
    }
}

#[test]
fn click_reports_series_and_point_indices() {
    let mut chart = LineChart::new();
    chart.set_show_axis_values(false);
    chart.add_series(series(&[(0.0, 0.0), (10.0, 10.0)]));
    chart.add_series(series(&[(0.0, 10.0), (10.0, 0.0)]));

    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    chart.set_on_click(move |group, element| sink.borrow_mut().push((group, element)));

    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(200, 200), &mut surface)
        .expect("draw");

    // Second series' first point maps to (0, 0): top-left corner.
    assert!(chart.pointer_down(0.0, 0.0));
    assert!(chart.pointer_up(0.0, 0.0));
    assert_eq!(*clicks.borrow(), vec![(1, 0)]);
}

#[test]
fn hidden_point_series_are_not_tappable() {
    let mut chart = LineChart::new();
    chart.set_show_axis_values(false);
    let mut hidden = series(&[(0.0, 0.0), (10.0, 10.0)]);
    hidden.show_points = false;
    chart.add_series(hidden);

    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(200, 200), &mut surface)
        .expect("draw");

    assert!(surface.circles().is_empty());
    assert!(!chart.pointer_down(0.0, 200.0));
}

#[test]
fn empty_chart_draws_without_failure() {
    let mut chart = LineChart::new();
    let mut surface = RecordingSurface::new();
    chart
        .draw(Viewport::new(100, 100), &mut surface)
        .expect("empty draw");
}

#[test]
fn out_of_range_series_accessor_reports_bounds_error() {
    let chart = LineChart::new();
    assert!(chart.series_at(0).is_err());
}
