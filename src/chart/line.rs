//! Line chart with multiple series, optional area fill, point markers, and
//! axis tick labels.

use serde::{Deserialize, Serialize};

use crate::core::{HitRegion, LinearRange, PixelRect, Viewport, axis};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ElementRef, HitTester};
use crate::render::{
    CirclePrimitive, Color, PointPx, PolygonPrimitive, RenderCache, RenderFrame, SegmentPrimitive,
    Surface, TextHAlign, TextPrimitive,
};

use super::highlight_color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

impl LinePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered point sequence sharing one stroke color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub color: Color,
    pub points: Vec<LinePoint>,
    /// When set, points get visible markers and become tappable.
    pub show_points: bool,
}

impl LineSeries {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            points: Vec::new(),
            show_points: true,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<LinePoint>) -> Self {
        self.points = points;
        self
    }
}

/// Per-axis bounds mode: derived from the data or pinned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RangeMode {
    #[default]
    Auto,
    Pinned {
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub grid_color: Color,
    pub text_color: Color,
    pub axis_text_size: f64,
    pub title_text_size: f64,
    pub stroke_width: f64,
    pub point_outer_radius: f64,
    pub point_inner_radius: f64,
    /// Radius of the circular hit region around a visible point.
    pub hit_radius: f64,
    /// Minimum pixel spacing between axis tick labels.
    pub min_label_spacing: f64,
    pub show_axis_values: bool,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    /// Index of the series whose area under the line is filled.
    pub fill_series: Option<usize>,
    /// Opacity of the area fill, in [0, 1].
    pub fill_alpha: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            grid_color: Color::rgb8(255, 255, 255),
            text_color: Color::rgba8(0, 0, 0, 221),
            axis_text_size: 16.0,
            title_text_size: 20.0,
            stroke_width: 3.0,
            point_outer_radius: 6.0,
            point_inner_radius: 3.0,
            hit_radius: 30.0,
            min_label_spacing: 50.0,
            show_axis_values: true,
            x_axis_title: None,
            y_axis_title: None,
            fill_series: None,
            fill_alpha: 30.0 / 255.0,
        }
    }
}

pub struct LineChart {
    series: Vec<LineSeries>,
    style: LineStyle,
    range_x: RangeMode,
    range_y: RangeMode,
    cache: RenderCache,
    hit: HitTester,
    regions: Vec<(ElementRef, HitRegion)>,
    on_click: Option<Box<dyn FnMut(usize, usize)>>,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChart {
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            style: LineStyle::default(),
            range_x: RangeMode::Auto,
            range_y: RangeMode::Auto,
            cache: RenderCache::new(),
            hit: HitTester::new(),
            regions: Vec::new(),
            on_click: None,
        }
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
        self.cache.mark_dirty();
    }

    pub fn set_series(&mut self, series: Vec<LineSeries>) {
        self.series = series;
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    pub fn series_at(&self, index: usize) -> ChartResult<&LineSeries> {
        self.series.get(index).ok_or(ChartError::IndexOutOfBounds {
            kind: "series",
            index,
            len: self.series.len(),
        })
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
        self.cache.mark_dirty();
    }

    /// Pins the vertical value range instead of deriving it from the data.
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.range_y = RangeMode::Pinned { min, max };
        self.cache.mark_dirty();
    }

    /// Pins the horizontal domain instead of deriving it from the data.
    pub fn set_domain(&mut self, min: f64, max: f64) {
        self.range_x = RangeMode::Pinned { min, max };
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: LineStyle) {
        self.style = style;
        self.cache.mark_dirty();
    }

    pub fn set_grid_color(&mut self, color: Color) {
        self.style.grid_color = color;
        self.cache.mark_dirty();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.cache.mark_dirty();
    }

    /// Sets the axis tick label size, which also drives the axis padding.
    pub fn set_text_size(&mut self, size: f64) {
        self.style.axis_text_size = size;
        self.cache.mark_dirty();
    }

    pub fn set_show_axis_values(&mut self, show: bool) {
        self.style.show_axis_values = show;
        self.cache.mark_dirty();
    }

    pub fn set_x_axis_title(&mut self, title: Option<String>) {
        self.style.x_axis_title = title;
        self.cache.mark_dirty();
    }

    pub fn set_y_axis_title(&mut self, title: Option<String>) {
        self.style.y_axis_title = title;
        self.cache.mark_dirty();
    }

    pub fn set_fill_series(&mut self, index: Option<usize>) {
        self.style.fill_series = index;
        self.cache.mark_dirty();
    }

    pub fn set_on_click(&mut self, callback: impl FnMut(usize, usize) + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.hit
            .selection()
            .map(|element| (element.group, element.element))
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let outcome = self.hit.pointer_down(x, y, &self.regions);
        if outcome.needs_redraw {
            self.cache.mark_dirty();
        }
        outcome.needs_redraw
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        let outcome = self.hit.pointer_up(x, y, &self.regions);
        if outcome.needs_redraw {
            self.cache.mark_dirty();
        }
        if let Some(clicked) = outcome.clicked
            && let Some(callback) = self.on_click.as_mut()
        {
            callback(clicked.group, clicked.element);
        }
        outcome.needs_redraw
    }

    pub fn draw<S: Surface>(&mut self, viewport: Viewport, surface: &mut S) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if self.cache.needs_rebuild(viewport) {
            let frame = self.build_frame(viewport);
            frame.validate()?;
            self.cache.store(frame, viewport);
        }
        if let Some(frame) = self.cache.frame() {
            frame.replay(surface)?;
        }
        Ok(())
    }

    fn data_bounds(&self, pick: impl Fn(&LinePoint) -> f64) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for series in &self.series {
            for point in &series.points {
                let value = pick(point);
                min = min.min(value);
                max = max.max(value);
            }
        }
        if min > max {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }

    fn resolve_range(&self, mode: RangeMode, pick: impl Fn(&LinePoint) -> f64) -> LinearRange {
        match mode {
            RangeMode::Pinned { min, max } => LinearRange::new(min, max),
            RangeMode::Auto => {
                let (min, max) = self.data_bounds(pick);
                LinearRange::new(min, max)
            }
        }
    }

    fn build_frame(&mut self, viewport: Viewport) -> RenderFrame {
        let style = &self.style;
        let width = viewport.width_px();
        let height = viewport.height_px();

        let mut frame = RenderFrame::new(viewport);
        self.regions.clear();

        let (pad_side, pad_cap) = if style.show_axis_values {
            (style.axis_text_size * 1.5, style.axis_text_size * 0.75)
        } else {
            (0.0, 0.0)
        };
        let usable =
            PixelRect::from_viewport(viewport).inset(pad_side, pad_cap, pad_cap, pad_side);

        let range_x = self.resolve_range(self.range_x, |point| point.x);
        let range_y = self.resolve_range(self.range_y, |point| point.y);

        let map = |point: &LinePoint| -> (f64, f64) {
            (
                usable.left + range_x.percent(point.x) * usable.width,
                usable.bottom() - range_y.percent(point.y) * usable.height,
            )
        };

        // Area fill under the designated series, one quad per segment down
        // to the baseline.
        if let Some(fill_index) = style.fill_series
            && let Some(series) = self.series.get(fill_index)
        {
            let fill_color = series.color.with_alpha(style.fill_alpha);
            for pair in series.points.windows(2) {
                let (x1, y1) = map(&pair[0]);
                let (x2, y2) = map(&pair[1]);
                frame.push_polygon(PolygonPrimitive::new(
                    [
                        PointPx::new(x1, y1),
                        PointPx::new(x2, y2),
                        PointPx::new(x2, usable.bottom()),
                        PointPx::new(x1, usable.bottom()),
                    ],
                    fill_color,
                ));
            }
        }

        frame.push_segment(SegmentPrimitive::new(
            usable.left,
            usable.bottom(),
            width,
            usable.bottom(),
            1.0,
            style.grid_color.with_alpha(50.0 / 255.0),
        ));

        for series in &self.series {
            for pair in series.points.windows(2) {
                let (x1, y1) = map(&pair[0]);
                let (x2, y2) = map(&pair[1]);
                frame.push_segment(SegmentPrimitive::new(
                    x1,
                    y1,
                    x2,
                    y2,
                    style.stroke_width,
                    series.color,
                ));
            }
        }

        let selected = self.hit.selection();
        for (series_index, series) in self.series.iter().enumerate() {
            if !series.show_points {
                continue;
            }
            for (point_index, point) in series.points.iter().enumerate() {
                let (x, y) = map(point);
                frame.push_circle(CirclePrimitive::new(
                    x,
                    y,
                    style.point_outer_radius,
                    Color::rgb8(136, 136, 136),
                ));
                frame.push_circle(CirclePrimitive::new(
                    x,
                    y,
                    style.point_inner_radius,
                    Color::rgb8(255, 255, 255),
                ));

                let element = ElementRef::new(series_index, point_index);
                self.regions.push((
                    element,
                    HitRegion::Circle {
                        cx: x,
                        cy: y,
                        radius: style.hit_radius,
                    },
                ));

                if selected == Some(element) {
                    frame.push_circle(CirclePrimitive::new(
                        x,
                        y,
                        style.hit_radius,
                        highlight_color(),
                    ));
                }
            }
        }

        if style.show_axis_values {
            for tick in axis::scale_axis(
                range_x.min(),
                range_x.max(),
                usable.width,
                style.min_label_spacing,
            ) {
                frame.push_text(TextPrimitive::new(
                    tick.value.to_string(),
                    usable.left + tick.position,
                    usable.bottom() + style.axis_text_size,
                    style.axis_text_size,
                    style.text_color,
                    TextHAlign::Center,
                ));
            }

            // Vertical axis labels run bottom-to-top along the left edge.
            for tick in axis::scale_axis(
                range_y.min(),
                range_y.max(),
                usable.height,
                style.min_label_spacing,
            ) {
                frame.push_text(TextPrimitive::new(
                    tick.value.to_string(),
                    2.0,
                    usable.bottom() - tick.position,
                    style.axis_text_size,
                    style.text_color,
                    TextHAlign::Left,
                ));
            }
        }

        if let Some(title) = &style.x_axis_title {
            frame.push_text(TextPrimitive::new(
                title.clone(),
                width / 2.0,
                height - style.title_text_size / 3.0,
                style.title_text_size,
                style.text_color,
                TextHAlign::Center,
            ));
        }

        if let Some(title) = &style.y_axis_title {
            frame.push_text(TextPrimitive::new(
                title.clone(),
                2.0,
                style.title_text_size,
                style.title_text_size,
                style.text_color,
                TextHAlign::Left,
            ));
        }

        frame
    }
}
