//! Bar chart, including stacked bars.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{HitRegion, Viewport, mapper};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ElementRef, HitTester};
use crate::render::{
    Color, RectPrimitive, RenderCache, RenderFrame, SegmentPrimitive, Surface, TextHAlign,
    TextPrimitive,
};

use super::{format_value, highlight_color};

/// One segment of a stacked bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    pub value: f64,
    pub color: Color,
}

impl BarSegment {
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// One bar. A plain bar carries its own value and color; a stacked bar
/// derives its total from its segments and draws them bottom-to-top in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub value: f64,
    pub color: Color,
    pub label: String,
    pub segments: Vec<BarSegment>,
}

impl Bar {
    #[must_use]
    pub fn new(value: f64, color: Color, label: impl Into<String>) -> Self {
        Self {
            value,
            color,
            label: label.into(),
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn stacked(segments: Vec<BarSegment>, color: Color, label: impl Into<String>) -> Self {
        Self {
            value: 0.0,
            color,
            label: label.into(),
            segments,
        }
    }

    /// Total height-driving value: the segment sum for stacked bars,
    /// otherwise the plain value.
    #[must_use]
    pub fn total(&self) -> f64 {
        if self.segments.is_empty() {
            self.value
        } else {
            self.segments.iter().map(|segment| segment.value).sum()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    /// Unit string drawn with each bar's value text.
    pub unit: String,
    /// `true` draws the unit after the value, `false` before it.
    pub append_unit: bool,
    pub show_bar_text: bool,
    /// Horizontal inset on each side of a bar slot.
    pub slot_padding: f64,
    /// Space reserved below the bars for labels and the baseline axis.
    pub bottom_padding: f64,
    /// Inflation applied to hit regions and the selection highlight.
    pub select_padding: f64,
    pub text_size: f64,
    pub axis_color: Color,
    pub label_color: Color,
    pub value_text_color: Color,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            unit: String::new(),
            append_unit: false,
            show_bar_text: true,
            slot_padding: 7.0,
            bottom_padding: 40.0,
            select_padding: 4.0,
            text_size: 20.0,
            axis_color: Color::rgba8(0, 0, 0, 50),
            label_color: Color::rgb8(0, 0, 0),
            value_text_color: Color::rgb8(255, 255, 255),
        }
    }
}

pub struct BarChart {
    bars: Vec<Bar>,
    style: BarStyle,
    cache: RenderCache,
    hit: HitTester,
    regions: Vec<(ElementRef, HitRegion)>,
    on_click: Option<Box<dyn FnMut(usize)>>,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bars: Vec::new(),
            style: BarStyle::default(),
            cache: RenderCache::new(),
            hit: HitTester::new(),
            regions: Vec::new(),
            on_click: None,
        }
    }

    pub fn add_bar(&mut self, bar: Bar) {
        self.bars.push(bar);
        self.cache.mark_dirty();
    }

    pub fn set_bars(&mut self, bars: Vec<Bar>) {
        self.bars = bars;
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn bar(&self, index: usize) -> ChartResult<&Bar> {
        self.bars.get(index).ok_or(ChartError::IndexOutOfBounds {
            kind: "bar",
            index,
            len: self.bars.len(),
        })
    }

    pub fn clear_bars(&mut self) {
        self.bars.clear();
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
        self.cache.mark_dirty();
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.style.unit = unit.into();
        self.cache.mark_dirty();
    }

    pub fn set_append_unit(&mut self, append: bool) {
        self.style.append_unit = append;
        self.cache.mark_dirty();
    }

    pub fn set_show_bar_text(&mut self, show: bool) {
        self.style.show_bar_text = show;
        self.cache.mark_dirty();
    }

    pub fn set_on_click(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.hit.selection().map(|element| element.element)
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
            callback(clicked.element);
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

    fn build_frame(&mut self, viewport: Viewport) -> RenderFrame {
        let style = &self.style;
        let width = viewport.width_px();
        let height = viewport.height_px();

        let mut frame = RenderFrame::new(viewport);
        self.regions.clear();

        // Headroom above the tallest bar for the value popup text.
        let headroom = if style.show_bar_text {
            style.text_size + 26.0
        } else {
            0.0
        };
        let baseline = height - style.bottom_padding;
        let usable_height = (baseline - headroom).max(0.0);

        frame.push_segment(SegmentPrimitive::new(
            0.0,
            baseline + 10.0,
            width,
            baseline + 10.0,
            2.0,
            style.axis_color,
        ));

        if self.bars.is_empty() {
            return frame;
        }

        let max_total = self
            .bars
            .iter()
            .map(Bar::total)
            .fold(f64::NEG_INFINITY, f64::max);
        if !(max_total > 0.0) {
            warn!(bar_count = self.bars.len(), "all bar totals are non-positive, skipping bars");
            return frame;
        }

        let slots = mapper::bar_slots(0.0, width, self.bars.len(), style.slot_padding);
        let selected = self.hit.selection();

        for (index, (bar, slot)) in self.bars.iter().zip(&slots).enumerate() {
            let total = bar.total();
            if !(total > 0.0) {
                warn!(index, "skipping bar with non-positive total");
                continue;
            }

            let top = baseline - usable_height * (total / max_total);

            if bar.segments.is_empty() {
                frame.push_rect(RectPrimitive::new(
                    slot.left,
                    top,
                    slot.right - slot.left,
                    baseline - top,
                    bar.color,
                ));
            } else {
                // Stack segments bottom-to-top, each taking its proportional
                // share of the bar height.
                let bar_height = baseline - top;
                let mut segment_bottom = baseline;
                for segment in &bar.segments {
                    let segment_height = bar_height * segment.value / total;
                    frame.push_rect(RectPrimitive::new(
                        slot.left,
                        segment_bottom - segment_height,
                        slot.right - slot.left,
                        segment_height,
                        segment.color,
                    ));
                    segment_bottom -= segment_height;
                }
            }

            let pad = style.select_padding;
            self.regions.push((
                ElementRef::new(0, index),
                HitRegion::Rect {
                    left: slot.left - pad,
                    top: top - pad,
                    right: slot.right + pad,
                    bottom: baseline + pad,
                },
            ));

            let center_x = (slot.left + slot.right) / 2.0;
            if !bar.label.is_empty() {
                frame.push_text(TextPrimitive::new(
                    bar.label.clone(),
                    center_x,
                    height - 5.0,
                    style.text_size,
                    style.label_color,
                    TextHAlign::Center,
                ));
            }

            if style.show_bar_text {
                let value_text = if style.append_unit {
                    format!("{}{}", format_value(total), style.unit)
                } else {
                    format!("{}{}", style.unit, format_value(total))
                };
                frame.push_text(TextPrimitive::new(
                    value_text,
                    center_x,
                    top - 20.0,
                    style.text_size,
                    style.value_text_color,
                    TextHAlign::Center,
                ));
            }

            if selected == Some(ElementRef::new(0, index)) {
                frame.push_rect(RectPrimitive::new(
                    slot.left - pad,
                    top - pad,
                    slot.right - slot.left + pad * 2.0,
                    baseline - top + pad * 2.0,
                    highlight_color(),
                ));
            }
        }

        frame
    }
}
