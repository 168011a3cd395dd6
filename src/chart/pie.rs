//! Pie chart drawn as a single ring of annulus sectors, with an optional
//! legend.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{HitRegion, TOP_START_DEG, Viewport, mapper};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ElementRef, HitTester};
use crate::render::{
    CirclePrimitive, Color, RectPrimitive, RenderCache, RenderFrame, SectorPrimitive, Surface,
    TextHAlign, TextPrimitive,
};

use super::highlight_color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub value: f64,
    pub color: Color,
    pub label: String,
}

impl PieSlice {
    #[must_use]
    pub fn new(value: f64, color: Color, label: impl Into<String>) -> Self {
        Self {
            value,
            color,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieStyle {
    /// Radial thickness of the ring.
    pub thickness: f64,
    /// Inset between the outer radius and the viewport edge.
    pub edge_padding: f64,
    /// Angular gap between adjacent slices, in degrees.
    pub slice_gap_deg: f64,
    pub show_legend: bool,
    pub legend_text_size: f64,
    pub legend_padding: f64,
    pub legend_offset: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            thickness: 25.0,
            edge_padding: 2.0,
            slice_gap_deg: 2.0,
            show_legend: true,
            legend_text_size: 20.0,
            legend_padding: 5.0,
            legend_offset: 15.0,
        }
    }
}

pub struct PieChart {
    slices: Vec<PieSlice>,
    style: PieStyle,
    cache: RenderCache,
    hit: HitTester,
    regions: Vec<(ElementRef, HitRegion)>,
    on_click: Option<Box<dyn FnMut(usize)>>,
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new()
    }
}

impl PieChart {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slices: Vec::new(),
            style: PieStyle::default(),
            cache: RenderCache::new(),
            hit: HitTester::new(),
            regions: Vec::new(),
            on_click: None,
        }
    }

    pub fn add_slice(&mut self, slice: PieSlice) {
        self.slices.push(slice);
        self.cache.mark_dirty();
    }

    pub fn set_slices(&mut self, slices: Vec<PieSlice>) {
        self.slices = slices;
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    pub fn slice(&self, index: usize) -> ChartResult<&PieSlice> {
        self.slices.get(index).ok_or(ChartError::IndexOutOfBounds {
            kind: "slice",
            index,
            len: self.slices.len(),
        })
    }

    pub fn clear_slices(&mut self) {
        self.slices.clear();
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn style(&self) -> &PieStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PieStyle) {
        self.style = style;
        self.cache.mark_dirty();
    }

    pub fn set_thickness(&mut self, thickness: f64) {
        self.style.thickness = thickness;
        self.cache.mark_dirty();
    }

    pub fn set_show_legend(&mut self, show: bool) {
        self.style.show_legend = show;
        self.cache.mark_dirty();
    }

    pub fn set_legend_text_size(&mut self, size: f64) {
        self.style.legend_text_size = size;
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

        // The legend occupies the right half, so the pie shifts left.
        let mid_x = width / if style.show_legend { 4.0 } else { 2.0 };
        let mid_y = height / 2.0;
        let radius = mid_x.min(mid_y) - style.edge_padding;
        let inner_radius = (radius - style.thickness).max(0.0);

        let values: Vec<f64> = self.slices.iter().map(|slice| slice.value).collect();
        let Some(placements) = mapper::radial_sweeps(&values, TOP_START_DEG) else {
            if !self.slices.is_empty() {
                warn!(slice_count = self.slices.len(), "pie total is non-positive, skipping slices");
            }
            return frame;
        };

        let gap = style.slice_gap_deg;
        let selected = self.hit.selection();

        for (index, (slice, placement)) in self.slices.iter().zip(&placements).enumerate() {
            let drawn_start = placement.start_deg + gap;
            let drawn_sweep = placement.sweep_deg - gap;
            if drawn_sweep <= 0.0 {
                continue;
            }

            frame.push_sector(SectorPrimitive::new(
                mid_x,
                mid_y,
                inner_radius,
                radius,
                drawn_start,
                drawn_sweep,
                slice.color,
            ));

            self.regions.push((
                ElementRef::new(0, index),
                HitRegion::Sector {
                    cx: mid_x,
                    cy: mid_y,
                    inner_radius,
                    outer_radius: radius,
                    start_deg: drawn_start,
                    sweep_deg: drawn_sweep,
                },
            ));

            if selected == Some(ElementRef::new(0, index)) {
                if self.slices.len() > 1 {
                    frame.push_sector(SectorPrimitive::new(
                        mid_x,
                        mid_y,
                        (inner_radius - style.edge_padding * 2.0).max(0.0),
                        radius + style.edge_padding * 2.0,
                        placement.start_deg,
                        placement.sweep_deg + gap,
                        highlight_color(),
                    ));
                } else {
                    frame.push_circle(CirclePrimitive::new(
                        mid_x,
                        mid_y,
                        radius + style.edge_padding,
                        highlight_color(),
                    ));
                }
            }
        }

        if style.show_legend {
            // Legend entries stack upward from the bottom-right corner.
            for (index, slice) in self.slices.iter().enumerate() {
                let entry_bottom = height
                    - style.legend_offset
                    - index as f64 * (style.legend_text_size + style.legend_padding);
                let swatch_left = width / 2.0 + style.legend_offset;
                frame.push_rect(RectPrimitive::new(
                    swatch_left,
                    entry_bottom - style.legend_text_size,
                    style.legend_text_size,
                    style.legend_text_size,
                    slice.color,
                ));
                if !slice.label.is_empty() {
                    frame.push_text(TextPrimitive::new(
                        slice.label.clone(),
                        swatch_left + style.legend_text_size + style.legend_padding,
                        entry_bottom,
                        style.legend_text_size,
                        slice.color,
                        TextHAlign::Left,
                    ));
                }
            }
        }

        frame
    }
}
