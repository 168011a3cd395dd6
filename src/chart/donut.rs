//! Multi-ring donut chart: one group of slices per concentric ring, packed
//! from the outer radius inward.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{HitRegion, TOP_START_DEG, Viewport, mapper};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ElementRef, HitTester};
use crate::render::{
    CirclePrimitive, Color, RenderCache, RenderFrame, SectorPrimitive, Surface,
};

use super::highlight_color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutSlice {
    pub value: f64,
    pub color: Color,
}

impl DonutSlice {
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutStyle {
    /// Radial budget shared by all rings.
    pub thickness: f64,
    /// Inset between the outer radius and the viewport edge.
    pub edge_padding: f64,
    /// Angular gap between adjacent slices, in degrees.
    pub slice_gap_deg: f64,
    /// Radial gap between adjacent rings.
    pub ring_gap: f64,
}

impl Default for DonutStyle {
    fn default() -> Self {
        Self {
            thickness: 200.0,
            edge_padding: 2.0,
            slice_gap_deg: 2.0,
            ring_gap: 4.0,
        }
    }
}

pub struct DonutChart {
    rings: Vec<Vec<DonutSlice>>,
    style: DonutStyle,
    cache: RenderCache,
    hit: HitTester,
    regions: Vec<(ElementRef, HitRegion)>,
    on_click: Option<Box<dyn FnMut(usize, usize)>>,
}

impl Default for DonutChart {
    fn default() -> Self {
        Self::new()
    }
}

impl DonutChart {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rings: Vec::new(),
            style: DonutStyle::default(),
            cache: RenderCache::new(),
            hit: HitTester::new(),
            regions: Vec::new(),
            on_click: None,
        }
    }

    /// Appends a slice to `ring`, growing the ring list as needed so hosts
    /// can populate rings in any order.
    pub fn add_slice(&mut self, ring: usize, slice: DonutSlice) {
        while self.rings.len() <= ring {
            self.rings.push(Vec::new());
        }
        self.rings[ring].push(slice);
        self.cache.mark_dirty();
    }

    pub fn set_rings(&mut self, rings: Vec<Vec<DonutSlice>>) {
        self.rings = rings;
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn rings(&self) -> &[Vec<DonutSlice>] {
        &self.rings
    }

    pub fn slice(&self, ring: usize, index: usize) -> ChartResult<&DonutSlice> {
        let slices = self.rings.get(ring).ok_or(ChartError::IndexOutOfBounds {
            kind: "ring",
            index: ring,
            len: self.rings.len(),
        })?;
        slices.get(index).ok_or(ChartError::IndexOutOfBounds {
            kind: "slice",
            index,
            len: slices.len(),
        })
    }

    pub fn clear_rings(&mut self) {
        self.rings.clear();
        self.cache.mark_dirty();
    }

    #[must_use]
    pub fn style(&self) -> &DonutStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: DonutStyle) {
        self.style = style;
        self.cache.mark_dirty();
    }

    pub fn set_thickness(&mut self, thickness: f64) {
        self.style.thickness = thickness;
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

    fn build_frame(&mut self, viewport: Viewport) -> RenderFrame {
        let style = &self.style;
        let width = viewport.width_px();
        let height = viewport.height_px();

        let mut frame = RenderFrame::new(viewport);
        self.regions.clear();

        if self.rings.is_empty() {
            return frame;
        }

        let mid_x = width / 2.0;
        let mid_y = height / 2.0;
        let chart_outer = mid_x.min(mid_y) - style.edge_padding;
        let chart_inner = (chart_outer - style.thickness).max(0.0);
        let ring_bounds =
            mapper::pack_rings(chart_outer, chart_inner, style.ring_gap, self.rings.len());

        let gap = style.slice_gap_deg;
        let selected = self.hit.selection();

        for (ring_index, (slices, bounds)) in self.rings.iter().zip(&ring_bounds).enumerate() {
            let values: Vec<f64> = slices.iter().map(|slice| slice.value).collect();
            let Some(placements) = mapper::radial_sweeps(&values, TOP_START_DEG) else {
                if !slices.is_empty() {
                    warn!(ring = ring_index, "ring total is non-positive, skipping ring");
                }
                continue;
            };

            for (index, (slice, placement)) in slices.iter().zip(&placements).enumerate() {
                let drawn_start = placement.start_deg + gap;
                let drawn_sweep = placement.sweep_deg - gap;
                if drawn_sweep <= 0.0 {
                    continue;
                }

                frame.push_sector(SectorPrimitive::new(
                    mid_x,
                    mid_y,
                    bounds.inner,
                    bounds.outer,
                    drawn_start,
                    drawn_sweep,
                    slice.color,
                ));

                let element = ElementRef::new(ring_index, index);
                self.regions.push((
                    element,
                    HitRegion::Sector {
                        cx: mid_x,
                        cy: mid_y,
                        inner_radius: bounds.inner,
                        outer_radius: bounds.outer,
                        start_deg: drawn_start,
                        sweep_deg: drawn_sweep,
                    },
                ));

                if selected == Some(element) {
                    if self.rings.len() > 1 || slices.len() > 1 {
                        frame.push_sector(SectorPrimitive::new(
                            mid_x,
                            mid_y,
                            (bounds.inner - style.edge_padding * 2.0).max(0.0),
                            bounds.outer + style.edge_padding * 2.0,
                            placement.start_deg,
                            placement.sweep_deg + gap,
                            highlight_color(),
                        ));
                    } else {
                        frame.push_circle(CirclePrimitive::new(
                            mid_x,
                            mid_y,
                            bounds.outer + style.edge_padding,
                            highlight_color(),
                        ));
                    }
                }
            }
        }

        frame
    }
}
