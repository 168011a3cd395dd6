use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, DrawOp, PolygonPrimitive, RectPrimitive, SectorPrimitive, SegmentPrimitive,
    Surface, TextPrimitive,
};

/// Surface that records draw calls instead of rasterizing them.
///
/// Used by tests and headless hosts to observe exactly what a chart painted
/// before a real backend is wired up.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    #[must_use]
    pub fn rects(&self) -> Vec<&RectPrimitive> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn sectors(&self) -> Vec<&SectorPrimitive> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Sector(sector) => Some(sector),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn segments(&self) -> Vec<&SegmentPrimitive> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Segment(segment) => Some(segment),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn circles(&self) -> Vec<&CirclePrimitive> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn polygons(&self) -> Vec<&PolygonPrimitive> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polygon(polygon) => Some(polygon),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        self.ops.push(DrawOp::Rect(*rect));
        Ok(())
    }

    fn draw_segment(&mut self, segment: &SegmentPrimitive) -> ChartResult<()> {
        self.ops.push(DrawOp::Segment(*segment));
        Ok(())
    }

    fn draw_polygon(&mut self, polygon: &PolygonPrimitive) -> ChartResult<()> {
        self.ops.push(DrawOp::Polygon(polygon.clone()));
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        self.ops.push(DrawOp::Circle(*circle));
        Ok(())
    }

    fn draw_sector(&mut self, sector: &SectorPrimitive) -> ChartResult<()> {
        self.ops.push(DrawOp::Sector(*sector));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.ops.push(DrawOp::Text(text.clone()));
        Ok(())
    }
}
