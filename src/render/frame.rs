use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, PolygonPrimitive, RectPrimitive, SectorPrimitive, SegmentPrimitive, Surface,
    TextPrimitive,
};

/// One recorded draw command. The frame keeps commands in a single ordered
/// list because paint order carries meaning: selection highlights are drawn
/// over the element they cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Rect(RectPrimitive),
    Segment(SegmentPrimitive),
    Polygon(PolygonPrimitive),
    Circle(CirclePrimitive),
    Sector(SectorPrimitive),
    Text(TextPrimitive),
}

impl DrawOp {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Segment(segment) => segment.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Sector(sector) => sector.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// A frame is materialized once per geometry rebuild, cached, and replayed
/// onto a [`Surface`] for every host redraw until it is invalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub ops: Vec<DrawOp>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.ops.push(DrawOp::Rect(rect));
    }

    pub fn push_segment(&mut self, segment: SegmentPrimitive) {
        self.ops.push(DrawOp::Segment(segment));
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.ops.push(DrawOp::Polygon(polygon));
    }

    pub fn push_circle(&mut self, circle: CirclePrimitive) {
        self.ops.push(DrawOp::Circle(circle));
    }

    pub fn push_sector(&mut self, sector: SectorPrimitive) {
        self.ops.push(DrawOp::Sector(sector));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.ops.push(DrawOp::Text(text));
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for op in &self.ops {
            op.validate()?;
        }

        Ok(())
    }

    /// Replays every recorded command onto `surface` in draw order.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        for op in &self.ops {
            match op {
                DrawOp::Rect(rect) => surface.draw_rect(rect)?,
                DrawOp::Segment(segment) => surface.draw_segment(segment)?,
                DrawOp::Polygon(polygon) => surface.draw_polygon(polygon)?,
                DrawOp::Circle(circle) => surface.draw_circle(circle)?,
                DrawOp::Sector(sector) => surface.draw_sector(sector)?,
                DrawOp::Text(text) => surface.draw_text(text)?,
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
