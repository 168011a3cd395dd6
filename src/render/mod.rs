mod cache;
mod frame;
mod primitives;
mod recording;

pub use cache::RenderCache;
pub use frame::{DrawOp, RenderFrame};
pub use primitives::{
    CirclePrimitive, Color, PointPx, PolygonPrimitive, RectPrimitive, SectorPrimitive,
    SegmentPrimitive, TextHAlign, TextPrimitive,
};
pub use recording::RecordingSurface;

use crate::error::ChartResult;

/// Capability contract implemented by any host drawing surface.
///
/// Charts never talk to a backend directly; they record primitives into a
/// [`RenderFrame`] and replay it here, so drawing code stays isolated from
/// chart domain and interaction logic.
pub trait Surface {
    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;
    fn draw_segment(&mut self, segment: &SegmentPrimitive) -> ChartResult<()>;
    fn draw_polygon(&mut self, polygon: &PolygonPrimitive) -> ChartResult<()>;
    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()>;
    fn draw_sector(&mut self, sector: &SectorPrimitive) -> ChartResult<()>;
    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}
