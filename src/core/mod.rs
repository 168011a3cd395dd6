pub mod axis;
pub mod geometry;
pub mod mapper;
pub mod types;

pub use axis::AxisTick;
pub use geometry::HitRegion;
pub use mapper::{BarSlot, LinearRange, RingBounds, SlicePlacement, TOP_START_DEG};
pub use types::{PixelRect, Viewport};
