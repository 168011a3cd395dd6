//! The four chart variants.
//!
//! Each variant owns its element collection, style, frame cache, hit tester,
//! and click callback, and composes the shared mapper/axis/geometry
//! machinery from [`crate::core`]. There is no common base type; hosts that
//! need to hold heterogeneous charts by value use the [`Chart`] union.

mod bar;
mod donut;
mod line;
mod pie;

pub use bar::{Bar, BarChart, BarSegment, BarStyle};
pub use donut::{DonutChart, DonutSlice, DonutStyle};
pub use line::{LineChart, LinePoint, LineSeries, LineStyle, RangeMode};
pub use pie::{PieChart, PieSlice, PieStyle};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{Color, Surface};

/// Translucent holo-blue used for the pressed-element highlight in every
/// variant.
pub(crate) fn highlight_color() -> Color {
    Color::rgba8(0x33, 0xB5, 0xE5, 100)
}

/// Formats an element value for on-chart text, dropping a trailing `.0` so
/// whole numbers read as integers.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Tagged union over the four chart variants.
pub enum Chart {
    Bar(BarChart),
    Line(LineChart),
    Pie(PieChart),
    Donut(DonutChart),
}

impl Chart {
    pub fn draw<S: Surface>(&mut self, viewport: Viewport, surface: &mut S) -> ChartResult<()> {
        match self {
            Self::Bar(chart) => chart.draw(viewport, surface),
            Self::Line(chart) => chart.draw(viewport, surface),
            Self::Pie(chart) => chart.draw(viewport, surface),
            Self::Donut(chart) => chart.draw(viewport, surface),
        }
    }

    /// Returns `true` when the event changed what should be on screen and
    /// the host should request a redraw.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        match self {
            Self::Bar(chart) => chart.pointer_down(x, y),
            Self::Line(chart) => chart.pointer_down(x, y),
            Self::Pie(chart) => chart.pointer_down(x, y),
            Self::Donut(chart) => chart.pointer_down(x, y),
        }
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        match self {
            Self::Bar(chart) => chart.pointer_up(x, y),
            Self::Line(chart) => chart.pointer_up(x, y),
            Self::Pie(chart) => chart.pointer_up(x, y),
            Self::Donut(chart) => chart.pointer_up(x, y),
        }
    }
}
