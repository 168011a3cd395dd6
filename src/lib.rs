//! chartlet: a small charting widget toolkit.
//!
//! Four chart variants (bar, line, pie, multi-ring donut) turn numeric data
//! into 2D vector geometry, record it into a cached frame, replay the frame
//! onto an abstract drawing surface, and resolve pointer taps back to the
//! data element under the pointer.

pub mod chart;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use chart::{BarChart, Chart, DonutChart, LineChart, PieChart};
pub use error::{ChartError, ChartResult};
