//! Data-space to pixel-space mapping.
//!
//! Pure functions shared by every chart variant: bar slot layout, linear
//! range interpolation for line charts, and angular/radial layout for pie
//! and donut charts. All functions are deterministic and side-effect free so
//! rendering and tests consume the exact same geometry output.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Screen-angle convention: degrees measured clockwise from the positive
/// x-axis, so 270° is twelve o'clock. Radial charts start here.
pub const TOP_START_DEG: f64 = 270.0;

/// Horizontal span of one bar inside its layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub left: f64,
    pub right: f64,
}

/// Divides `[left, left + width]` into `count` equal slots, each inset by
/// `slot_padding` on both sides. When the padding consumes the full width
/// the slot width clamps at zero, so cramped layouts collapse instead of
/// inverting.
#[must_use]
pub fn bar_slots(left: f64, width: f64, count: usize, slot_padding: f64) -> Vec<BarSlot> {
    if count == 0 {
        return Vec::new();
    }

    let count_f = count as f64;
    let bar_width = ((width - slot_padding * 2.0 * count_f) / count_f).max(0.0);
    (0..count)
        .map(|i| {
            let slot_left = left + (slot_padding * 2.0 + bar_width) * i as f64 + slot_padding;
            BarSlot {
                left: slot_left,
                right: slot_left + bar_width,
            }
        })
        .collect()
}

/// Value range for one axis of the line chart.
///
/// Percent mapping substitutes a span of 1.0 when `min == max` so a
/// single-value domain stays finite instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRange {
    min: f64,
    max: f64,
}

impl LinearRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min == max {
            debug!(min, "degenerate axis range, substituting unit span");
        }
        Self { min, max }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        if self.max > self.min {
            self.max - self.min
        } else {
            1.0
        }
    }

    #[must_use]
    pub fn percent(self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Radial bounds of one concentric ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingBounds {
    pub outer: f64,
    pub inner: f64,
}

/// Packs `count` rings between `outer_radius` and `inner_radius`, outermost
/// first, separated by `ring_gap`. Per-ring thickness is the leftover radial
/// budget divided evenly; when the gaps alone exceed the budget, thickness
/// and radii clamp at zero so excess rings collapse instead of inverting.
#[must_use]
pub fn pack_rings(outer_radius: f64, inner_radius: f64, ring_gap: f64, count: usize) -> Vec<RingBounds> {
    if count == 0 {
        return Vec::new();
    }

    let total_gaps = ring_gap * (count - 1) as f64;
    let thickness = ((outer_radius - inner_radius - total_gaps) / count as f64).max(0.0);
    (0..count)
        .map(|i| {
            let outer = (outer_radius - (thickness + ring_gap) * i as f64).max(0.0);
            RingBounds {
                outer,
                inner: (outer - thickness).max(0.0),
            }
        })
        .collect()
}

/// Angular placement of one slice before any inter-slice gap is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlicePlacement {
    pub start_deg: f64,
    pub sweep_deg: f64,
}

/// Accumulates clockwise sweep angles for `values`, starting at `start_deg`.
///
/// Each sweep is `value / total * 360`. Returns `None` when the total is not
/// strictly positive; callers skip the whole group in that case rather than
/// propagating NaN through the sweep math.
#[must_use]
pub fn radial_sweeps(values: &[f64], start_deg: f64) -> Option<Vec<SlicePlacement>> {
    let total: f64 = values.iter().sum();
    if !(total > 0.0) {
        return None;
    }

    let mut current = start_deg;
    let placements = values
        .iter()
        .map(|value| {
            let sweep = value / total * 360.0;
            let placement = SlicePlacement {
                start_deg: current,
                sweep_deg: sweep,
            };
            current += sweep;
            placement
        })
        .collect();
    Some(placements)
}
