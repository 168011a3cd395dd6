//! Hit-test regions and their containment tests.
//!
//! Regions replace toolkit path/region objects with explicit geometry: every
//! element built during a frame rebuild gets one region, and the hit tester
//! asks nothing of a region beyond point containment.

use serde::{Deserialize, Serialize};

/// Geometric area associated with one chart element for pointer resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitRegion {
    Rect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    /// Ring-shaped wedge between two radii spanning a clockwise sweep.
    Sector {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_deg: f64,
        sweep_deg: f64,
    },
}

impl HitRegion {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match *self {
            Self::Rect {
                left,
                top,
                right,
                bottom,
            } => x >= left && x <= right && y >= top && y <= bottom,
            Self::Circle { cx, cy, radius } => {
                let dx = x - cx;
                let dy = y - cy;
                dx * dx + dy * dy <= radius * radius
            }
            Self::Sector {
                cx,
                cy,
                inner_radius,
                outer_radius,
                start_deg,
                sweep_deg,
            } => {
                let dx = x - cx;
                let dy = y - cy;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < inner_radius || distance > outer_radius {
                    return false;
                }
                // Screen coordinates grow downward, so atan2 already measures
                // clockwise. Normalizing the offset from the start angle into
                // [0, 360) handles sectors that cross the 0° seam.
                let angle = dy.atan2(dx).to_degrees();
                let offset = (angle - start_deg).rem_euclid(360.0);
                offset <= sweep_deg
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HitRegion;

    #[test]
    fn sector_containment_across_angle_seam() {
        // Quarter ring from twelve o'clock sweeping clockwise past 0°.
        let sector = HitRegion::Sector {
            cx: 0.0,
            cy: 0.0,
            inner_radius: 10.0,
            outer_radius: 20.0,
            start_deg: 270.0,
            sweep_deg: 180.0,
        };

        assert!(sector.contains(0.0, -15.0)); // twelve o'clock
        assert!(sector.contains(15.0, 0.0)); // three o'clock
        assert!(!sector.contains(-15.0, 0.0)); // nine o'clock
        assert!(!sector.contains(0.0, -5.0)); // inside the hole
        assert!(!sector.contains(0.0, -25.0)); // beyond the outer radius
    }

    #[test]
    fn rect_containment_is_inclusive_of_edges() {
        let rect = HitRegion::Rect {
            left: 10.0,
            top: 10.0,
            right: 20.0,
            bottom: 20.0,
        };
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(9.9, 15.0));
    }
}
