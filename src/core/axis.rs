//! Axis tick derivation for the bar and line charts.

use serde::{Deserialize, Serialize};

/// One labeled reference value along an axis, with its pixel position
/// measured from the axis origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: i64,
    pub position: f64,
}

/// Derives integer tick labels for the range `[min, max]` over `usable_len`
/// pixels.
///
/// The candidate count is `floor(usable_len / min_label_spacing) + 1`,
/// clamped to at least 2 so the even step never degenerates to a zero-length
/// division. Candidates are rounded to integers and consecutive duplicates
/// dropped, which collapses narrow ranges to the few distinct labels they
/// can support. Surviving ticks are spread evenly over the usable length.
#[must_use]
pub fn scale_axis(min: f64, max: f64, usable_len: f64, min_label_spacing: f64) -> Vec<AxisTick> {
    let candidate_count = ((usable_len / min_label_spacing).floor() as usize + 1).max(2);
    let step = (max - min) / (candidate_count - 1) as f64;

    let mut values: Vec<i64> = Vec::with_capacity(candidate_count);
    for i in 0..candidate_count {
        let value = (min + i as f64 * step) as i64;
        if values.last() != Some(&value) {
            values.push(value);
        }
    }

    let last_index = values.len() - 1;
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| AxisTick {
            value,
            position: if last_index == 0 {
                0.0
            } else {
                i as f64 * usable_len / last_index as f64
            },
        })
        .collect()
}
