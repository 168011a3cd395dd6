use chartlet::core::axis::scale_axis;
use chartlet::core::{TOP_START_DEG, mapper};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sweep_angles_stay_proportional_and_sum_to_full_circle(
        values in prop::collection::vec(0.001f64..1_000.0, 1..32)
    ) {
        let total: f64 = values.iter().sum();
        let placements = mapper::radial_sweeps(&values, TOP_START_DEG)
            .expect("positive values have a positive total");

        let sweep_sum: f64 = placements.iter().map(|p| p.sweep_deg).sum();
        prop_assert!((sweep_sum - 360.0).abs() <= 1e-6);

        for (value, placement) in values.iter().zip(&placements) {
            let expected = value / total * 360.0;
            prop_assert!((placement.sweep_deg - expected).abs() <= 1e-6);
        }

        // Placements tile the circle: each slice starts where the previous ended.
        for pair in placements.windows(2) {
            prop_assert!((pair[0].start_deg + pair[0].sweep_deg - pair[1].start_deg).abs() <= 1e-6);
        }
    }

    #[test]
    fn axis_ticks_are_strictly_increasing(
        min in -10_000.0f64..10_000.0,
        span in 0.0f64..10_000.0,
        usable_len in 10.0f64..4_000.0
    ) {
        let ticks = scale_axis(min, min + span, usable_len, 50.0);
        prop_assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            prop_assert!(pair[1].value > pair[0].value);
            prop_assert!(pair[1].position > pair[0].position);
        }
    }

    #[test]
    fn bar_slots_never_overlap_and_stay_ordered(
        width in 50.0f64..4_000.0,
        count in 1usize..64
    ) {
        // Padding small enough that every slot keeps positive width.
        let padding = width / (count as f64 * 8.0);
        let slots = mapper::bar_slots(0.0, width, count, padding);
        prop_assert_eq!(slots.len(), count);
        for slot in &slots {
            prop_assert!(slot.right > slot.left);
        }
        for pair in slots.windows(2) {
            prop_assert!(pair[1].left > pair[0].right);
        }
    }
}
