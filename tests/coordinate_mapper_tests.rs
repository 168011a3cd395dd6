use approx::assert_relative_eq;
use chartlet::core::{LinearRange, TOP_START_DEG, mapper};

#[test]
fn bar_slots_divide_width_evenly_with_symmetric_padding() {
    let slots = mapper::bar_slots(0.0, 100.0, 2, 7.0);
    assert_eq!(slots.len(), 2);

    // bar width = (100 - 14 * 2) / 2 = 36
    assert_relative_eq!(slots[0].left, 7.0);
    assert_relative_eq!(slots[0].right, 43.0);
    assert_relative_eq!(slots[1].left, 57.0);
    assert_relative_eq!(slots[1].right, 93.0);
}

#[test]
fn bar_slots_for_empty_collection_is_empty() {
    assert!(mapper::bar_slots(0.0, 100.0, 0, 7.0).is_empty());
}

#[test]
fn oversized_slot_padding_collapses_bars_to_zero_width() {
    // 8 bars at padding 7 need 112px of padding alone; 100px cannot fit them.
    let slots = mapper::bar_slots(0.0, 100.0, 8, 7.0);
    assert_eq!(slots.len(), 8);
    for slot in &slots {
        assert_relative_eq!(slot.right, slot.left);
        assert!(slot.left >= 0.0);
    }
}

#[test]
fn linear_range_maps_endpoints_to_unit_interval() {
    let range = LinearRange::new(10.0, 30.0);
    assert_relative_eq!(range.percent(10.0), 0.0);
    assert_relative_eq!(range.percent(30.0), 1.0);
    assert_relative_eq!(range.percent(20.0), 0.5);
}

#[test]
fn degenerate_range_substitutes_unit_span() {
    let range = LinearRange::new(5.0, 5.0);
    assert_relative_eq!(range.percent(5.0), 0.0);
    assert_relative_eq!(range.percent(6.0), 1.0);
    assert!(range.percent(5.5).is_finite());
}

#[test]
fn radial_sweeps_match_value_proportions() {
    let placements = mapper::radial_sweeps(&[2.0, 3.0, 8.0], TOP_START_DEG).expect("positive total");

    assert_relative_eq!(placements[0].sweep_deg, 2.0 / 13.0 * 360.0, epsilon = 1e-9);
    assert_relative_eq!(placements[1].sweep_deg, 3.0 / 13.0 * 360.0, epsilon = 1e-9);
    assert_relative_eq!(placements[2].sweep_deg, 8.0 / 13.0 * 360.0, epsilon = 1e-9);

    // Accumulation proceeds clockwise from twelve o'clock.
    assert_relative_eq!(placements[0].start_deg, 270.0);
    assert_relative_eq!(
        placements[1].start_deg,
        270.0 + placements[0].sweep_deg,
        epsilon = 1e-9
    );

    let total: f64 = placements.iter().map(|p| p.sweep_deg).sum();
    assert_relative_eq!(total, 360.0, epsilon = 1e-9);
}

#[test]
fn zero_total_group_yields_no_placements() {
    assert!(mapper::radial_sweeps(&[0.0, 0.0], TOP_START_DEG).is_none());
    assert!(mapper::radial_sweeps(&[], TOP_START_DEG).is_none());
}

#[test]
fn rings_pack_outermost_first_with_fixed_gaps() {
    let rings = mapper::pack_rings(100.0, 40.0, 4.0, 3);
    assert_eq!(rings.len(), 3);

    // thickness = (100 - 40 - 2 * 4) / 3
    let thickness = 52.0 / 3.0;
    assert_relative_eq!(rings[0].outer, 100.0);
    assert_relative_eq!(rings[0].inner, 100.0 - thickness, epsilon = 1e-9);
    assert_relative_eq!(rings[1].outer, rings[0].inner - 4.0, epsilon = 1e-9);
    assert_relative_eq!(rings[2].inner, 40.0, epsilon = 1e-9);
}

#[test]
fn ring_gaps_exceeding_the_radial_budget_collapse_rings() {
    // 19 gaps of 4 overflow a 48px budget; radii must stay ordered and
    // non-negative instead of inverting.
    let rings = mapper::pack_rings(48.0, 0.0, 4.0, 20);
    assert_eq!(rings.len(), 20);
    for ring in &rings {
        assert!(ring.inner >= 0.0);
        assert!(ring.outer >= ring.inner);
    }
}
