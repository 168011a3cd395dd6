//! Single-selection pointer gesture state machine.
//!
//! One tester instance lives on each chart. It owns no geometry; the chart
//! hands it the hit regions built during the most recent frame rebuild, in
//! draw order, and it resolves pointer-down/pointer-up pairs into at most
//! one selected element and an optional click.

use serde::{Deserialize, Serialize};

use crate::core::HitRegion;

/// Identifies one element as (group, element-within-group). Flat charts
/// (bar, pie) use group 0 throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRef {
    pub group: usize,
    pub element: usize,
}

impl ElementRef {
    #[must_use]
    pub const fn new(group: usize, element: usize) -> Self {
        Self { group, element }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressState {
    #[default]
    Idle,
    Pressed(ElementRef),
}

/// What one pointer event changed: whether the chart must repaint (a
/// highlight appeared or disappeared) and whether a click was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerOutcome {
    pub needs_redraw: bool,
    pub clicked: Option<ElementRef>,
}

impl PointerOutcome {
    const UNCHANGED: Self = Self {
        needs_redraw: false,
        clicked: None,
    };
}

#[derive(Debug, Default)]
pub struct HitTester {
    state: PressState,
}

impl HitTester {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PressState {
        self.state
    }

    /// The element currently held down, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementRef> {
        match self.state {
            PressState::Idle => None,
            PressState::Pressed(element) => Some(element),
        }
    }

    /// Scans `regions` in draw order for containment of the pressed point.
    /// The last containing region wins, mirroring draw-order priority when
    /// regions overlap.
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        regions: &[(ElementRef, HitRegion)],
    ) -> PointerOutcome {
        let mut hit = None;
        for (element, region) in regions {
            if region.contains(x, y) {
                hit = Some(*element);
            }
        }

        match hit {
            Some(element) => {
                self.state = PressState::Pressed(element);
                PointerOutcome {
                    needs_redraw: true,
                    clicked: None,
                }
            }
            None => {
                // A down outside every region cancels a stale press so no
                // highlight lingers.
                if self.state != PressState::Idle {
                    self.state = PressState::Idle;
                    return PointerOutcome {
                        needs_redraw: true,
                        clicked: None,
                    };
                }
                PointerOutcome::UNCHANGED
            }
        }
    }

    /// Resolves a press: re-tests the point against the pressed element's
    /// region and reports a click when it still contains the point. The
    /// state returns to `Idle` either way.
    pub fn pointer_up(
        &mut self,
        x: f64,
        y: f64,
        regions: &[(ElementRef, HitRegion)],
    ) -> PointerOutcome {
        let PressState::Pressed(pressed) = self.state else {
            return PointerOutcome::UNCHANGED;
        };
        self.state = PressState::Idle;

        let clicked = regions
            .iter()
            .find(|(element, _)| *element == pressed)
            .filter(|(_, region)| region.contains(x, y))
            .map(|(element, _)| *element);

        PointerOutcome {
            needs_redraw: true,
            clicked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementRef, HitTester, PressState};
    use crate::core::HitRegion;

    fn region(left: f64) -> HitRegion {
        HitRegion::Rect {
            left,
            top: 0.0,
            right: left + 10.0,
            bottom: 10.0,
        }
    }

    #[test]
    fn overlapping_regions_resolve_to_last_in_draw_order() {
        let regions = vec![
            (ElementRef::new(0, 0), region(0.0)),
            (ElementRef::new(0, 1), region(5.0)),
        ];

        let mut tester = HitTester::new();
        let outcome = tester.pointer_down(7.0, 5.0, &regions);
        assert!(outcome.needs_redraw);
        assert_eq!(tester.selection(), Some(ElementRef::new(0, 1)));
    }

    #[test]
    fn up_without_press_is_a_no_op() {
        let regions = vec![(ElementRef::new(0, 0), region(0.0))];
        let mut tester = HitTester::new();

        let outcome = tester.pointer_up(5.0, 5.0, &regions);
        assert!(!outcome.needs_redraw);
        assert_eq!(outcome.clicked, None);
        assert_eq!(tester.state(), PressState::Idle);
    }

    #[test]
    fn release_outside_pressed_region_discards_the_click() {
        let regions = vec![(ElementRef::new(0, 0), region(0.0))];
        let mut tester = HitTester::new();

        tester.pointer_down(5.0, 5.0, &regions);
        let outcome = tester.pointer_up(50.0, 50.0, &regions);
        assert!(outcome.needs_redraw);
        assert_eq!(outcome.clicked, None);
        assert_eq!(tester.state(), PressState::Idle);
    }
}
