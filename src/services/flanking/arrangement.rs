use crate::models::combatant::Combatant;
use crate::models::constants::CENTER_PROBE_RADIUS;
use crate::models::geometry::{Circle, Segment};

use super::intersection::{line_circle_intersections, segments_intersect};

/// Whether the line between two flankers passes through the flankee's
/// center.
///
/// Despite the name this is not a corner test: the line between the two
/// centers is intersected with a tiny circle around the flankee's center.
/// Diagonal pincers through opposite corners pass that center, which is
/// where the name comes from.
pub fn on_opposite_corners(
    flanker_a: &(impl Combatant + ?Sized),
    flanker_b: &(impl Combatant + ?Sized),
    flankee: &(impl Combatant + ?Sized),
) -> bool {
    let line = Segment::new(flanker_a.center(), flanker_b.center());
    let center_circle = Circle {
        center: flankee.center(),
        radius: CENTER_PROBE_RADIUS,
    };
    !line_circle_intersections(&line, &center_circle).is_empty()
}

/// Whether the line between two flankers crosses both the left and right
/// sides of the flankee, or both its top and bottom.
pub fn on_opposite_sides(
    flanker_a: &(impl Combatant + ?Sized),
    flanker_b: &(impl Combatant + ?Sized),
    flankee: &(impl Combatant + ?Sized),
) -> bool {
    let line = Segment::new(flanker_a.center(), flanker_b.center());
    let bounds = flankee.bounds();
    let crosses = |side: Segment| segments_intersect(&line, &side);

    (crosses(bounds.left_edge()) && crosses(bounds.right_edge()))
        || (crosses(bounds.top_edge()) && crosses(bounds.bottom_edge()))
}

pub fn in_flanking_arrangement(
    flanker_a: &(impl Combatant + ?Sized),
    flanker_b: &(impl Combatant + ?Sized),
    flankee: &(impl Combatant + ?Sized),
) -> bool {
    on_opposite_corners(flanker_a, flanker_b, flankee)
        || on_opposite_sides(flanker_a, flanker_b, flankee)
}
