//! Flanking
//!
//! Decides whether two combatants pincer an enemy between them. A flank
//! needs both partners to be eligible against the flankee (see
//! [`can_flank`]) and to stand in a flanking arrangement around it (see
//! [`in_flanking_arrangement`]).
//!
//! All queries take a borrowed snapshot of the placed combatants; nothing is
//! cached between calls.

mod arrangement;
mod eligibility;
mod intersection;

pub use arrangement::{in_flanking_arrangement, on_opposite_corners, on_opposite_sides};
pub use eligibility::can_flank;
pub use intersection::{line_circle_intersections, segments_intersect};

use tracing::debug;

use crate::models::combatant::{Combatant, CombatantId};
use crate::models::grid::GridContext;
use crate::models::scene::FlankingSettings;

/// Scene-wide inputs for a flanking query.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlankContext<'a> {
    pub grid: Option<&'a GridContext>,
    pub settings: FlankingSettings,
}

impl<'a> FlankContext<'a> {
    pub fn new(grid: Option<&'a GridContext>) -> Self {
        FlankContext {
            grid,
            settings: FlankingSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: FlankingSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Whether `flanker` is flanking `flankee` with help from any of
/// `placeables`.
///
/// `placeables` may include `flanker` and `flankee` themselves; neither can
/// serve as the partner.
pub fn is_flanking<C: Combatant>(
    flanker: &C,
    flankee: &(impl Combatant + ?Sized),
    placeables: &[C],
    ctx: &FlankContext<'_>,
) -> bool {
    if !can_flank(flanker, flankee, ctx, None) {
        return false;
    }
    partners(flanker, flankee, placeables, ctx).next().is_some()
}

/// Every combatant in `placeables` that completes a flank with `flanker`
/// against `flankee`, in snapshot order.
pub fn flanking_buddies<C: Combatant>(
    flanker: &C,
    flankee: &(impl Combatant + ?Sized),
    placeables: &[C],
    ctx: &FlankContext<'_>,
) -> Vec<CombatantId> {
    if !can_flank(flanker, flankee, ctx, None) {
        return Vec::new();
    }
    partners(flanker, flankee, placeables, ctx)
        .map(|buddy| buddy.id())
        .collect()
}

/// Every combatant in `placeables` currently flanking `flankee`.
pub fn flankers_of<C: Combatant>(
    flankee: &C,
    placeables: &[C],
    ctx: &FlankContext<'_>,
) -> Vec<CombatantId> {
    placeables
        .iter()
        .filter(|flanker| is_flanking(*flanker, flankee, placeables, ctx))
        .map(|flanker| flanker.id())
        .collect()
}

/// Partners for an already-eligible flanker.
fn partners<'p, C: Combatant, F: Combatant + ?Sized>(
    flanker: &'p C,
    flankee: &'p F,
    placeables: &'p [C],
    ctx: &'p FlankContext<'p>,
) -> impl Iterator<Item = &'p C> + 'p {
    placeables.iter().filter(move |buddy| {
        let found = buddy.id() != flanker.id()
            && can_flank(*buddy, flankee, ctx, None)
            && in_flanking_arrangement(flanker, *buddy, flankee);
        if found {
            debug!(flanker = %flanker.id(), buddy = %buddy.id(), flankee = %flankee.id(), "flank found");
        }
        found
    })
}
