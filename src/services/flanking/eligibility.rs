use tracing::trace;

use crate::models::combatant::Combatant;
use crate::services::distance::distance_between;

use super::FlankContext;

/// Whether `flanker` could contribute to a flank against `flankee`, given a
/// partner on the far side.
///
/// Checks identity, category, allegiance, attack capability, and reach. An
/// undefined distance (no grid) never satisfies the reach check.
pub fn can_flank(
    flanker: &(impl Combatant + ?Sized),
    flankee: &(impl Combatant + ?Sized),
    ctx: &FlankContext<'_>,
    reach_override: Option<f64>,
) -> bool {
    if !ctx.settings.detection_enabled {
        return false;
    }
    if flanker.id() == flankee.id() {
        return false;
    }
    if !flanker.can_flank_others() {
        trace!(flanker = %flanker.id(), "category cannot flank");
        return false;
    }
    if !flankee.is_creature() {
        trace!(flankee = %flankee.id(), "target is not a creature");
        return false;
    }
    // Two unowned combatants count as one side.
    if flanker.has_player_allegiance() == flankee.has_player_allegiance() {
        trace!(flanker = %flanker.id(), flankee = %flankee.id(), "allied");
        return false;
    }
    if !flanker.can_attack() {
        trace!(flanker = %flanker.id(), "cannot attack");
        return false;
    }

    let reach = reach_override.unwrap_or_else(|| flanker.attack_reach());
    match distance_between(flanker, flankee, ctx.grid, Some(reach)) {
        Some(distance) => {
            let in_reach = reach >= distance;
            if !in_reach {
                trace!(flanker = %flanker.id(), flankee = %flankee.id(), reach, distance, "out of reach");
            }
            in_reach
        }
        None => {
            trace!(flanker = %flanker.id(), "no grid, distance undefined");
            false
        }
    }
}
