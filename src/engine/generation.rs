use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::models::combatant::{ActorCategory, CombatantSnapshot};
use crate::models::constants::{SKIRMISH_BOARD_CELLS, SKIRMISH_FOOTPRINTS};
use crate::models::geometry::Rect;
use crate::models::grid::GridContext;

/// Placement attempts per combatant before giving up on it.
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Place up to `count` combatants on a square board without overlapping
/// footprints. Even ids are player characters, odd ids hostile NPCs.
/// Combatants that find no free spot are left out.
pub fn generate_combatants(
    rng: &mut StdRng,
    grid: &GridContext,
    count: usize,
) -> Vec<CombatantSnapshot> {
    let board = SKIRMISH_BOARD_CELLS as usize;
    let mut occupied = vec![[false; SKIRMISH_BOARD_CELLS as usize]; board];
    let mut combatants = Vec::with_capacity(count);

    for id in 0..count as u32 {
        let cells = SKIRMISH_FOOTPRINTS[rng.gen_range(0..SKIRMISH_FOOTPRINTS.len())] as usize;
        let Some((col, row)) = find_free_spot(rng, &occupied, cells) else {
            debug!(id, cells, "no room left on the board");
            continue;
        };

        for row_cells in occupied.iter_mut().skip(row).take(cells) {
            for cell in row_cells.iter_mut().skip(col).take(cells) {
                *cell = true;
            }
        }

        let footprint = Rect::new(
            col as f64 * grid.size,
            row as f64 * grid.size,
            cells as f64 * grid.size,
            cells as f64 * grid.size,
        );
        let mut combatant = if id % 2 == 0 {
            CombatantSnapshot::new(id, ActorCategory::Character, footprint)
                .named(format!("Hero {}", id / 2 + 1))
                .player_allied()
        } else {
            CombatantSnapshot::new(id, ActorCategory::Npc, footprint)
                .named(format!("Raider {}", id / 2 + 1))
        };
        if rng.gen::<f64>() > 0.8 {
            combatant = combatant.with_reach(2.0 * grid.distance);
        }
        combatants.push(combatant);
    }

    combatants
}

fn find_free_spot(
    rng: &mut StdRng,
    occupied: &[[bool; SKIRMISH_BOARD_CELLS as usize]],
    cells: usize,
) -> Option<(usize, usize)> {
    let board = occupied.len();
    if cells > board {
        return None;
    }
    (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
        let col = rng.gen_range(0..=board - cells);
        let row = rng.gen_range(0..=board - cells);
        let free = occupied[row..row + cells]
            .iter()
            .all(|r| r[col..col + cells].iter().all(|taken| !taken));
        free.then_some((col, row))
    })
}
