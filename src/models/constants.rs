/// Default pixel size of one grid cell.
pub const DEFAULT_GRID_SIZE: f64 = 100.0;
/// Default distance units (feet) covered by one grid cell.
pub const DEFAULT_GRID_DISTANCE: f64 = 5.0;
/// Default melee reach, in distance units.
pub const DEFAULT_REACH: f64 = 5.0;

/// Radius of the small circle around a flankee's center used by the
/// opposite-corners test, in scene units.
pub const CENTER_PROBE_RADIUS: f64 = 1.0;

/// Tolerance when converting pixel gaps to whole cells, so that float
/// noise on grid-aligned tokens does not round up to an extra cell.
pub const CELL_EPSILON: f64 = 1e-9;

/// Tolerance used by the line/circle intersection.
pub const INTERSECTION_EPSILON: f64 = 1e-8;

/// Footprint sizes, in cells, that random skirmishes draw from.
pub const SKIRMISH_FOOTPRINTS: [u32; 4] = [1, 1, 1, 2];
/// Side length, in cells, of the square board used by random skirmishes.
pub const SKIRMISH_BOARD_CELLS: u32 = 8;
/// Maximum combatants a random skirmish can hold.
pub const MAX_SKIRMISH_COMBATANTS: usize = 24;
