//! Distance engine
//!
//! Grid-aware minimum distance between token footprints.

use crate::models::combatant::Combatant;
use crate::models::grid::{DiagonalRule, GridContext};
use crate::models::geometry::Rect;

/// Measure the distance between two footprints, in grid distance units.
///
/// Returns `None` when there is no grid to measure on. On square grids
/// both footprints are inset by half a cell, so the result is the distance
/// between the nearest occupied cells rather than between sprite edges.
/// Zero only when the inset rectangles overlap or touch; one-cell tokens
/// whose footprints partly overlap are still a cell apart. Any other grid
/// measures center to center and ignores footprint size.
///
/// `reach` enables the two-cell diagonal reach exception on alternating
/// diagonal grids.
pub fn measure_distance(
    a: &Rect,
    b: &Rect,
    grid: Option<&GridContext>,
    reach: Option<f64>,
) -> Option<f64> {
    let grid = grid?;
    if !grid.is_square() {
        return Some(grid.measure_points(a.center(), b.center()));
    }

    let half_cell = grid.size / 2.0;
    let (a, b) = (a.inset(half_cell), b.inset(half_cell));
    let dx = axis_gap(a.left, a.right, b.left, b.right);
    let dy = axis_gap(a.top, a.bottom, b.top, b.bottom);
    let distance = grid.measure_offset(dx, dy);

    match reach {
        Some(reach) if reaches_second_diagonal(grid, reach, dx, dy) => Some(reach.min(distance)),
        _ => Some(distance),
    }
}

/// Footprint distance between two combatants.
pub fn distance_between<A, B>(a: &A, b: &B, grid: Option<&GridContext>, reach: Option<f64>) -> Option<f64>
where
    A: Combatant + ?Sized,
    B: Combatant + ?Sized,
{
    measure_distance(&a.bounds(), &b.bounds(), grid, reach)
}

/// Empty space between two intervals on one axis; zero when they overlap.
fn axis_gap(a_lo: f64, a_hi: f64, b_lo: f64, b_hi: f64) -> f64 {
    let before = b_lo - a_hi;
    let after = a_lo - b_hi;
    if before.is_nan() || after.is_nan() {
        return f64::NAN;
    }
    before.max(after).max(0.0)
}

/// A reach of exactly two cells covers two squares diagonally, even though
/// alternating diagonals measure that as three cells.
fn reaches_second_diagonal(grid: &GridContext, reach: f64, dx: f64, dy: f64) -> bool {
    grid.diagonals == DiagonalRule::Alternating
        && reach == 2.0 * grid.distance
        && grid.cells(dx) == 2.0
        && grid.cells(dy) == 2.0
}
