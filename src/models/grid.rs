//! Grid context
//!
//! Describes the active scene grid and converts pixel offsets into distance
//! units. Passed explicitly into every measurement; `None` stands for a scene
//! whose dimensions are not known yet.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{CELL_EPSILON, DEFAULT_GRID_DISTANCE, DEFAULT_GRID_SIZE};
use super::errors::{SceneError, SceneResult};
use super::geometry::Point;

/// Layout of the scene grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    Gridless,
    #[default]
    Square,
    HexRows,
    HexColumns,
}

impl GridKind {
    pub fn label(&self) -> &'static str {
        match self {
            GridKind::Gridless => "gridless",
            GridKind::Square => "square",
            GridKind::HexRows => "hex (rows)",
            GridKind::HexColumns => "hex (columns)",
        }
    }
}

/// How diagonal steps are counted on a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalRule {
    /// Every diagonal step costs one cell.
    Equidistant,
    /// Diagonal steps alternate between one and two cells (5-10-5).
    #[default]
    Alternating,
    /// Straight-line distance, no snapping to cells.
    Euclidean,
}

/// The active grid: kind, cell size in pixels, and units per cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridContext {
    pub kind: GridKind,
    /// Pixel width (and height) of one cell.
    pub size: f64,
    /// Distance units covered by one cell.
    pub distance: f64,
    pub diagonals: DiagonalRule,
}

impl Default for GridContext {
    fn default() -> Self {
        GridContext {
            kind: GridKind::Square,
            size: DEFAULT_GRID_SIZE,
            distance: DEFAULT_GRID_DISTANCE,
            diagonals: DiagonalRule::Alternating,
        }
    }
}

impl GridContext {
    /// A square grid with alternating diagonals.
    pub fn square(size: f64, distance: f64) -> Self {
        GridContext {
            kind: GridKind::Square,
            size,
            distance,
            diagonals: DiagonalRule::Alternating,
        }
    }

    pub fn with_kind(mut self, kind: GridKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_diagonals(mut self, diagonals: DiagonalRule) -> Self {
        self.diagonals = diagonals;
        self
    }

    pub fn is_square(&self) -> bool {
        self.kind == GridKind::Square
    }

    /// Reject grids that cannot convert pixels to units.
    pub fn validate(&self) -> SceneResult<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(SceneError::InvalidGrid(format!(
                "cell size must be positive, got {}",
                self.size
            )));
        }
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(SceneError::InvalidGrid(format!(
                "cell distance must be positive, got {}",
                self.distance
            )));
        }
        Ok(())
    }

    /// Whole cells spanned by a non-negative pixel gap.
    pub fn cells(&self, gap: f64) -> f64 {
        let cells = (gap / self.size - CELL_EPSILON).ceil();
        if cells <= 0.0 {
            0.0
        } else {
            cells
        }
    }

    /// Convert a non-negative pixel offset into distance units.
    ///
    /// Square grids apply the diagonal rule to whole cells; every other
    /// grid converts the straight-line length.
    pub fn measure_offset(&self, dx: f64, dy: f64) -> f64 {
        let (dx, dy) = (dx.abs(), dy.abs());
        // min/max would swallow NaN
        if dx.is_nan() || dy.is_nan() {
            return f64::NAN;
        }
        if !self.is_square() || self.diagonals == DiagonalRule::Euclidean {
            return dx.hypot(dy) / self.size * self.distance;
        }

        let nx = self.cells(dx);
        let ny = self.cells(dy);
        let diagonal = nx.min(ny);
        let straight = nx.max(ny) - diagonal;
        let spaces = match self.diagonals {
            DiagonalRule::Alternating => straight + diagonal + (diagonal / 2.0).floor(),
            _ => straight + diagonal,
        };
        spaces * self.distance
    }

    /// Grid distance between two points, in distance units.
    pub fn measure_points(&self, a: Point, b: Point) -> f64 {
        self.measure_offset(b.x - a.x, b.y - a.y)
    }
}

impl fmt::Display for GridContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} grid, {}px = {} units",
            self.kind.label(),
            self.size,
            self.distance
        )
    }
}
