//! Plain 2D value types in scene units (pixels).
//!
//! Y increases downward, matching screen space: `top <= bottom`.

use serde::{Deserialize, Serialize};

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle stored as edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Build a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point {
            x: (self.left + self.right) / 2.0,
            y: (self.top + self.bottom) / 2.0,
        }
    }

    /// Shrink by `amount` on every side.
    ///
    /// The caller guarantees `width, height >= 2 * amount`; a smaller
    /// rectangle would invert.
    pub fn inset(&self, amount: f64) -> Self {
        Rect {
            left: self.left + amount,
            top: self.top + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
        }
    }

    /// True when the two rectangles share any area or edge.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    pub fn left_edge(&self) -> Segment {
        Segment::new(self.top_left(), self.bottom_left())
    }

    pub fn right_edge(&self) -> Segment {
        Segment::new(self.top_right(), self.bottom_right())
    }

    pub fn top_edge(&self) -> Segment {
        Segment::new(self.top_left(), self.top_right())
    }

    pub fn bottom_edge(&self) -> Segment {
        Segment::new(self.bottom_left(), self.bottom_right())
    }
}

/// A closed line segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Segment { a, b }
    }

    /// Point at parameter `t` along the segment (0 = `a`, 1 = `b`).
    pub fn point_at(&self, t: f64) -> Point {
        Point {
            x: self.a.x + (self.b.x - self.a.x) * t,
            y: self.a.y + (self.b.y - self.a.y) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}
