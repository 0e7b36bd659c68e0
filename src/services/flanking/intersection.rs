use crate::models::constants::INTERSECTION_EPSILON;
use crate::models::geometry::{Circle, Point, Segment};

/// Signed area of the triangle `a, b, c`; the sign gives which side of
/// `a -> b` the point `c` lies on, zero when collinear.
fn orient2d(a: Point, b: Point, c: Point) -> f64 {
    (a.y - c.y) * (b.x - c.x) - (a.x - c.x) * (b.y - c.y)
}

/// Whether segment `ab` crosses segment `cd`.
///
/// Touching at an endpoint counts as crossing; two collinear segments never
/// cross.
pub fn segments_intersect(ab: &Segment, cd: &Segment) -> bool {
    let xa = orient2d(ab.a, ab.b, cd.a);
    let xb = orient2d(ab.a, ab.b, cd.b);
    if xa == 0.0 && xb == 0.0 {
        return false;
    }
    let cd_straddles_ab = xa * xb <= 0.0;
    let ab_straddles_cd = orient2d(cd.a, cd.b, ab.a) * orient2d(cd.a, cd.b, ab.b) <= 0.0;
    cd_straddles_ab && ab_straddles_cd
}

/// Points where a segment meets the boundary of a circle.
///
/// Only points on the segment itself are returned (zero, one when tangent or
/// when one endpoint is inside, or two). A segment lying entirely inside the
/// circle has no intersections.
pub fn line_circle_intersections(segment: &Segment, circle: &Circle) -> Vec<Point> {
    let r2 = circle.radius * circle.radius;
    let inside = |p: Point| {
        let (dx, dy) = (p.x - circle.center.x, p.y - circle.center.y);
        dx * dx + dy * dy < r2 - INTERSECTION_EPSILON
    };
    if inside(segment.a) && inside(segment.b) {
        return Vec::new();
    }

    let dx = segment.b.x - segment.a.x;
    let dy = segment.b.y - segment.a.y;
    let ox = segment.a.x - circle.center.x;
    let oy = segment.a.y - circle.center.y;

    let a = dx * dx + dy * dy;
    if a == 0.0 {
        return Vec::new();
    }
    let b = 2.0 * (dx * ox + dy * oy);
    let c = ox * ox + oy * oy - r2;
    let discriminant = b * b - 4.0 * a * c;

    let on_segment = |t: &f64| (0.0..=1.0).contains(t);
    let roots = if discriminant.abs() <= INTERSECTION_EPSILON {
        vec![-b / (2.0 * a)]
    } else if discriminant > 0.0 {
        let root = discriminant.sqrt();
        vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
    } else {
        Vec::new()
    };

    roots
        .into_iter()
        .filter(on_segment)
        .map(|t| segment.point_at(t))
        .collect()
}
