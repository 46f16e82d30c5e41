//! Tangent construction from a point to a circle.

use crate::geometry::primitives::{Circle, Point};

/// Tangent points on `c` of the tangent lines through `p`.
///
/// A point on the circle is its own single tangent point; a point strictly
/// inside yields no real tangent. For an exterior point the two tangent
/// points follow from the right triangle formed by the center-to-point
/// vector, the radius, and the tangent length `sqrt(|q|^2 - r^2)`; the
/// radius vector is rotated by closed form rather than trigonometry, with
/// `mul_add` keeping the intermediate products exact.
pub fn tangent_points(c: &Circle, p: &Point) -> Vec<Point> {
    if c.on_object(p) {
        return vec![*p];
    }
    if c.inside(p) {
        return vec![];
    }
    let q = *p - c.center;
    let nrm = q.norm();
    let r = c.radius;
    let dst = (-r.mul_add(r, -nrm)).sqrt();
    let Point(cx, cy) = c.center;
    vec![
        Point(
            q.x().mul_add(r, q.y() * dst).mul_add(r / nrm, cx),
            q.y().mul_add(r, -q.x() * dst).mul_add(r / nrm, cy),
        ),
        Point(
            q.x().mul_add(r, -q.y() * dst).mul_add(r / nrm, cx),
            q.y().mul_add(r, q.x() * dst).mul_add(r / nrm, cy),
        ),
    ]
}
