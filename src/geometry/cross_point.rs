//! Exact intersection points between pairs of primitives, one function per
//! concrete pair. Expected degeneracies (tangency, empty intersection) are
//! encoded in the return type; parallel carrier lines are a caller error.

use crate::geometry::geo_enums::CircleLineRelation;
use crate::geometry::geo_traits::{DistanceTo, Linear};
use crate::geometry::primitives::{Circle, Line, Point, Segment, parallel};
use crate::util::eq;

/// Intersection point of two non-parallel infinite lines, solved with the
/// cross-product form of the 2x2 linear system.
///
/// # Panics
/// Panics when the lines are parallel; callers rule that out up front.
pub fn line_line(a: &Line, b: &Line) -> Point {
    assert!(!parallel(a, b), "cross point of parallel lines");
    let da = a.b - a.a;
    let db = b.b - b.a;
    a.a - da * ((a.a - b.a).cross(&db) / da.cross(&db))
}

/// Intersection point of a segment and a non-parallel infinite line, if the
/// carrier-line intersection falls within the segment.
pub fn segment_line(s: &Segment, l: &Line) -> Option<Point> {
    let p = line_line(&s.carrier(), l);
    s.on_object(&p).then_some(p)
}

/// See [`segment_line`].
pub fn line_segment(l: &Line, s: &Segment) -> Option<Point> {
    segment_line(s, l)
}

/// Intersection point of two segments with non-parallel carrier lines, if it
/// falls within both.
pub fn segment_segment(a: &Segment, b: &Segment) -> Option<Point> {
    let p = line_line(&a.carrier(), &b.carrier());
    (a.on_object(&p) && b.on_object(&p)).then_some(p)
}

/// Intersection points of a circle and an infinite line: two when crossing,
/// the single projection point when tangent, none when separate.
pub fn circle_line(c: &Circle, l: &Line) -> Vec<Point> {
    match c.relation_to_line(l) {
        CircleLineRelation::Separate => vec![],
        CircleLineRelation::Tangent => vec![l.projection(&c.center)],
        CircleLineRelation::Crossing => {
            let d = l.distance(&c.center);
            let v = l.direction() * (c.radius * c.radius - d * d).sqrt();
            let p = l.projection(&c.center);
            vec![p + v, p - v]
        }
    }
}

/// See [`circle_line`].
pub fn line_circle(l: &Line, c: &Circle) -> Vec<Point> {
    circle_line(c, l)
}

/// Intersection points of two circles, via the radical line: the line through
/// the (at most two) common points, intersected with the first circle.
pub fn circle_circle(c1: &Circle, c2: &Circle) -> Vec<Point> {
    //translate so the midpoint of the centers is the origin; with
    //d = c1.center - c2.center the radical line is d.x*x + d.y*y = r_diff
    let m = (c1.center + c2.center) / 2.0;
    let d = c1.center - c2.center;
    let r_diff = (c2.radius * c2.radius - c1.radius * c1.radius) / 2.0;
    let radical = if eq(r_diff, 0.0) {
        //equal radii: perpendicular bisector of the centers
        Line {
            a: m,
            b: m + d.rotated(std::f64::consts::FRAC_PI_2),
        }
    } else {
        let k = r_diff / d.norm();
        let s = (d.x() + d.y()) * k;
        let t = (d.x() - d.y()) * k;
        Line {
            a: Point(s, -t) + m,
            b: Point(t, s) + m,
        }
    };
    circle_line(c1, &radical)
}
