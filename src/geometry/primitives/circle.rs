use std::cmp::Ordering;

use anyhow::{Result, ensure};

use crate::geometry::geo_enums::{CircleLineRelation, CircleRelation, GeoPosition};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::{Line, Point, Segment, colinear};
use crate::util::{FPA, eq, le, sgn};

/// Geometric primitive representing a circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        ensure!(
            center.x().is_finite() && center.y().is_finite(),
            "invalid circle center: {center:?}"
        );
        Ok(Circle { center, radius })
    }

    /// Circle around `center` passing through `p`.
    pub fn from_center_and_point(center: Point, p: Point) -> Self {
        Circle {
            center,
            radius: center.distance(&p),
        }
    }

    /// Circumscribed circle through three non-collinear points.
    pub fn circumscribed(a: Point, b: Point, c: Point) -> Result<Self> {
        let p = b - a;
        let q = c - a;
        let cr = p.cross(&q);
        ensure!(
            sgn(cr) != 0,
            "degenerate circle, collinear points {a:?}, {b:?}, {c:?}"
        );
        let center = a + Point(
            p.norm() * q.y() - q.norm() * p.y(),
            q.norm() * p.x() - p.norm() * q.x(),
        ) / (2.0 * cr);
        Ok(Circle {
            center,
            radius: center.distance(&a),
        })
    }

    /// Whether `p` lies inside the circle, boundary included.
    pub fn inside(&self, p: &Point) -> bool {
        le(self.center.distance(p), self.radius)
    }

    /// Whether `p` lies strictly outside the circle.
    pub fn outside(&self, p: &Point) -> bool {
        !self.inside(p)
    }

    /// Whether `p` lies on the circle.
    pub fn on_object(&self, p: &Point) -> bool {
        eq(self.center.distance(p), self.radius)
    }

    /// Classifies `p` against interior, boundary and exterior.
    pub fn position_of(&self, p: &Point) -> GeoPosition {
        let d = FPA(self.center.distance(p));
        match d.partial_cmp(&FPA(self.radius)).unwrap() {
            Ordering::Equal => GeoPosition::Boundary,
            Ordering::Less => GeoPosition::Interior,
            Ordering::Greater => GeoPosition::Exterior,
        }
    }

    /// Classifies the relation between the boundaries of `self` and `other`.
    ///
    /// The tangency checks must run before the inequality checks, otherwise
    /// tangent configurations degrade to [`CircleRelation::Disjoint`] or
    /// [`CircleRelation::Contained`].
    pub fn relation_to(&self, other: &Circle) -> CircleRelation {
        let d = self.center.distance(&other.center);
        let r_sum = self.radius + other.radius;
        let r_diff = (self.radius - other.radius).abs();
        if eq(d, r_sum) {
            CircleRelation::Circumscribed
        } else if eq(d, r_diff) {
            CircleRelation::Inscribed
        } else if le(r_sum, d) {
            CircleRelation::Disjoint
        } else if le(d, r_diff) {
            CircleRelation::Contained
        } else {
            CircleRelation::Intersecting
        }
    }

    /// Classifies the relation between `self` and the infinite line `l`.
    pub fn relation_to_line(&self, l: &Line) -> CircleLineRelation {
        let d = l.distance(&self.center);
        if eq(d, self.radius) {
            CircleLineRelation::Tangent
        } else if le(d, self.radius) {
            CircleLineRelation::Crossing
        } else {
            CircleLineRelation::Separate
        }
    }
}

/// Incircle of the triangle `a`, `b`, `c`: center is the vertex average
/// weighted by opposite side lengths, radius is area over semiperimeter.
pub fn incircle(a: Point, b: Point, c: Point) -> Result<Circle> {
    ensure!(
        !colinear(a, b, c),
        "degenerate triangle {a:?}, {b:?}, {c:?}"
    );
    let la = b.distance(&c);
    let lb = c.distance(&a);
    let lc = a.distance(&b);
    let perimeter = la + lb + lc;
    let center = (a * la + b * lb + c * lc) / perimeter;
    let area = (a - c).cross(&(b - c)).abs() / 2.0;
    Ok(Circle {
        center,
        radius: area / (perimeter / 2.0),
    })
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, p: &Point) -> bool {
        self.inside(p)
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        //disk overlap, containment included
        le(
            self.center.distance(&other.center),
            self.radius + other.radius,
        )
    }
}

impl CollidesWith<Line> for Circle {
    fn collides_with(&self, l: &Line) -> bool {
        le(l.distance(&self.center), self.radius)
    }
}

impl CollidesWith<Circle> for Line {
    fn collides_with(&self, c: &Circle) -> bool {
        c.collides_with(self)
    }
}

impl CollidesWith<Segment> for Circle {
    fn collides_with(&self, s: &Segment) -> bool {
        le(s.distance(&self.center), self.radius)
    }
}

impl CollidesWith<Circle> for Segment {
    fn collides_with(&self, c: &Circle) -> bool {
        c.collides_with(self)
    }
}

impl DistanceTo<Line> for Circle {
    fn distance(&self, l: &Line) -> f64 {
        f64::max(l.distance(&self.center) - self.radius, 0.0)
    }

    fn sq_distance(&self, l: &Line) -> f64 {
        self.distance(l).powi(2)
    }
}

impl DistanceTo<Circle> for Line {
    fn distance(&self, c: &Circle) -> f64 {
        c.distance(self)
    }

    fn sq_distance(&self, c: &Circle) -> f64 {
        c.sq_distance(self)
    }
}
