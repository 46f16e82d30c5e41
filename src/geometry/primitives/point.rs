use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::geometry::geo_enums::Orientation;
use crate::geometry::geo_traits::DistanceTo;
use crate::util::{eq, le, sgn};

/// Geometric primitive representing a point, doubling as a free 2D vector
/// (the difference of two points).
#[derive(Debug, Clone, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Point at angle `theta` (radians) and distance `rho` from the origin.
    pub fn polar(theta: f64, rho: f64) -> Self {
        Point(rho * theta.cos(), rho * theta.sin())
    }

    /// Rotates the point around the origin by `theta` radians, in place.
    pub fn rotate(&mut self, theta: f64) {
        let (sin, cos) = theta.sin_cos();
        let Point(x, y) = *self;
        self.0 = x * cos - y * sin;
        self.1 = x * sin + y * cos;
    }

    /// Copy of this point rotated around the origin by `theta` radians.
    pub fn rotated(mut self, theta: f64) -> Self {
        self.rotate(theta);
        self
    }

    /// Dot product with `other`.
    pub fn dot(&self, other: &Point) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    /// Cross product with `other` (z-component of the 3D cross product).
    pub fn cross(&self, other: &Point) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    /// Squared length when interpreted as a vector.
    pub fn norm(&self) -> f64 {
        self.0 * self.0 + self.1 * self.1
    }

    /// Length when interpreted as a vector.
    pub fn abs(&self) -> f64 {
        self.0.hypot(self.1)
    }

    /// Polar angle when interpreted as a vector, in `(-PI, PI]`.
    pub fn arg(&self) -> f64 {
        self.1.atan2(self.0)
    }

    /// Distance along the x-axis to `other`.
    pub fn xdist(&self, other: &Point) -> f64 {
        (self.0 - other.0).abs()
    }

    /// Distance along the y-axis to `other`.
    pub fn ydist(&self, other: &Point) -> f64 {
        (self.1 - other.1).abs()
    }
}

impl DistanceTo<Point> for Point {
    fn distance(&self, other: &Point) -> f64 {
        //hypot instead of sqrt of squares, to dodge overflow on large coordinates
        (self.0 - other.0).hypot(self.1 - other.1)
    }

    fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        eq(self.0, other.0) && eq(self.1, other.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point(-self.0, -self.1)
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point(self.0 * rhs.0, self.1 * rhs.1)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

impl Div for Point {
    type Output = Point;

    fn div(self, rhs: Point) -> Point {
        Point(self.0 / rhs.0, self.1 / rhs.1)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point(self.0 / rhs, self.1 / rhs)
    }
}

/// Point dividing the segment `p`–`q` internally in the ratio `a : b`.
pub fn internal_div(p: Point, q: Point, a: f64, b: f64) -> Point {
    assert!(
        a >= 0.0 && b >= 0.0 && a + b > 0.0,
        "invalid internal division ratio {a} : {b}"
    );
    (p * b + q * a) / (a + b)
}

/// Midpoint of `p` and `q`.
pub fn mid_point(p: Point, q: Point) -> Point {
    internal_div(p, q, 1.0, 1.0)
}

/// Point dividing the segment `p`–`q` externally in the ratio `a : b`.
pub fn external_div(p: Point, q: Point, a: f64, b: f64) -> Point {
    assert!(
        a >= 0.0 && b >= 0.0 && !eq(a, b),
        "invalid external division ratio {a} : {b}"
    );
    (q * a - p * b) / (a - b)
}

/// Classifies how the three points `a`, `b`, `c` are arranged.
///
/// `b` and `c` are translated by `-a`; the sign of their cross product decides
/// the two strict orientations, the dot product and relative magnitudes split
/// the collinear cases.
pub fn ccw(a: Point, b: Point, c: Point) -> Orientation {
    let b = b - a;
    let c = c - a;
    match sgn(b.cross(&c)) {
        1 => Orientation::CounterClockwise,
        -1 => Orientation::Clockwise,
        _ => {
            if sgn(b.dot(&c)) < 0 {
                Orientation::OnlineBack
            } else if le(c.abs(), b.abs()) {
                Orientation::OnSegment
            } else {
                Orientation::OnlineFront
            }
        }
    }
}

/// Whether `p`, `q`, `r` lie on a single line.
pub fn colinear(p: Point, q: Point, r: Point) -> bool {
    !matches!(
        ccw(p, q, r),
        Orientation::Clockwise | Orientation::CounterClockwise
    )
}

//3x3-determinant-style expression deciding the position of s relative to the
//circle through p, q, r; zero iff s lies on that circle
fn co_circle_moment(p: Point, q: Point, r: Point, s: Point) -> f64 {
    let (p, q, r) = (p - s, q - s, r - s);
    p.cross(&q) * r.norm() + q.cross(&r) * p.norm() + r.cross(&p) * q.norm()
}

//twice the signed area of the triangle p, q, r, translated by -s
fn co_circle_orient(p: Point, q: Point, r: Point, s: Point) -> f64 {
    let (p, q, r) = (p - s, q - s, r - s);
    p.cross(&q) + q.cross(&r) + r.cross(&p)
}

/// Whether `s` lies strictly inside the circle through `p`, `q`, `r`.
pub fn in_circle(p: Point, q: Point, r: Point, s: Point) -> bool {
    sgn(co_circle_moment(p, q, r, s)) == sgn(co_circle_orient(p, q, r, s))
}

/// Whether `s` lies on the circle through `p`, `q`, `r`.
pub fn on_circle(p: Point, q: Point, r: Point, s: Point) -> bool {
    eq(co_circle_moment(p, q, r, s), 0.0)
}

/// Whether `s` lies strictly outside the circle through `p`, `q`, `r`.
pub fn out_circle(p: Point, q: Point, r: Point, s: Point) -> bool {
    sgn(co_circle_moment(p, q, r, s)) == -sgn(co_circle_orient(p, q, r, s))
}
