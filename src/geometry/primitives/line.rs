use anyhow::{Result, ensure};

use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Linear};
use crate::geometry::primitives::{Point, colinear};
use crate::util::eq;

/// Infinite line through two distinct points.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Result<Self> {
        ensure!(a != b, "degenerate line, {a:?} == {b:?}");
        Ok(Line { a, b })
    }

    /// Line satisfying `a*x + b*y + c = 0`.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Result<Self> {
        ensure!(
            !eq(a, 0.0) || !eq(b, 0.0),
            "degenerate line, both coefficients zero in {a}x + {b}y + {c} = 0"
        );
        let line = if eq(a, 0.0) {
            Line {
                a: Point(0.0, -c / b),
                b: Point(1.0, -c / b),
            }
        } else {
            //two points at y = 0 and y = 1
            Line {
                a: Point(-c / a, 0.0),
                b: Point(-(c + b) / a, 1.0),
            }
        };
        Ok(line)
    }

    /// Line through `p` with inclination `theta` (radians).
    pub fn from_point_and_angle(p: Point, theta: f64) -> Self {
        Line {
            a: p,
            b: p + Point::polar(theta, 1.0),
        }
    }

    /// Whether `p` lies on the line.
    pub fn on_line(&self, p: &Point) -> bool {
        colinear(self.a, self.b, *p)
    }
}

impl Linear for Line {
    fn a(&self) -> Point {
        self.a
    }

    fn b(&self) -> Point {
        self.b
    }

    fn on_object(&self, p: &Point) -> bool {
        self.on_line(p)
    }
}

/// Whether the carrier lines of `a` and `b` are parallel.
pub fn parallel(a: &impl Linear, b: &impl Linear) -> bool {
    eq((a.a() - a.b()).cross(&(b.a() - b.b())), 0.0)
}

/// Whether the carrier lines of `a` and `b` are orthogonal.
pub fn orthogonal(a: &impl Linear, b: &impl Linear) -> bool {
    eq((a.a() - a.b()).dot(&(b.a() - b.b())), 0.0)
}

/// Angle between the carrier lines of `a` and `b`, folded into `[0, PI/2]`.
pub fn angle(a: &impl Linear, b: &impl Linear) -> f64 {
    let u = a.a() - a.b();
    let v = b.a() - b.b();
    let cos = u.dot(&v).abs() / (u.abs() * v.abs());
    //arccos loses precision near 1, switch to arcsin of the cross-derived sine
    if cos < std::f64::consts::FRAC_1_SQRT_2 {
        cos.acos()
    } else {
        (u.cross(&v).abs() / (u.abs() * v.abs())).asin()
    }
}

impl CollidesWith<Line> for Line {
    fn collides_with(&self, other: &Line) -> bool {
        !parallel(self, other)
    }
}

impl CollidesWith<Point> for Line {
    fn collides_with(&self, p: &Point) -> bool {
        self.on_line(p)
    }
}

impl DistanceTo<Point> for Line {
    fn distance(&self, p: &Point) -> f64 {
        (self.a - *p).cross(&(self.b - *p)).abs() / (self.a - self.b).abs()
    }

    fn sq_distance(&self, p: &Point) -> f64 {
        self.distance(p).powi(2)
    }
}

impl DistanceTo<Line> for Point {
    fn distance(&self, l: &Line) -> f64 {
        l.distance(self)
    }

    fn sq_distance(&self, l: &Line) -> f64 {
        l.sq_distance(self)
    }
}

impl DistanceTo<Line> for Line {
    fn distance(&self, other: &Line) -> f64 {
        match parallel(self, other) {
            true => self.distance(&other.a),
            false => 0.0,
        }
    }

    fn sq_distance(&self, other: &Line) -> f64 {
        self.distance(other).powi(2)
    }
}
