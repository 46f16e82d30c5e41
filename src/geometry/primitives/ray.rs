use anyhow::{Result, ensure};

use crate::geometry::geo_enums::Orientation;
use crate::geometry::geo_traits::{CollidesWith, Linear};
use crate::geometry::primitives::{Point, ccw};

/// Half-line starting at `source` and passing through `through`.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Ray {
    pub source: Point,
    pub through: Point,
}

impl Ray {
    pub fn new(source: Point, through: Point) -> Result<Self> {
        ensure!(source != through, "degenerate ray, {source:?} == {through:?}");
        Ok(Ray { source, through })
    }

    /// Ray starting at `source` with inclination `theta` (radians).
    pub fn from_point_and_angle(source: Point, theta: f64) -> Self {
        Ray {
            source,
            through: source + Point::polar(theta, 1.0),
        }
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn x(&self) -> f64 {
        self.source.x()
    }

    pub fn y(&self) -> f64 {
        self.source.y()
    }

    /// Copy translated by the vector `v`.
    pub fn translated(&self, v: Point) -> Self {
        Ray {
            source: self.source + v,
            through: self.through + v,
        }
    }

    /// Copy translated by `dist` along the x-axis.
    pub fn move_x(&self, dist: f64) -> Self {
        self.translated(Point(dist, 0.0))
    }

    /// Copy translated by `dist` along the y-axis.
    pub fn move_y(&self, dist: f64) -> Self {
        self.translated(Point(0.0, dist))
    }

    /// Copy translated by `dist` orthogonally to its direction
    /// (a quarter turn counter-clockwise from the direction of travel).
    pub fn move_v(&self, dist: f64) -> Self {
        self.translated(self.direction().rotated(std::f64::consts::FRAC_PI_2) * dist)
    }

    /// Copy rotated counter-clockwise by `theta` around its source.
    pub fn rotated(&self, theta: f64) -> Self {
        Ray {
            source: self.source,
            through: self.source + (self.through - self.source).rotated(theta),
        }
    }
}

impl Linear for Ray {
    fn a(&self) -> Point {
        self.source
    }

    fn b(&self) -> Point {
        self.through
    }

    fn on_object(&self, p: &Point) -> bool {
        matches!(
            ccw(self.source, self.through, *p),
            Orientation::OnSegment | Orientation::OnlineFront
        )
    }
}

impl CollidesWith<Point> for Ray {
    fn collides_with(&self, p: &Point) -> bool {
        self.on_object(p)
    }
}
