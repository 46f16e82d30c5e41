use anyhow::{Result, ensure};
use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::Orientation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Linear};
use crate::geometry::primitives::{Line, Point, ccw};
use crate::util::le;

/// Line segment between two [`Point`]s, endpoints included.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Result<Self> {
        ensure!(start != end, "degenerate segment, {start:?} == {end:?}");
        Ok(Segment { start, end })
    }

    /// Segment of length `length` starting at `start` with inclination `theta`.
    pub fn from_point_angle_length(start: Point, theta: f64, length: f64) -> Result<Self> {
        Segment::new(start, start + Point::polar(theta, length))
    }

    pub fn x1(&self) -> f64 {
        self.start.x()
    }

    pub fn y1(&self) -> f64 {
        self.start.y()
    }

    pub fn x2(&self) -> f64 {
        self.end.x()
    }

    pub fn y2(&self) -> f64 {
        self.end.y()
    }

    /// Extent along the x-axis.
    pub fn dx(&self) -> f64 {
        self.start.xdist(&self.end)
    }

    /// Extent along the y-axis.
    pub fn dy(&self) -> f64 {
        self.start.ydist(&self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    pub fn end_points(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    pub fn mid_point(&self) -> Point {
        crate::geometry::primitives::mid_point(self.start, self.end)
    }

    /// Copy translated by the vector `v`.
    pub fn translated(&self, v: Point) -> Self {
        Segment {
            start: self.start + v,
            end: self.end + v,
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
    /// (a quarter turn counter-clockwise from start towards end).
    pub fn move_v(&self, dist: f64) -> Self {
        self.translated(self.direction().rotated(std::f64::consts::FRAC_PI_2) * dist)
    }

    /// Copy rotated counter-clockwise by `theta` around its start point.
    pub fn rotated(&self, theta: f64) -> Self {
        Segment {
            start: self.start,
            end: self.start + (self.end - self.start).rotated(theta),
        }
    }
}

impl Linear for Segment {
    fn a(&self) -> Point {
        self.start
    }

    fn b(&self) -> Point {
        self.end
    }

    fn on_object(&self, p: &Point) -> bool {
        ccw(self.start, self.end, *p) == Orientation::OnSegment
    }
}

//whether s touches `other`: an endpoint of s lies on `other` (honoring its
//domain), or the endpoints of s strictly straddle its carrier line
fn meets<L: Linear>(s: &Segment, other: &L) -> bool {
    if other.on_object(&s.start) || other.on_object(&s.end) {
        return true;
    }
    let o1 = ccw(other.a(), other.b(), s.start);
    let o2 = ccw(other.a(), other.b(), s.end);
    matches!(
        (o1, o2),
        (Orientation::Clockwise, Orientation::CounterClockwise)
            | (Orientation::CounterClockwise, Orientation::Clockwise)
    )
}

impl CollidesWith<Line> for Segment {
    fn collides_with(&self, l: &Line) -> bool {
        meets(self, l)
    }
}

impl CollidesWith<Segment> for Line {
    fn collides_with(&self, s: &Segment) -> bool {
        s.collides_with(self)
    }
}

impl CollidesWith<Segment> for Segment {
    fn collides_with(&self, other: &Segment) -> bool {
        //both directions, so collinear overlap and touching endpoints resolve
        meets(self, other) && meets(other, self)
    }
}

impl CollidesWith<Point> for Segment {
    fn collides_with(&self, p: &Point) -> bool {
        self.on_object(p)
    }
}

impl DistanceTo<Point> for Segment {
    fn distance(&self, p: &Point) -> f64 {
        let d = self.end - self.start;
        let t = (*p - self.start).dot(&d);
        if le(0.0, t) && le(t, d.norm()) {
            //projection falls within the segment
            self.carrier().distance(p)
        } else {
            f64::min(self.start.distance(p), self.end.distance(p))
        }
    }

    fn sq_distance(&self, p: &Point) -> f64 {
        self.distance(p).powi(2)
    }
}

impl DistanceTo<Segment> for Point {
    fn distance(&self, s: &Segment) -> f64 {
        s.distance(self)
    }

    fn sq_distance(&self, s: &Segment) -> f64 {
        s.sq_distance(self)
    }
}

impl DistanceTo<Line> for Segment {
    fn distance(&self, l: &Line) -> f64 {
        if self.collides_with(l) {
            return 0.0;
        }
        f64::min(l.distance(&self.start), l.distance(&self.end))
    }

    fn sq_distance(&self, l: &Line) -> f64 {
        self.distance(l).powi(2)
    }
}

impl DistanceTo<Segment> for Line {
    fn distance(&self, s: &Segment) -> f64 {
        s.distance(self)
    }

    fn sq_distance(&self, s: &Segment) -> f64 {
        s.sq_distance(self)
    }
}

impl DistanceTo<Segment> for Segment {
    fn distance(&self, other: &Segment) -> f64 {
        if self.collides_with(other) {
            return 0.0;
        }
        [
            self.distance(&other.start),
            self.distance(&other.end),
            other.distance(&self.start),
            other.distance(&self.end),
        ]
        .into_iter()
        .min_by_key(|&d| OrderedFloat(d))
        .unwrap()
    }

    fn sq_distance(&self, other: &Segment) -> f64 {
        self.distance(other).powi(2)
    }
}
