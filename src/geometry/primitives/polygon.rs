use anyhow::{Result, bail};
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::{GeoPosition, Orientation};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Linear};
use crate::geometry::primitives::{Point, Segment, ccw};
use crate::util::sgn;

/// Closed polygon with at least 3 vertices, stored in counter-clockwise order.
///
/// A clockwise vertex sequence is accepted and reversed at construction time;
/// afterwards the polygon is immutable. The vertex sequence is implicitly
/// closed: an edge connects the last vertex back to the first.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    area: f64,
}

impl Polygon {
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            bail!("polygon must have at least 3 vertices: {points:?}");
        }
        if points.iter().tuple_combinations().any(|(p, q)| p == q) {
            bail!("polygon must not contain duplicate vertices: {points:?}");
        }

        let area = Polygon::calculate_area(&points);
        let area = match sgn(area) {
            0 => bail!("polygon has no area: {points:?}"),
            -1 => {
                //vertices must be ordered counter-clockwise (positive area)
                debug!("reversing clockwise vertex sequence to counter-clockwise");
                points.reverse();
                -area
            }
            _ => area,
        };

        Ok(Polygon {
            vertices: points,
            area,
        })
    }

    /// Signed shoelace area of a vertex ring:
    /// counter-clockwise = positive, clockwise = negative.
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma = 0.0;
        for i in 0..points.len() {
            let j = (i + 1) % points.len();
            sigma += points[i].cross(&points[j]);
        }
        0.5 * sigma
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Edge from vertex `i` to its cyclic successor.
    pub fn edge(&self, i: usize) -> Segment {
        let j = (i + 1) % self.n_vertices();
        Segment::new(self.vertices[i], self.vertices[j]).unwrap()
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    /// Area of the interior, always positive.
    pub fn area(&self) -> f64 {
        self.area
    }

    //https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
    pub fn centroid(&self) -> Point {
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = (i + 1) % self.n_vertices();
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            c_x += (x_i + x_j) * (x_i * y_j - x_j * y_i);
            c_y += (y_i + y_j) * (x_i * y_j - x_j * y_i);
        }

        Point(c_x / (6.0 * self.area), c_y / (6.0 * self.area))
    }

    /// Whether `p` lies on the boundary.
    pub fn on_object(&self, p: &Point) -> bool {
        self.edge_iter().any(|e| e.on_object(p))
    }

    /// Whether `p` lies in the interior, by edge-crossing parity.
    ///
    /// Each edge counts iff it straddles the horizontal through `p` under a
    /// half-open convention (lower endpoint inclusive, upper exclusive) and
    /// passes on the negative-x side of `p`. The result for points exactly on
    /// the boundary depends on edge traversal order; use [`Polygon::on_object`]
    /// first if boundary classification matters.
    pub fn inside(&self, p: &Point) -> bool {
        let n = self.n_vertices();
        let mut inside = false;
        for i in 0..n {
            let mut a = self.vertices[i] - *p;
            let mut b = self.vertices[(i + 1) % n] - *p;
            if a.y() > b.y() {
                std::mem::swap(&mut a, &mut b);
            }
            if sgn(a.y()) <= 0 && sgn(b.y()) > 0 && sgn(a.cross(&b)) < 0 {
                inside = !inside;
            }
        }
        inside
    }

    /// Whether `p` lies outside the polygon.
    pub fn outside(&self, p: &Point) -> bool {
        !self.inside(p)
    }

    /// Classifies `p` against interior, boundary and exterior.
    /// Boundary membership is decided before the parity test.
    pub fn position_of(&self, p: &Point) -> GeoPosition {
        if self.on_object(p) {
            GeoPosition::Boundary
        } else if self.inside(p) {
            GeoPosition::Interior
        } else {
            GeoPosition::Exterior
        }
    }

    /// Whether every interior angle is at most 180 degrees.
    ///
    /// Vertices are counter-clockwise, so any clockwise turn fails, as does a
    /// collinear triple that reverses direction. Triples continuing straight
    /// ahead are convex.
    pub fn is_convex(&self) -> bool {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .all(|(&a, &b, &c)| {
                matches!(
                    ccw(a, b, c),
                    Orientation::CounterClockwise | Orientation::OnlineFront
                )
            })
    }

    /// Whether no two non-adjacent edges intersect. O(n²) pairwise scan;
    /// adjacency wraps around the vertex ring.
    pub fn is_simple(&self) -> bool {
        let n = self.n_vertices();
        (0..n).tuple_combinations().all(|(i, j)| {
            let adjacent = (i + 1) % n == j || (j + 1) % n == i;
            adjacent || !self.edge(i).collides_with(&self.edge(j))
        })
    }
}

impl CollidesWith<Point> for Polygon {
    fn collides_with(&self, p: &Point) -> bool {
        self.inside(p) || self.on_object(p)
    }
}

impl DistanceTo<Point> for Polygon {
    fn distance(&self, p: &Point) -> f64 {
        self.sq_distance(p).sqrt()
    }

    fn sq_distance(&self, p: &Point) -> f64 {
        match self.collides_with(p) {
            true => 0.0,
            false => self
                .edge_iter()
                .map(|e| e.sq_distance(p))
                .min_by_key(|&sq_d| OrderedFloat(sq_d))
                .unwrap(),
        }
    }
}
