use crate::geometry::primitives::{Line, Point};

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of a collision.
    fn distance(&self, other: &T) -> f64;

    /// Squared version of [`DistanceTo::distance`]
    fn sq_distance(&self, other: &T) -> f64;
}

/// Trait for the line family ([`Line`], [`Segment`], [`Ray`]): one shared
/// two-point carrier representation with three different membership semantics.
///
/// All carrier-line math (direction, projection, reflection, angles) is
/// provided here and never branches on the concrete type; only
/// [`Linear::on_object`] differs per type.
///
/// [`Segment`]: crate::geometry::primitives::Segment
/// [`Ray`]: crate::geometry::primitives::Ray
pub trait Linear {
    /// First defining point of the carrier line.
    fn a(&self) -> Point;

    /// Second defining point of the carrier line. Never equal to [`Linear::a`].
    fn b(&self) -> Point;

    /// Whether `p` lies on this object, honoring its domain
    /// (the whole carrier line, a half-line, or a closed segment).
    fn on_object(&self, p: &Point) -> bool;

    /// Unit vector pointing from [`Linear::a`] to [`Linear::b`].
    fn direction(&self) -> Point {
        let d = self.b() - self.a();
        d / d.abs()
    }

    /// The infinite line through [`Linear::a`] and [`Linear::b`].
    fn carrier(&self) -> Line {
        Line {
            a: self.a(),
            b: self.b(),
        }
    }

    /// Orthogonal projection of `p` onto the carrier line.
    fn projection(&self, p: &Point) -> Point {
        let u = *p - self.a();
        let v = self.b() - self.a();
        self.a() + v * (u.dot(&v) / v.norm())
    }

    /// Mirror image of `p` across the carrier line.
    fn reflection(&self, p: &Point) -> Point {
        self.projection(p) * 2.0 - *p
    }

    /// Slope of the carrier line. Vertical lines yield an infinite value.
    fn slope(&self) -> f64 {
        let (a, b) = (self.a(), self.b());
        (b.y() - a.y()) / (b.x() - a.x())
    }

    fn is_horizontal(&self) -> bool {
        crate::util::eq(self.a().y(), self.b().y())
    }

    fn is_vertical(&self) -> bool {
        crate::util::eq(self.a().x(), self.b().x())
    }
}
