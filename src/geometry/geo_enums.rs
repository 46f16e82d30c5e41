/// Position of three points relative to each other, as classified by
/// [`ccw`](crate::geometry::primitives::ccw).
///
/// Exactly one variant holds for any triple `(a, b, c)` with `a != b`.
/// Callers must match on variants by name; the discriminants carry no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `c` lies strictly to the right of the directed line `a -> b`
    Clockwise,
    /// `c` lies strictly to the left of the directed line `a -> b`
    CounterClockwise,
    /// collinear, with `c` beyond `b`
    OnlineFront,
    /// collinear, with `c` behind `a`
    OnlineBack,
    /// collinear, with `c` between `a` and `b` (endpoints included)
    OnSegment,
}

/// Position of a point relative to a closed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Interior,
    Boundary,
    Exterior,
}

/// Possible relations between the boundaries of two circles A and B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CircleRelation {
    /// boundaries cross in two points
    Intersecting,
    /// externally tangent, touching in a single point
    Circumscribed,
    /// internally tangent, touching in a single point
    Inscribed,
    /// disjoint, each circle entirely outside the other
    Disjoint,
    /// one circle strictly contains the other
    Contained,
}

/// Possible relations between a circle and an infinite line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CircleLineRelation {
    /// the line crosses the circle in two points
    Crossing,
    /// the line touches the circle in a single point
    Tangent,
    /// the line misses the circle
    Separate,
}
