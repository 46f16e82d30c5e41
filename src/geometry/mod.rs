/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Exact intersection points between pairs of primitives
pub mod cross_point;

/// Tangent construction from a point to a circle
pub mod tangent;
