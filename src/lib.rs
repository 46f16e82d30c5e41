//! 2D computational-geometry primitives — points, lines, rays, segments,
//! circles and polygons — and the relational algorithms between them:
//! intersection testing and classification, distance, exact cross-point
//! computation and tangent construction.
//!
//! The crate owns no I/O and keeps no shared state; every operation is a
//! deterministic function of immutable value types.

/// Geometric primitives and the algorithms operating on them
pub mod geometry;

/// Tolerant floating-point comparison used by every geometric decision
pub mod util;
