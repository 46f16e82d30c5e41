use std::cmp::Ordering;
use std::fmt::Display;

/// Tolerance below which two coordinates are considered equal.
/// Relative above magnitude 1, absolute below (see [`eq`]).
pub const EPS: f64 = 1e-10;

/// Sign of `a` with the band `[-EPS, EPS]` mapping to 0.
pub const fn sgn(a: f64) -> i32 {
    if a < -EPS {
        -1
    } else if a > EPS {
        1
    } else {
        0
    }
}

/// Tolerant equality: relative error when `|a| > 1`, absolute error otherwise.
/// The mixed policy keeps the tolerance meaningful across magnitudes.
pub fn eq(a: f64, b: f64) -> bool {
    if a.abs() > 1.0 {
        ((a - b) / a).abs() < EPS
    } else {
        (a - b).abs() < EPS
    }
}

/// `a <= b` under the tolerance of [`eq`].
pub fn le(a: f64, b: f64) -> bool {
    a < b || eq(a, b)
}

/// Wrapper around [`eq`] for easy comparison of floats with tolerance.
/// Two FPAs are considered equal if they are within tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        eq(self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
