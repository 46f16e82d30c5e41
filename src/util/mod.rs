mod fpa;

#[doc(inline)]
pub use fpa::EPS;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::eq;
#[doc(inline)]
pub use fpa::le;
#[doc(inline)]
pub use fpa::sgn;
