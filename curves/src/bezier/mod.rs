//!
//! # Bezier curves
//!
//! Quadratic and cubic bezier curves share the `BezierCurve` trait, which supplies evaluation, derivatives,
//! splitting and bounding boxes for each degree and builds the approximating operations (arc length,
//! flattening, nearest point searches) on top of them. `Curve` is a tagged union of the two degrees for
//! places where either kind can appear.
//!
//! `fit_curve()` performs the reverse operation: it finds a small set of cubic curves that pass close to a
//! sequence of points.
//!

mod basis;
mod solve;
mod curve_trait;
mod quadratic;
mod cubic;
mod curve;
mod length;
mod flatten;
mod nearest;
mod fit;
mod arc;

pub use self::basis::*;
pub use self::solve::*;
pub use self::curve_trait::*;
pub use self::quadratic::*;
pub use self::cubic::*;
pub use self::curve::*;
pub use self::length::*;
pub use self::flatten::*;
pub use self::nearest::*;
pub use self::fit::*;
pub use self::arc::*;
