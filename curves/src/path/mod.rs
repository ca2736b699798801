//!
//! # Paths
//!
//! A `Path` is a single contour made up of `AnchorPoint`s. Each anchor can have an incoming and an outgoing
//! control handle: the segment between two anchors is a straight line when neither of the handles facing it
//! are set, and a cubic bezier curve otherwise. Segments are not stored: `Path::segments()` derives them from
//! the anchors as they are needed.
//!
//! Paths are built with the same verbs as a 2D drawing context (`move_to()`, `line_to()`,
//! `bezier_curve_to()` and so on), or by fitting curves to a set of points with `fit_path()`.
//!

mod anchor;
mod path;
mod segment;
mod flatten;
mod simplify;
mod offset;
mod measure;
mod fit_path;
mod data;
mod error;

pub use self::anchor::*;
pub use self::path::*;
pub use self::segment::*;
pub use self::simplify::*;
pub use self::hit_test::*;
pub use self::fit_path::*;
pub use self::data::*;
pub use self::error::*;
