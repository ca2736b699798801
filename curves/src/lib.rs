//!
//! # flo_ascii_curves
//!
//! `flo_ascii_curves` provides the geometry used to describe drawings that are eventually rendered as grids
//! of characters rather than pixels. It supplies quadratic and cubic bezier curves, paths made up of anchor
//! points with optional control handles, and a least-squares curve fitter that can turn a sequence of points
//! (for instance, the output of a freehand drawing tool) into a small number of cubic curves.
//!
//! Everything in this library is a value type: operations return new curves, paths or derived values and
//! there is no shared state, so independent paths can be processed on as many threads as a caller likes.
//!
//! Degenerate geometry (zero-length segments, coincident control points and so on) never produces an error:
//! instead, operations return a sensible default (a curvature of 0, a tangent of `(1, 0)`). The only fallible
//! operation is rebuilding a path from its serialized form, which returns a `PathError`.
//!
//! `flo_ascii_raster` turns the geometry here into lists of grid cells.
//!

#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod geo;
mod bezier;
mod path;
mod options;

pub use self::geo::*;
pub use self::bezier::*;
pub use self::path::*;
pub use self::options::*;
