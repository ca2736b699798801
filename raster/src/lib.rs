//!
//! # flo_ascii_raster
//!
//! `flo_ascii_raster` converts the continuous geometry from `flo_ascii_curves` into cells on a grid of
//! characters. Lines use Bresenham's algorithm, circles and ellipses use the midpoint algorithms and filled
//! shapes are scanned a row at a time. Each cell gets a glyph chosen from the direction of the stroke that
//! passes through it, so a diagonal line is drawn with `/` or `\` and the corners of a rectangle get corner
//! glyphs.
//!
//! Every rasterizer returns a list of `GridCell`s rather than writing to a buffer: where cells overlap, the
//! last one written wins. `CharGrid` is a simple buffer that applies that rule and can render the result as a
//! string. Shapes are independent of each other, so `rasterize_shapes()` can process many of them in
//! parallel (with the `multithreading` feature).
//!

#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

pub use flo_ascii_curves as curves;

mod cell;
mod glyphs;
mod options;
mod line;
mod circle;
mod ellipse;
mod polyline;
mod fill;
mod path;
mod grid;
mod shapes;

pub use self::cell::*;
pub use self::glyphs::*;
pub use self::options::*;
pub use self::line::*;
pub use self::circle::*;
pub use self::ellipse::*;
pub use self::polyline::*;
pub use self::fill::*;
pub use self::path::*;
pub use self::grid::*;
pub use self::shapes::*;
