use crate::cell::*;
use crate::line::*;
use crate::fill::*;
use crate::path::*;
use crate::circle::*;
use crate::ellipse::*;
use crate::options::*;
use crate::polyline::*;

use flo_ascii_curves::*;

use std::collections::{HashSet};

///
/// A shape that can be drawn on the character grid
///
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { start: Vector2, end: Vector2 },
    Polyline { points: Vec<Vector2>, closed: bool },
    Rectangle { from: Vector2, to: Vector2, filled: bool },
    RoundedRectangle { from: Vector2, to: Vector2, radius: f64, filled: bool },
    Circle { center: Vector2, radius: f64, filled: bool },
    Ellipse { center: Vector2, radius_x: f64, radius_y: f64, filled: bool },
    Path { path: Path, filled: bool },
}

///
/// Combines the cells for the interior and outline of a shape, with the outline drawn last
///
/// When the fill is inset, any fill cells that the outline covers are removed.
///
fn fill_then_stroke(fill: Vec<GridCell>, stroke: Vec<GridCell>, options: &RasterOptions) -> Vec<GridCell> {
    let mut cells = if options.fill_inset {
        let stroke_positions = stroke.iter().map(|cell| cell.position()).collect::<HashSet<_>>();
        fill.into_iter().filter(|cell| !stroke_positions.contains(&cell.position())).collect()
    } else {
        fill
    };

    cells.extend(stroke);
    cells
}

impl Shape {
    ///
    /// Generates the cells for this shape
    ///
    /// For filled shapes, the fill cells come first and the outline is drawn over them.
    ///
    pub fn rasterize(&self, options: &RasterOptions) -> Vec<GridCell> {
        match self {
            Shape::Line { start, end }          => rasterize_line(*start, *end, options),
            Shape::Polyline { points, closed }  => rasterize_polyline(points, *closed, options),

            Shape::Rectangle { from, to, filled } => {
                let stroke = rasterize_rectangle(from.x(), from.y(), to.x(), to.y(), options);
                if !filled { return stroke; }

                fill_then_stroke(fill_rectangle(from.x(), from.y(), to.x(), to.y(), options), stroke, options)
            }

            Shape::RoundedRectangle { from, to, radius, filled } => {
                let stroke = rasterize_rounded_rectangle(from.x(), from.y(), to.x(), to.y(), *radius, options);
                if !filled { return stroke; }

                // The interior is filled using a path with the same corners and radius as the outline
                let ((min_x, min_y), (max_x, max_y), radius) = rounded_rectangle_on_grid(from.x(), from.y(), to.x(), to.y(), *radius);
                let outline = Path::rounded_rectangle(min_x as f64, min_y as f64, max_x as f64, max_y as f64, radius as f64);
                fill_then_stroke(fill_path(&outline, options), stroke, options)
            }

            Shape::Circle { center, radius, filled } => {
                let stroke = rasterize_circle(*center, *radius, options);
                if !filled { return stroke; }

                fill_then_stroke(fill_circle(*center, *radius, options), stroke, options)
            }

            Shape::Ellipse { center, radius_x, radius_y, filled } => {
                let stroke = rasterize_ellipse(*center, *radius_x, *radius_y, options);
                if !filled { return stroke; }

                fill_then_stroke(fill_ellipse(*center, *radius_x, *radius_y, options), stroke, options)
            }

            Shape::Path { path, filled } => {
                let stroke = rasterize_path(path, options);
                if !filled { return stroke; }

                fill_then_stroke(fill_path(path, options), stroke, options)
            }
        }
    }
}

///
/// Generates the cells for a list of shapes, returning one list of cells per shape
///
/// Shapes don't depend on each other, so they're rasterized in parallel.
///
#[cfg(feature="multithreading")]
pub fn rasterize_shapes(shapes: &[Shape], options: &RasterOptions) -> Vec<Vec<GridCell>> {
    use rayon::prelude::*;

    shapes.par_iter()
        .map(|shape| shape.rasterize(options))
        .collect()
}

///
/// Generates the cells for a list of shapes, returning one list of cells per shape
///
#[cfg(not(feature="multithreading"))]
pub fn rasterize_shapes(shapes: &[Shape], options: &RasterOptions) -> Vec<Vec<GridCell>> {
    shapes.iter()
        .map(|shape| shape.rasterize(options))
        .collect()
}
