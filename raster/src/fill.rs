use crate::cell::*;
use crate::path::*;
use crate::circle::*;
use crate::ellipse::*;
use crate::options::*;
use crate::polyline::*;

use flo_ascii_curves::*;

use itertools::*;

use std::collections::{HashSet};

///
/// Generates the fill cells for an axis-aligned rectangle
///
/// With `fill_inset` set, the cells on the outline are left empty for the stroke.
///
pub fn fill_rectangle(x1: f64, y1: f64, x2: f64, y2: f64, options: &RasterOptions) -> Vec<GridCell> {
    let (min_x, min_y)  = to_grid(Vector2(x1.min(x2), y1.min(y2)));
    let (max_x, max_y)  = to_grid(Vector2(x1.max(x2), y1.max(y2)));
    let inset           = if options.fill_inset { 1 } else { 0 };
    let fill            = options.glyphs.fill;

    ((min_y + inset)..=(max_y - inset))
        .cartesian_product((min_x + inset)..=(max_x - inset))
        .map(|(y, x)| options.cell(x, y, fill))
        .collect()
}

///
/// Generates the fill cells for an axis-aligned ellipse
///
/// A cell is inside if `(x/rx)^2 + (y/ry)^2 <= 1`. With `fill_inset` set, the radii are reduced by one cell and
/// the cells drawn by the outline are skipped. Ellipses with a zero radius have no interior.
///
pub fn fill_ellipse(center: impl Into<Vector2>, radius_x: f64, radius_y: f64, options: &RasterOptions) -> Vec<GridCell> {
    if !radius_x.is_finite() || !radius_y.is_finite() {
        return vec![];
    }

    let (cx, cy)    = to_grid(center.into());
    let rx          = radius_x.round() as i32;
    let ry          = radius_y.round() as i32;

    if rx <= 0 || ry <= 0 {
        return vec![];
    }

    let (inside_rx, inside_ry, outline) = if options.fill_inset {
        let outline = if rx == ry { circle_offsets(rx) } else { ellipse_offsets(rx, ry) };
        let outline = outline.into_iter().collect::<HashSet<_>>();
        ((rx - 1) as f64, (ry - 1) as f64, outline)
    } else {
        (rx as f64, ry as f64, HashSet::new())
    };

    if inside_rx <= 0.0 || inside_ry <= 0.0 {
        return vec![];
    }

    let fill = options.glyphs.fill;

    (-ry..=ry)
        .cartesian_product(-rx..=rx)
        .filter(|(y, x)| {
            let (px, py) = ((*x as f64) / inside_rx, (*y as f64) / inside_ry);
            px*px + py*py <= 1.0 && !outline.contains(&(*x, *y))
        })
        .map(|(y, x)| options.cell(cx + x, cy + y, fill))
        .collect()
}

///
/// Generates the fill cells for a circle
///
#[inline]
pub fn fill_circle(center: impl Into<Vector2>, radius: f64, options: &RasterOptions) -> Vec<GridCell> {
    fill_ellipse(center, radius, radius, options)
}

///
/// Generates the fill cells for the area enclosed by a path
///
/// The path is flattened and every cell in its bounding box is tested against the resulting polygon with the
/// path's fill rule (open paths are treated as if they were closed). With `fill_inset` set, cells closer than
/// one cell to the outline, or that the outline would draw itself, are skipped.
///
pub fn fill_path(path: &Path, options: &RasterOptions) -> Vec<GridCell> {
    let polygon = path.flatten_points(options.flatten_tolerance);
    if polygon.len() < 3 {
        return vec![];
    }

    let bounds = match Bounds::from_points(polygon.iter().copied()) {
        Some(bounds)    => bounds,
        None            => { return vec![]; }
    };

    let stroke = if options.fill_inset {
        stroke_vertices(path_stroke_vertices(path, options), true, options)
            .into_iter()
            .map(|cell| cell.position())
            .collect::<HashSet<_>>()
    } else {
        HashSet::new()
    };

    let near_outline = |point: Vector2| {
        polygon.iter()
            .copied()
            .circular_tuple_windows::<(Vector2, Vector2)>()
            .any(|(start, end)| distance_to_segment(point, start, end) < 1.0)
    };

    let min_x   = bounds.min.x().floor() as i32;
    let min_y   = bounds.min.y().floor() as i32;
    let max_x   = bounds.max.x().ceil() as i32;
    let max_y   = bounds.max.y().ceil() as i32;
    let rule    = path.fill_rule();
    let fill    = options.glyphs.fill;

    (min_y..=max_y)
        .cartesian_product(min_x..=max_x)
        .filter(|(y, x)| {
            let point = Vector2(*x as f64, *y as f64);

            point_in_polygon(&polygon, point, rule)
                && !(options.fill_inset && (stroke.contains(&(*x, *y)) || near_outline(point)))
        })
        .map(|(y, x)| options.cell(x, y, fill))
        .collect()
}
