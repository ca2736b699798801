use crate::cell::*;
use crate::options::*;

use flo_ascii_curves::*;

/// The longest line (in cells along its major axis) that will be rasterized
pub const MAX_LINE_LENGTH: i64 = 1 << 20;

///
/// Returns the grid positions on the line between two points, using Bresenham's algorithm
///
/// Both end points are included, and the positions are returned in order from `start` to `end`. Lines that
/// are longer than `MAX_LINE_LENGTH` cells produce no positions.
///
pub fn bresenham_line(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    let (x0, y0) = (start.0 as i64, start.1 as i64);
    let (x1, y1) = (end.0 as i64, end.1 as i64);

    let dx      = (x1 - x0).abs();
    let dy      = -(y1 - y0).abs();
    let step_x  = if x0 < x1 { 1 } else { -1 };
    let step_y  = if y0 < y1 { 1 } else { -1 };

    if dx.max(-dy) > MAX_LINE_LENGTH {
        return vec![];
    }

    let mut points  = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut error   = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        // x and y stay between the end points, so they fit in an i32
        points.push((x as i32, y as i32));

        if x == x1 && y == y1 { break; }

        let error2 = 2 * error;
        if error2 >= dy {
            error   += dy;
            x       += step_x;
        }
        if error2 <= dx {
            error   += dx;
            y       += step_y;
        }
    }

    points
}

///
/// Generates the cells for a line between two grid positions
///
/// Every cell uses the same glyph, chosen from the angle of the whole line. A line that starts and ends in
/// the same place is drawn as a single point.
///
pub fn rasterize_grid_line(start: GridPoint, end: GridPoint, options: &RasterOptions) -> Vec<GridCell> {
    let glyph = options.glyphs.line_glyph(end.0 as f64 - start.0 as f64, end.1 as f64 - start.1 as f64);

    bresenham_line(start, end)
        .into_iter()
        .map(|(x, y)| options.cell(x, y, glyph))
        .collect()
}

///
/// Generates the cells for a line between two points (which are rounded to the nearest grid position)
///
/// A line with an end point that can't be placed on the grid (because it's not finite or is outside the
/// range of an `i32`) produces no cells.
///
pub fn rasterize_line(start: impl Into<Vector2>, end: impl Into<Vector2>, options: &RasterOptions) -> Vec<GridCell> {
    match (try_to_grid(start.into()), try_to_grid(end.into())) {
        (Some(start), Some(end))    => rasterize_grid_line(start, end, options),
        _                           => vec![],
    }
}
