use crate::cell::*;
use crate::options::*;

use flo_ascii_curves::*;

use itertools::*;
use smallvec::*;

///
/// The offsets from the center of the cells on a circle with the specified radius
///
/// The points in one octant are generated with the midpoint circle algorithm and then reflected into the
/// other seven. Each position appears once.
///
pub fn circle_offsets(radius: i32) -> Vec<GridPoint> {
    if radius <= 0 {
        return vec![(0, 0)];
    }

    let mut offsets = vec![];
    let mut x       = radius;
    let mut y       = 0;
    let mut error   = 1 - radius;

    while x >= y {
        let reflections: SmallVec<[GridPoint; 8]> = smallvec![
            (x, y), (y, x), (-y, x), (-x, y),
            (-x, -y), (-y, -x), (y, -x), (x, -y),
        ];
        offsets.extend(reflections);

        y += 1;
        if error < 0 {
            error += 2*y + 1;
        } else {
            x       -= 1;
            error   += 2*(y - x) + 1;
        }
    }

    offsets.into_iter().unique().collect()
}

///
/// Generates the cells for the outline of a circle
///
/// The center and radius are rounded to the grid. Each cell's glyph follows the tangent of the circle at that
/// point. A circle with a radius of 0 is a single point, and circles with a negative or non-finite radius
/// generate no cells.
///
pub fn rasterize_circle(center: impl Into<Vector2>, radius: f64, options: &RasterOptions) -> Vec<GridCell> {
    if !radius.is_finite() || radius < 0.0 {
        return vec![];
    }

    let (cx, cy)    = to_grid(center.into());
    let radius      = radius.round() as i32;

    if radius == 0 {
        return vec![options.cell(cx, cy, options.glyphs.point)];
    }

    circle_offsets(radius)
        .into_iter()
        .map(|(x, y)| {
            let offset  = Vector2(x as f64, y as f64);
            let glyph   = options.glyphs.arc_glyph(offset, offset.perpendicular());

            options.cell(cx + x, cy + y, glyph)
        })
        .collect()
}
