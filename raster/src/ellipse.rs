use crate::cell::*;
use crate::line::*;
use crate::circle::*;
use crate::options::*;

use flo_ascii_curves::*;

use itertools::*;
use smallvec::*;

///
/// The offsets from the center of the cells on an ellipse with the specified radii
///
/// Uses the two-region midpoint ellipse algorithm: while the outline is shallower than 45 degrees x advances
/// every step, and after that y does. The points found in one quadrant are reflected into the other three.
///
pub fn ellipse_offsets(radius_x: i32, radius_y: i32) -> Vec<GridPoint> {
    let (rx, ry) = (radius_x.max(0) as f64, radius_y.max(0) as f64);

    if rx == 0.0 || ry == 0.0 {
        return vec![(0, 0)];
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;

    let mut offsets = vec![];
    let mut plot    = |x: f64, y: f64| {
        let (x, y) = (x as i32, y as i32);
        let reflections: SmallVec<[GridPoint; 4]> = smallvec![(x, y), (-x, y), (-x, -y), (x, -y)];
        offsets.extend(reflections);
    };

    let mut x   = 0.0;
    let mut y   = ry;
    let mut dx  = 0.0;
    let mut dy  = 2.0 * rx2 * y;

    // Region 1: the slope is shallower than -1
    let mut decision = ry2 - rx2 * ry + 0.25 * rx2;

    while dx < dy {
        plot(x, y);

        x   += 1.0;
        dx  += 2.0 * ry2;

        if decision < 0.0 {
            decision += dx + ry2;
        } else {
            y           -= 1.0;
            dy          -= 2.0 * rx2;
            decision    += dx - dy + ry2;
        }
    }

    // Region 2: the slope is steeper than -1
    let mut decision = ry2 * (x + 0.5) * (x + 0.5) + rx2 * (y - 1.0) * (y - 1.0) - rx2 * ry2;

    while y >= 0.0 {
        plot(x, y);

        y   -= 1.0;
        dy  -= 2.0 * rx2;

        if decision > 0.0 {
            decision += rx2 - dy;
        } else {
            x           += 1.0;
            dx          += 2.0 * ry2;
            decision    += dx - dy + rx2;
        }
    }

    offsets.into_iter().unique().collect()
}

///
/// Generates the cells for the outline of an axis-aligned ellipse
///
/// Ellipses with equal radii are drawn as circles. If one radius is 0, the ellipse collapses to a line, and
/// if both are 0 it's a single point. Each cell's glyph follows the tangent of the ellipse at that point.
///
pub fn rasterize_ellipse(center: impl Into<Vector2>, radius_x: f64, radius_y: f64, options: &RasterOptions) -> Vec<GridCell> {
    if !radius_x.is_finite() || !radius_y.is_finite() || radius_x < 0.0 || radius_y < 0.0 {
        return vec![];
    }

    let center      = center.into();
    let (cx, cy)    = to_grid(center);
    let rx          = radius_x.round() as i32;
    let ry          = radius_y.round() as i32;

    if rx == ry {
        return rasterize_circle(center, radius_x.round(), options);
    }

    if rx == 0 || ry == 0 {
        return rasterize_grid_line((cx - rx, cy - ry), (cx + rx, cy + ry), options);
    }

    let (rx2, ry2) = ((rx * rx) as f64, (ry * ry) as f64);

    ellipse_offsets(rx, ry)
        .into_iter()
        .map(|(x, y)| {
            let offset  = Vector2(x as f64, y as f64);

            // The gradient of x^2/rx^2 + y^2/ry^2 is normal to the outline
            let tangent = Vector2(offset.x() / rx2, offset.y() / ry2).perpendicular();
            let glyph   = options.glyphs.arc_glyph(offset, tangent);

            options.cell(cx + x, cy + y, glyph)
        })
        .collect()
}
