use crate::cell::*;
use crate::line::*;
use crate::circle::*;
use crate::glyphs::*;
use crate::options::*;

use flo_ascii_curves::*;

use itertools::*;

///
/// A vertex of a stroke on the grid
///
/// `corner` is set if a corner glyph can replace the stroke glyph at this vertex (it's cleared for the
/// points generated when flattening a curve, which are not real corners).
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub (crate) struct StrokeVertex {
    pub position:   GridPoint,
    pub corner:     bool,
}

///
/// Draws the lines joining a list of vertices
///
/// Vertices that land on the same grid position are merged. Each line after the first skips its first cell
/// (the previous line already drew it), and corner glyphs are substituted into the cells of any vertex where
/// the stroke makes a right-angled turn.
///
pub (crate) fn stroke_vertices(vertices: impl IntoIterator<Item=StrokeVertex>, closed: bool, options: &RasterOptions) -> Vec<GridCell> {
    let mut vertices = vertices.into_iter()
        .coalesce(|a, b| {
            if a.position == b.position {
                Ok(StrokeVertex { position: a.position, corner: a.corner || b.corner })
            } else {
                Err((a, b))
            }
        })
        .collect::<Vec<_>>();

    // The end of a closed stroke often repeats the start
    if closed && vertices.len() > 1 && vertices[0].position == vertices[vertices.len()-1].position {
        if let Some(last) = vertices.pop() {
            vertices[0].corner |= last.corner;
        }
    }

    let num_vertices = vertices.len();
    match num_vertices {
        0 => { return vec![]; }
        1 => { return vec![options.cell(vertices[0].position.0, vertices[0].position.1, options.glyphs.point)]; }
        _ => { }
    }

    // Two vertices can't enclose anything, so they are drawn as a single line
    let closed          = closed && num_vertices > 2;
    let num_segments    = if closed { num_vertices } else { num_vertices - 1 };

    let mut cells           = vec![];
    let mut vertex_cells    = vec![0; num_vertices];
    let mut directions      = Vec::with_capacity(num_segments);

    for idx in 0..num_segments {
        let start       = vertices[idx].position;
        let end_idx     = (idx + 1) % num_vertices;
        let end         = vertices[end_idx].position;

        directions.push(grid_direction((end.0 - start.0) as f64, (end.1 - start.1) as f64));

        let skip = if idx == 0 { 0 } else { 1 };
        cells.extend(rasterize_grid_line(start, end, options).into_iter().skip(skip));

        if end_idx == 0 {
            // The closing line ends where the first line started
            cells.pop();
        } else {
            vertex_cells[end_idx] = cells.len() - 1;
        }
    }

    // Substitute the corners
    for idx in 0..num_vertices {
        if !vertices[idx].corner { continue; }

        let (incoming, outgoing) = if closed {
            (directions[(idx + num_segments - 1) % num_segments], directions[idx])
        } else if idx > 0 && idx < num_segments {
            (directions[idx - 1], directions[idx])
        } else {
            continue;
        };

        if let Some(glyph) = options.glyphs.corner_glyph(incoming, outgoing) {
            cells[vertex_cells[idx]].glyph = glyph;
        }
    }

    cells
}

///
/// Generates the cells for a series of connected lines
///
/// The points are rounded to the grid. If `closed` is set, a line joins the last point back to the first.
/// Where the lines turn through a right angle, the stroke glyph at the turn is replaced with a corner glyph.
///
pub fn rasterize_polyline(points: &[Vector2], closed: bool, options: &RasterOptions) -> Vec<GridCell> {
    let vertices = points.iter()
        .map(|point| StrokeVertex { position: to_grid(*point), corner: true });

    stroke_vertices(vertices, closed, options)
}

///
/// Generates the cells for the outline of an axis-aligned rectangle with corners at `(x1, y1)` and `(x2, y2)`
///
pub fn rasterize_rectangle(x1: f64, y1: f64, x2: f64, y2: f64, options: &RasterOptions) -> Vec<GridCell> {
    let corners = [Vector2(x1, y1), Vector2(x2, y1), Vector2(x2, y2), Vector2(x1, y2)];

    rasterize_polyline(&corners, true, options)
}

///
/// Rounds the corners and corner radius of a rounded rectangle to the grid, returning the top-left corner,
/// the bottom-right corner and a radius no larger than half of the shorter side
///
pub(crate) fn rounded_rectangle_on_grid(x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> (GridPoint, GridPoint, i32) {
    let (min_x, min_y)  = to_grid(Vector2(x1.min(x2), y1.min(y2)));
    let (max_x, max_y)  = to_grid(Vector2(x1.max(x2), y1.max(y2)));
    let radius          = if radius.is_finite() { radius.round() as i64 } else { 0 };
    let half_width      = ((max_x as i64) - (min_x as i64)) / 2;
    let half_height     = ((max_y as i64) - (min_y as i64)) / 2;
    let radius          = radius.max(0).min(half_width).min(half_height) as i32;

    ((min_x, min_y), (max_x, max_y), radius)
}

///
/// Generates the cells for the outline of a rectangle with rounded corners
///
/// The corners are quarter circles drawn with the midpoint circle algorithm. The radius is rounded to the
/// grid and limited to half of the shorter side. A radius of 0 draws an ordinary rectangle.
///
pub fn rasterize_rounded_rectangle(x1: f64, y1: f64, x2: f64, y2: f64, radius: f64, options: &RasterOptions) -> Vec<GridCell> {
    let ((min_x, min_y), (max_x, max_y), radius) = rounded_rectangle_on_grid(x1, y1, x2, y2, radius);

    if radius == 0 {
        return rasterize_rectangle(x1, y1, x2, y2, options);
    }

    // Corner centers, with the quadrant of the circle that each one uses
    let corners = [
        ((min_x + radius, min_y + radius), (-1, -1)),
        ((max_x - radius, min_y + radius), (1, -1)),
        ((max_x - radius, max_y - radius), (1, 1)),
        ((min_x + radius, max_y - radius), (-1, 1)),
    ];

    let offsets     = circle_offsets(radius);
    let mut cells   = vec![];

    for ((cx, cy), (quadrant_x, quadrant_y)) in corners.iter() {
        cells.extend(offsets.iter()
            .filter(|(x, y)| x * quadrant_x >= 0 && y * quadrant_y >= 0)
            .map(|(x, y)| {
                let offset = Vector2(*x as f64, *y as f64);
                options.cell(cx + x, cy + y, options.glyphs.arc_glyph(offset, offset.perpendicular()))
            }));
    }

    // Straight edges (the corners are drawn first so their glyphs are kept where the two meet)
    cells.extend(rasterize_grid_line((min_x + radius, min_y), (max_x - radius, min_y), options));
    cells.extend(rasterize_grid_line((max_x, min_y + radius), (max_x, max_y - radius), options));
    cells.extend(rasterize_grid_line((max_x - radius, max_y), (min_x + radius, max_y), options));
    cells.extend(rasterize_grid_line((min_x, max_y - radius), (min_x, min_y + radius), options));

    unique_cells(cells)
}
