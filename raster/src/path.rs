use crate::cell::*;
use crate::options::*;
use crate::polyline::*;

use flo_ascii_curves::*;

///
/// The vertices of the stroke that draws a path
///
/// Curves are flattened with the tolerance from the options. Corner glyphs are only allowed at corner
/// anchors.
///
pub (crate) fn path_stroke_vertices(path: &Path, options: &RasterOptions) -> Vec<StrokeVertex> {
    let first = match path.anchors().first() {
        Some(first) => first,
        None        => { return vec![]; }
    };

    let mut vertices = vec![StrokeVertex { position: to_grid(first.position()), corner: first.anchor_type() == AnchorType::Corner }];

    for segment in path.segments() {
        if !segment.is_line() {
            let points      = segment.flatten(options.flatten_tolerance);
            let num_points  = points.len();

            vertices.extend(points.into_iter()
                .skip(1)
                .take(num_points.saturating_sub(2))
                .map(|point| StrokeVertex { position: to_grid(point), corner: false }));
        }

        vertices.push(StrokeVertex { position: to_grid(segment.end_point()), corner: segment.end.anchor_type() == AnchorType::Corner });
    }

    vertices
}

///
/// Generates the cells for the outline of a path
///
/// Curved segments are flattened and every segment is then drawn with Bresenham's algorithm. Right-angled
/// turns at corner anchors are drawn with corner glyphs.
///
pub fn rasterize_path(path: &Path, options: &RasterOptions) -> Vec<GridCell> {
    stroke_vertices(path_stroke_vertices(path, options), path.is_closed(), options)
}
