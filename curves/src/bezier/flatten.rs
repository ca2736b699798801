use super::length::*;
use super::curve_trait::*;
use crate::geo::*;

///
/// Approximates a curve with a list of points that starts and ends with the curve's end points
///
/// A section of the curve is drawn as a straight line once its midpoint (and each of its control points) lies
/// within `tolerance` of the chord between its ends; otherwise it is split in half and each half is flattened
/// in turn. As a curve lies within the hull of its control points, no part of the curve is further than
/// `tolerance` from the resulting lines.
///
pub fn flatten_curve<TCurve: BezierCurve>(curve: &TCurve, tolerance: f64) -> Vec<Vector2> {
    let mut points = vec![curve.start_point()];
    flatten_into(curve, tolerance, 0, &mut points);

    points
}

fn flatten_into<TCurve: BezierCurve>(curve: &TCurve, tolerance: f64, depth: u32, output: &mut Vec<Vector2>) {
    if depth >= MAX_SUBDIVISION_DEPTH || is_flat(curve, tolerance) {
        output.push(curve.end_point());
    } else {
        let (left, right) = curve.split(0.5);

        flatten_into(&left, tolerance, depth + 1, output);
        flatten_into(&right, tolerance, depth + 1, output);
    }
}

///
/// True if a curve can be drawn as the line between its end points
///
fn is_flat<TCurve: BezierCurve>(curve: &TCurve, tolerance: f64) -> bool {
    let start   = curve.start_point();
    let end     = curve.end_point();

    if distance_to_segment(curve.point_at(0.5), start, end) >= tolerance {
        return false;
    }

    let control_points  = curve.control_points();
    let last_idx        = control_points.len() - 1;

    control_points[1..last_idx].iter()
        .all(|cp| distance_to_segment(*cp, start, end) < tolerance)
}
