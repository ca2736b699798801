use super::curve_trait::*;
use crate::geo::*;

///
/// Deepest level of subdivision used when measuring or flattening a curve
///
/// Reaching this depth means the tolerance is unreachable (or the curve is degenerate), so the current
/// approximation is accepted as-is.
///
pub const MAX_SUBDIVISION_DEPTH: u32 = 18;

/// A curve is always divided at least this many times before the chord test can accept a length
const MIN_LENGTH_DEPTH: u32 = 2;

///
/// Estimates the length of a curve
///
/// The curve is divided at the midpoint of its parameter range. If the two chords from the ends to the
/// midpoint have nearly the same combined length as the chord between the ends, the two chords are taken as
/// the length of the range; otherwise each half is measured the same way.
///
pub fn curve_length<TCurve: BezierCurve>(curve: &TCurve, tolerance: f64) -> f64 {
    let start   = curve.point_at(0.0);
    let end     = curve.point_at(1.0);

    length_between(curve, (0.0, start), (1.0, end), tolerance, 0)
}

fn length_between<TCurve: BezierCurve>(curve: &TCurve, (t1, p1): (f64, Vector2), (t2, p2): (f64, Vector2), tolerance: f64, depth: u32) -> f64 {
    let mid_t       = (t1 + t2) * 0.5;
    let mid_point   = curve.point_at(mid_t);

    let chord       = p1.distance_to(p2);
    let halves      = p1.distance_to(mid_point) + mid_point.distance_to(p2);

    if depth >= MAX_SUBDIVISION_DEPTH || (depth >= MIN_LENGTH_DEPTH && (halves - chord).abs() < tolerance) {
        halves
    } else {
        length_between(curve, (t1, p1), (mid_t, mid_point), tolerance, depth + 1)
            + length_between(curve, (mid_t, mid_point), (t2, p2), tolerance, depth + 1)
    }
}
