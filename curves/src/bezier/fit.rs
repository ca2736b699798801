use super::cubic::*;
use super::curve_trait::*;
use crate::geo::*;

use itertools::*;

///
/// Deepest level of recursion used when fitting curves
///
/// Any range of points still unfitted at this depth is joined with straight lines instead.
///
pub const MAX_FIT_DEPTH: u32 = 48;

/// Number of times the points are reparameterized before a range is split
const MAX_REPARAMETERIZE_ITERATIONS: usize = 4;

/// Determinants smaller than this are treated as singular when solving for the handle lengths
const SINGULAR_DETERMINANT: f64 = 1e-12;

///
/// Fits a sequence of cubic bezier curves through a list of points
///
/// Each curve passes within `max_error` of the points it covers (measured at the parameter value assigned to
/// each point). Ranges that a single curve can't fit are split at the point with the largest error, so this
/// always succeeds: in the worst case the result is a set of straight lines between the points.
///
pub fn fit_curve(points: &[Vector2], max_error: f64) -> Vec<CubicBezier> {
    // Repeated points produce zero-length chords, which can't be parameterized
    let points = points.iter()
        .copied()
        .dedup_by(|a, b| a.is_near(*b, SMALL_VECTOR))
        .collect::<Vec<_>>();

    match points.len() {
        0 => vec![],
        1 => vec![CubicBezier::from_line(points[0], points[0])],

        _ => {
            let last_idx        = points.len() - 1;
            let start_tangent   = (points[1] - points[0]).normalize();
            let end_tangent     = (points[last_idx - 1] - points[last_idx]).normalize();

            let mut curves = vec![];
            fit_cubic(&points, start_tangent, end_tangent, max_error, 0, &mut curves);

            curves
        }
    }
}

///
/// Fits a range of points, appending the resulting curves to `output`
///
/// The tangents are unit vectors pointing from each end into the curve.
///
fn fit_cubic(points: &[Vector2], start_tangent: Vector2, end_tangent: Vector2, max_error: f64, depth: u32, output: &mut Vec<CubicBezier>) {
    debug_assert!(points.len() >= 2, "Need at least two points to fit a curve (found {})", points.len());

    let last_idx = points.len() - 1;

    // Two points are joined by a curve with handles a third of the way along the line between them
    if points.len() == 2 {
        let handle_length = points[0].distance_to(points[1]) / 3.0;

        output.push(CubicBezier::new(
            points[0],
            points[0] + start_tangent * handle_length,
            points[1] + end_tangent * handle_length,
            points[1]));
        return;
    }

    let error_sq        = max_error * max_error;
    let iteration_error = error_sq * 4.0;

    // Try a curve using the chord-length parameterization
    let mut parameters          = chord_length_parameterize(points);
    let mut curve               = generate_bezier(points, &parameters, start_tangent, end_tangent);
    let (error, mut split)      = max_squared_error(points, &curve, &parameters);

    if error < error_sq {
        output.push(curve);
        return;
    }

    // If the error is not too large, try moving the parameters to the nearest points on the curve
    if error < iteration_error {
        for _ in 0..MAX_REPARAMETERIZE_ITERATIONS {
            parameters          = reparameterize(points, &curve, &parameters);
            curve               = generate_bezier(points, &parameters, start_tangent, end_tangent);
            let (new_error, new_split) = max_squared_error(points, &curve, &parameters);

            split = new_split;

            if new_error < error_sq {
                output.push(curve);
                return;
            }
        }
    }

    if depth >= MAX_FIT_DEPTH {
        // Out of depth: join the points with straight lines (which always pass through every point)
        output.extend(points.iter()
            .copied()
            .tuple_windows()
            .map(|(start, end)| CubicBezier::from_line(start, end)));
        return;
    }

    // Split at the point of maximum error and fit each side
    let split           = split.max(1).min(last_idx - 1);
    let center_tangent  = center_tangent(points, split);

    fit_cubic(&points[0..=split], start_tangent, center_tangent, max_error, depth + 1, output);
    fit_cubic(&points[split..], -center_tangent, end_tangent, max_error, depth + 1, output);
}

///
/// Estimates the tangent at an interior point from its neighbours (pointing back towards the start of the points)
///
fn center_tangent(points: &[Vector2], idx: usize) -> Vector2 {
    let tangent = (points[idx - 1] - points[idx + 1]).normalize();

    if tangent != Vector2::ZERO {
        tangent
    } else {
        // The neighbours coincide (the points double back on themselves)
        let tangent = (points[idx - 1] - points[idx]).normalize();
        if tangent != Vector2::ZERO { tangent } else { -Vector2::UNIT_X }
    }
}

///
/// Assigns a t value to each point proportional to the distance along the polyline through the points
///
fn chord_length_parameterize(points: &[Vector2]) -> Vec<f64> {
    let mut distances = Vec::with_capacity(points.len());
    let mut total     = 0.0;

    distances.push(0.0);
    for (prev, next) in points.iter().tuple_windows() {
        total += prev.distance_to(*next);
        distances.push(total);
    }

    if total <= 0.0 {
        let last_idx = (points.len() - 1).max(1) as f64;
        (0..points.len()).map(|idx| (idx as f64) / last_idx).collect()
    } else {
        distances.into_iter().map(|distance| distance / total).collect()
    }
}

///
/// Finds the cubic curve with the specified end tangents that best fits the points at their t values
///
/// The handle lengths come from the least-squares solution of a 2x2 linear system. If the system is singular
/// or the solution places a handle behind its end point, both handles are set to a third of the distance
/// between the end points instead.
///
fn generate_bezier(points: &[Vector2], parameters: &[f64], start_tangent: Vector2, end_tangent: Vector2) -> CubicBezier {
    let first   = points[0];
    let last    = points[points.len() - 1];

    let mut c = [[0.0, 0.0], [0.0, 0.0]];
    let mut x = [0.0, 0.0];

    for (point, t) in points.iter().zip(parameters.iter()) {
        let t   = *t;
        let mt  = 1.0 - t;
        let b0  = mt * mt * mt;
        let b1  = 3.0 * mt * mt * t;
        let b2  = 3.0 * mt * t * t;
        let b3  = t * t * t;

        let a1  = start_tangent * b1;
        let a2  = end_tangent * b2;

        c[0][0] += a1.dot(a1);
        c[0][1] += a1.dot(a2);
        c[1][1] += a2.dot(a2);

        let remainder = *point - (first * (b0 + b1) + last * (b2 + b3));

        x[0] += a1.dot(remainder);
        x[1] += a2.dot(remainder);
    }
    c[1][0] = c[0][1];

    let det_c0_c1   = c[0][0] * c[1][1] - c[1][0] * c[0][1];
    let det_c0_x    = c[0][0] * x[1] - c[1][0] * x[0];
    let det_x_c1    = x[0] * c[1][1] - x[1] * c[0][1];

    let segment_length  = first.distance_to(last);
    let epsilon         = 1e-6 * segment_length;

    let (alpha_start, alpha_end) = if det_c0_c1.abs() < SINGULAR_DETERMINANT {
        (0.0, 0.0)
    } else {
        (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
    };

    let (alpha_start, alpha_end) = if alpha_start < epsilon || alpha_end < epsilon || !alpha_start.is_finite() || !alpha_end.is_finite() {
        (segment_length / 3.0, segment_length / 3.0)
    } else {
        (alpha_start, alpha_end)
    };

    CubicBezier::new(first, first + start_tangent * alpha_start, last + end_tangent * alpha_end, last)
}

///
/// Returns the largest squared distance between a point and its position on the curve, along with the index of
/// the point where it occurs
///
fn max_squared_error(points: &[Vector2], curve: &CubicBezier, parameters: &[f64]) -> (f64, usize) {
    let mut max_error   = 0.0;
    let mut split_idx   = points.len() / 2;

    for idx in 1..(points.len() - 1) {
        let error = (curve.point_at(parameters[idx]) - points[idx]).length_squared();

        if error >= max_error {
            max_error = error;
            split_idx = idx;
        }
    }

    (max_error, split_idx)
}

///
/// Moves each t value towards the nearest point on the curve with a single Newton-Raphson step
///
fn reparameterize(points: &[Vector2], curve: &CubicBezier, parameters: &[f64]) -> Vec<f64> {
    points.iter()
        .zip(parameters.iter())
        .map(|(point, t)| {
            let t           = *t;
            let offset      = curve.point_at(t) - *point;
            let d1          = curve.derivative_at(t);
            let d2          = curve.second_derivative_at(t);

            let numerator   = offset.dot(d1);
            let denominator = d1.dot(d1) + offset.dot(d2);

            if denominator.abs() < SMALL_VECTOR {
                t
            } else {
                (t - numerator / denominator).max(0.0).min(1.0)
            }
        })
        .collect()
}
