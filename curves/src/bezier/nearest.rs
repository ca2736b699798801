use super::curve_trait::*;
use crate::geo::*;

/// Newton-Raphson stops early once its steps are smaller than this
const CONVERGED_STEP: f64 = 1e-6;

///
/// The result of a nearest point search
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPoint {
    /// The t value of the nearest point on the curve
    pub t: f64,

    /// The position of the nearest point
    pub point: Vector2,

    /// The distance from the search point to the nearest point
    pub distance: f64,
}

///
/// Finds the point on a curve nearest to `point`
///
/// The curve is sampled `samples` times to find a starting value for `t`, which is then refined with up to
/// `iterations` Newton-Raphson steps on `(B(t) - point).B'(t) = 0`, clamping `t` to the curve at each step.
///
/// For curves that loop back across themselves this can settle on a local minimum: the result is whichever
/// one the best initial sample leads to.
///
pub fn nearest_point_on_curve<TCurve: BezierCurve>(curve: &TCurve, point: Vector2, samples: usize, iterations: usize) -> NearestPoint {
    let samples = samples.max(1);

    // Coarse search
    let mut best_t          = 0.0;
    let mut best_distance   = f64::MAX;

    for idx in 0..=samples {
        let t           = (idx as f64) / (samples as f64);
        let distance_sq = (curve.point_at(t) - point).length_squared();

        if distance_sq < best_distance {
            best_t          = t;
            best_distance   = distance_sq;
        }
    }

    // Refine
    let mut t = best_t;

    for _ in 0..iterations {
        let offset      = curve.point_at(t) - point;
        let d1          = curve.derivative_at(t);
        let d2          = curve.second_derivative_at(t);

        let numerator   = offset.dot(d1);
        let denominator = d1.dot(d1) + offset.dot(d2);

        if denominator.abs() < SMALL_VECTOR { break; }

        let next_t      = (t - numerator/denominator).max(0.0).min(1.0);
        let step        = (next_t - t).abs();
        t               = next_t;

        if step < CONVERGED_STEP { break; }
    }

    // Newton-Raphson can walk away from the minimum if the curve is folded, in which case the sample is better
    let refined_point = curve.point_at(t);
    if (refined_point - point).length_squared() > best_distance {
        t = best_t;
    }

    let nearest = curve.point_at(t);

    NearestPoint {
        t:          t,
        point:      nearest,
        distance:   nearest.distance_to(point),
    }
}
