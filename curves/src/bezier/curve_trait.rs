use super::length::*;
use super::flatten::*;
use super::nearest::*;
use crate::geo::*;

use smallvec::*;

///
/// Operations supported by parametric bezier curves of any degree
///
/// The parameter `t` runs from 0 (the start point) to 1 (the end point). Evaluation functions do not clamp
/// `t`, so values outside this range extrapolate the curve's polynomial.
///
pub trait BezierCurve : Clone + Sized {
    ///
    /// The first control point of the curve
    ///
    fn start_point(&self) -> Vector2;

    ///
    /// The last control point of the curve
    ///
    fn end_point(&self) -> Vector2;

    ///
    /// All of the control points of this curve, in order
    ///
    fn control_points(&self) -> SmallVec<[Vector2; 4]>;

    ///
    /// The position of the curve at `t`
    ///
    fn point_at(&self, t: f64) -> Vector2;

    ///
    /// The first derivative of the curve at `t`
    ///
    fn derivative_at(&self, t: f64) -> Vector2;

    ///
    /// The second derivative of the curve at `t`
    ///
    fn second_derivative_at(&self, t: f64) -> Vector2;

    ///
    /// Splits the curve into two curves of the same degree at `t`
    ///
    fn split(&self, t: f64) -> (Self, Self);

    ///
    /// The tight bounding box of the curve (found from its extremities rather than its control points)
    ///
    fn bounding_box(&self) -> Bounds;

    ///
    /// The same curve with its direction reversed
    ///
    fn reverse(&self) -> Self;

    ///
    /// Number of Newton-Raphson steps used to refine a nearest point search
    ///
    fn nearest_point_iterations(&self) -> usize;

    ///
    /// The unit tangent of the curve at `t`
    ///
    /// Where the derivative vanishes this uses the direction of the chord, and `(1, 0)` if the curve has no
    /// length at all.
    ///
    fn tangent_at(&self, t: f64) -> Vector2 {
        let tangent = self.derivative_at(t).normalize();
        if tangent != Vector2::ZERO { return tangent; }

        let chord = (self.end_point() - self.start_point()).normalize();
        if chord != Vector2::ZERO { return chord; }

        Vector2::UNIT_X
    }

    ///
    /// The unit normal of the curve at `t` (the tangent rotated by +90 degrees)
    ///
    #[inline]
    fn normal_at(&self, t: f64) -> Vector2 {
        self.tangent_at(t).perpendicular()
    }

    ///
    /// The signed curvature of the curve at `t` (0 where the curve is stationary)
    ///
    fn curvature_at(&self, t: f64) -> f64 {
        let d1          = self.derivative_at(t);
        let d2          = self.second_derivative_at(t);
        let speed       = d1.length();

        if speed < SMALL_VECTOR {
            0.0
        } else {
            d1.cross(d2) / (speed * speed * speed)
        }
    }

    ///
    /// Estimates the length of the curve by recursive chord subdivision
    ///
    #[inline]
    fn length(&self, tolerance: f64) -> f64 {
        curve_length(self, tolerance)
    }

    ///
    /// Finds the point on the curve closest to the specified point
    ///
    #[inline]
    fn nearest_point(&self, point: Vector2, samples: usize) -> NearestPoint {
        nearest_point_on_curve(self, point, samples, self.nearest_point_iterations())
    }

    ///
    /// Approximates the curve with a sequence of points, no further than `tolerance` from the curve
    ///
    #[inline]
    fn flatten(&self, tolerance: f64) -> Vec<Vector2> {
        flatten_curve(self, tolerance)
    }
}
