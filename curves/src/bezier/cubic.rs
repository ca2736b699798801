use super::basis::*;
use super::solve::*;
use super::fit::*;
use super::curve_trait::*;
use crate::geo::*;
use crate::options::*;

use smallvec::*;

///
/// A cubic bezier curve, described by its start point, two control points and its end point
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Vector2,
    pub p1: Vector2,
    pub p2: Vector2,
    pub p3: Vector2,
}

impl CubicBezier {
    ///
    /// Creates a new cubic bezier curve
    ///
    #[inline]
    pub fn new(p0: impl Into<Vector2>, p1: impl Into<Vector2>, p2: impl Into<Vector2>, p3: impl Into<Vector2>) -> CubicBezier {
        CubicBezier {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    ///
    /// Creates a cubic curve that follows the straight line between two points (with its control points at
    /// the thirds of the line)
    ///
    pub fn from_line(start: Vector2, end: Vector2) -> CubicBezier {
        let offset = (end - start) * (1.0/3.0);

        CubicBezier::new(start, start + offset, end - offset, end)
    }

    ///
    /// Approximates the curve parallel to this one at `distance` units along its normal
    ///
    /// `segments` evenly spaced samples (plus the end point) are moved along the normal and then fitted with
    /// `fit_curve()` with a maximum error of `max_error`. The result is an approximation: no attempt is made to
    /// remove the loops that appear when the offset is larger than the radius of curvature.
    ///
    pub fn offset(&self, distance: f64, segments: usize, max_error: f64) -> Vec<CubicBezier> {
        let segments = segments.max(1);

        let offset_points = (0..=segments)
            .map(|idx| {
                let t = (idx as f64) / (segments as f64);
                self.point_at(t) + self.normal_at(t) * distance
            })
            .collect::<Vec<_>>();

        fit_curve(&offset_points, max_error)
    }

    ///
    /// Approximates the curve parallel to this one, using the offset segments and fit error from a set of options
    ///
    #[inline]
    pub fn offset_with_options(&self, distance: f64, options: &GeometryOptions) -> Vec<CubicBezier> {
        self.offset(distance, options.offset_segments, options.fit_error)
    }
}

///
/// Finds the t values where a cubic curve's derivative is 0 along one axis
///
#[inline]
fn extremities(w1: f64, w2: f64, w3: f64, w4: f64) -> SmallVec<[f64; 2]> {
    // A third of the derivative is a*t^2 + b*t + c with these coefficients
    let a = -w1 + 3.0*w2 - 3.0*w3 + w4;
    let b = 2.0 * (w1 - 2.0*w2 + w3);
    let c = w2 - w1;

    solve_quadratic_in_unit_range(a, b, c)
}

impl BezierCurve for CubicBezier {
    #[inline] fn start_point(&self) -> Vector2 { self.p0 }
    #[inline] fn end_point(&self) -> Vector2 { self.p3 }

    #[inline]
    fn control_points(&self) -> SmallVec<[Vector2; 4]> {
        smallvec![self.p0, self.p1, self.p2, self.p3]
    }

    #[inline]
    fn point_at(&self, t: f64) -> Vector2 {
        basis4(t, self.p0, self.p1, self.p2, self.p3)
    }

    #[inline]
    fn derivative_at(&self, t: f64) -> Vector2 {
        let (d1, d2, d3) = derivative4(self.p0, self.p1, self.p2, self.p3);
        basis3(t, d1, d2, d3)
    }

    #[inline]
    fn second_derivative_at(&self, t: f64) -> Vector2 {
        let (d1, d2, d3)    = derivative4(self.p0, self.p1, self.p2, self.p3);
        let (dd1, dd2)      = derivative3(d1, d2, d3);

        dd1.lerp(dd2, t)
    }

    fn split(&self, t: f64) -> (CubicBezier, CubicBezier) {
        let ((l0, l1, l2, l3), (r0, r1, r2, r3)) = de_casteljau4(t, self.p0, self.p1, self.p2, self.p3);

        (CubicBezier { p0: l0, p1: l1, p2: l2, p3: l3 }, CubicBezier { p0: r0, p1: r1, p2: r2, p3: r3 })
    }

    fn bounding_box(&self) -> Bounds {
        let start   = Bounds::new(self.p0, self.p3);
        let x_roots = extremities(self.p0.x(), self.p1.x(), self.p2.x(), self.p3.x());
        let y_roots = extremities(self.p0.y(), self.p1.y(), self.p2.y(), self.p3.y());

        x_roots.into_iter()
            .chain(y_roots)
            .fold(start, |bounds, t| bounds.union_point(self.point_at(t)))
    }

    #[inline]
    fn reverse(&self) -> CubicBezier {
        CubicBezier { p0: self.p3, p1: self.p2, p2: self.p1, p3: self.p0 }
    }

    #[inline]
    fn nearest_point_iterations(&self) -> usize { 10 }
}
