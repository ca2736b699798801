use super::basis::*;
use super::solve::*;
use super::cubic::*;
use super::curve_trait::*;
use crate::geo::*;

use smallvec::*;

///
/// A quadratic bezier curve, described by its start point, a single control point and its end point
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub p0: Vector2,
    pub p1: Vector2,
    pub p2: Vector2,
}

impl QuadraticBezier {
    ///
    /// Creates a new quadratic bezier curve
    ///
    #[inline]
    pub fn new(p0: impl Into<Vector2>, p1: impl Into<Vector2>, p2: impl Into<Vector2>) -> QuadraticBezier {
        QuadraticBezier {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    ///
    /// Converts this curve to the cubic curve that follows exactly the same path
    ///
    pub fn to_cubic(&self) -> CubicBezier {
        let cp1 = self.p0 + (self.p1 - self.p0) * (2.0/3.0);
        let cp2 = self.p2 + (self.p1 - self.p2) * (2.0/3.0);

        CubicBezier::new(self.p0, cp1, cp2, self.p2)
    }
}

///
/// Finds the t values where a quadratic curve's derivative is 0 along one axis
///
#[inline]
fn extremities(w1: f64, w2: f64, w3: f64) -> SmallVec<[f64; 2]> {
    // The derivative is 2((w2-w1) + t(w1 - 2w2 + w3)), a linear equation
    solve_quadratic_in_unit_range(0.0, w1 - 2.0*w2 + w3, w2 - w1)
}

impl BezierCurve for QuadraticBezier {
    #[inline] fn start_point(&self) -> Vector2 { self.p0 }
    #[inline] fn end_point(&self) -> Vector2 { self.p2 }

    #[inline]
    fn control_points(&self) -> SmallVec<[Vector2; 4]> {
        smallvec![self.p0, self.p1, self.p2]
    }

    #[inline]
    fn point_at(&self, t: f64) -> Vector2 {
        basis3(t, self.p0, self.p1, self.p2)
    }

    #[inline]
    fn derivative_at(&self, t: f64) -> Vector2 {
        let (d1, d2) = derivative3(self.p0, self.p1, self.p2);
        d1.lerp(d2, t)
    }

    #[inline]
    fn second_derivative_at(&self, _t: f64) -> Vector2 {
        let (d1, d2) = derivative3(self.p0, self.p1, self.p2);
        d2 - d1
    }

    fn split(&self, t: f64) -> (QuadraticBezier, QuadraticBezier) {
        let ((l0, l1, l2), (r0, r1, r2)) = de_casteljau3(t, self.p0, self.p1, self.p2);

        (QuadraticBezier { p0: l0, p1: l1, p2: l2 }, QuadraticBezier { p0: r0, p1: r1, p2: r2 })
    }

    fn bounding_box(&self) -> Bounds {
        let start   = Bounds::new(self.p0, self.p2);
        let x_roots = extremities(self.p0.x(), self.p1.x(), self.p2.x());
        let y_roots = extremities(self.p0.y(), self.p1.y(), self.p2.y());

        x_roots.into_iter()
            .chain(y_roots)
            .fold(start, |bounds, t| bounds.union_point(self.point_at(t)))
    }

    #[inline]
    fn reverse(&self) -> QuadraticBezier {
        QuadraticBezier { p0: self.p2, p1: self.p1, p2: self.p0 }
    }

    #[inline]
    fn nearest_point_iterations(&self) -> usize { 5 }
}
