use super::quadratic::*;
use super::cubic::*;
use super::curve_trait::*;
use crate::geo::*;

use smallvec::*;

///
/// A bezier curve of either degree
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
}

impl Curve {
    ///
    /// Converts this curve to a cubic curve following the same path
    ///
    pub fn to_cubic(&self) -> CubicBezier {
        match self {
            Curve::Quadratic(curve) => curve.to_cubic(),
            Curve::Cubic(curve)     => *curve,
        }
    }
}

impl From<QuadraticBezier> for Curve {
    #[inline]
    fn from(curve: QuadraticBezier) -> Curve {
        Curve::Quadratic(curve)
    }
}

impl From<CubicBezier> for Curve {
    #[inline]
    fn from(curve: CubicBezier) -> Curve {
        Curve::Cubic(curve)
    }
}

impl BezierCurve for Curve {
    #[inline]
    fn start_point(&self) -> Vector2 {
        match self {
            Curve::Quadratic(curve) => curve.start_point(),
            Curve::Cubic(curve)     => curve.start_point(),
        }
    }

    #[inline]
    fn end_point(&self) -> Vector2 {
        match self {
            Curve::Quadratic(curve) => curve.end_point(),
            Curve::Cubic(curve)     => curve.end_point(),
        }
    }

    #[inline]
    fn control_points(&self) -> SmallVec<[Vector2; 4]> {
        match self {
            Curve::Quadratic(curve) => curve.control_points(),
            Curve::Cubic(curve)     => curve.control_points(),
        }
    }

    #[inline]
    fn point_at(&self, t: f64) -> Vector2 {
        match self {
            Curve::Quadratic(curve) => curve.point_at(t),
            Curve::Cubic(curve)     => curve.point_at(t),
        }
    }

    #[inline]
    fn derivative_at(&self, t: f64) -> Vector2 {
        match self {
            Curve::Quadratic(curve) => curve.derivative_at(t),
            Curve::Cubic(curve)     => curve.derivative_at(t),
        }
    }

    #[inline]
    fn second_derivative_at(&self, t: f64) -> Vector2 {
        match self {
            Curve::Quadratic(curve) => curve.second_derivative_at(t),
            Curve::Cubic(curve)     => curve.second_derivative_at(t),
        }
    }

    fn split(&self, t: f64) -> (Curve, Curve) {
        match self {
            Curve::Quadratic(curve) => {
                let (left, right) = curve.split(t);
                (Curve::Quadratic(left), Curve::Quadratic(right))
            }

            Curve::Cubic(curve) => {
                let (left, right) = curve.split(t);
                (Curve::Cubic(left), Curve::Cubic(right))
            }
        }
    }

    fn bounding_box(&self) -> Bounds {
        match self {
            Curve::Quadratic(curve) => curve.bounding_box(),
            Curve::Cubic(curve)     => curve.bounding_box(),
        }
    }

    fn reverse(&self) -> Curve {
        match self {
            Curve::Quadratic(curve) => Curve::Quadratic(curve.reverse()),
            Curve::Cubic(curve)     => Curve::Cubic(curve.reverse()),
        }
    }

    #[inline]
    fn nearest_point_iterations(&self) -> usize {
        match self {
            Curve::Quadratic(curve) => curve.nearest_point_iterations(),
            Curve::Cubic(curve)     => curve.nearest_point_iterations(),
        }
    }
}
