use smallvec::*;

/// Coefficients smaller than this are treated as zero when solving polynomials
const SMALL_COEFFICIENT: f64 = 1e-12;

///
/// Finds the real roots of `a*t^2 + b*t + c = 0`, falling back to the linear equation when `a` is 0
///
/// A degenerate equation (all coefficients 0) has no isolated roots and returns an empty list.
///
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> SmallVec<[f64; 2]> {
    if a.abs() < SMALL_COEFFICIENT {
        if b.abs() < SMALL_COEFFICIENT {
            smallvec![]
        } else {
            smallvec![-c / b]
        }
    } else {
        let discriminant = b*b - 4.0*a*c;

        if discriminant < 0.0 {
            smallvec![]
        } else if discriminant == 0.0 {
            smallvec![-b / (2.0*a)]
        } else {
            let root = discriminant.sqrt();
            smallvec![(-b + root) / (2.0*a), (-b - root) / (2.0*a)]
        }
    }
}

///
/// Returns the roots of `a*t^2 + b*t + c = 0` that lie strictly between 0 and 1
///
#[inline]
pub fn solve_quadratic_in_unit_range(a: f64, b: f64, c: f64) -> SmallVec<[f64; 2]> {
    solve_quadratic(a, b, c).into_iter()
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect()
}
