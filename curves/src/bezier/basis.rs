use crate::geo::*;

///
/// Evaluates the quadratic Bernstein polynomial with the weights `w1`, `w2` and `w3` at `t`
///
/// At t=0 and t=1 the result is exactly `w1` or `w3`, as all the other terms are multiplied by 0.
///
#[inline]
pub fn basis3(t: f64, w1: Vector2, w2: Vector2, w3: Vector2) -> Vector2 {
    let mt = 1.0 - t;

    w1 * (mt * mt) + w2 * (2.0 * mt * t) + w3 * (t * t)
}

///
/// Evaluates the cubic Bernstein polynomial with the weights `w1` to `w4` at `t`
///
#[inline]
pub fn basis4(t: f64, w1: Vector2, w2: Vector2, w3: Vector2, w4: Vector2) -> Vector2 {
    let mt  = 1.0 - t;
    let mt2 = mt * mt;
    let t2  = t * t;

    w1 * (mt2 * mt) + w2 * (3.0 * mt2 * t) + w3 * (3.0 * mt * t2) + w4 * (t2 * t)
}

///
/// Returns the weights of the derivative of a quadratic curve (which is a straight line)
///
#[inline]
pub fn derivative3(w1: Vector2, w2: Vector2, w3: Vector2) -> (Vector2, Vector2) {
    ((w2 - w1) * 2.0, (w3 - w2) * 2.0)
}

///
/// Returns the weights of the derivative of a cubic curve (which is a quadratic curve)
///
#[inline]
pub fn derivative4(w1: Vector2, w2: Vector2, w3: Vector2, w4: Vector2) -> (Vector2, Vector2, Vector2) {
    ((w2 - w1) * 3.0, (w3 - w2) * 3.0, (w4 - w3) * 3.0)
}

///
/// Subdivides a quadratic curve at `t`, returning the control points of the left and right halves
///
/// The last point of the left half and the first point of the right half are the same value.
///
#[inline]
pub fn de_casteljau3(t: f64, w1: Vector2, w2: Vector2, w3: Vector2) -> ((Vector2, Vector2, Vector2), (Vector2, Vector2, Vector2)) {
    let q1  = w1.lerp(w2, t);
    let q2  = w2.lerp(w3, t);
    let mid = q1.lerp(q2, t);

    ((w1, q1, mid), (mid, q2, w3))
}

///
/// Subdivides a cubic curve at `t`, returning the control points of the left and right halves
///
#[inline]
pub fn de_casteljau4(t: f64, w1: Vector2, w2: Vector2, w3: Vector2, w4: Vector2) -> ((Vector2, Vector2, Vector2, Vector2), (Vector2, Vector2, Vector2, Vector2)) {
    let q1  = w1.lerp(w2, t);
    let q2  = w2.lerp(w3, t);
    let q3  = w3.lerp(w4, t);

    let r1  = q1.lerp(q2, t);
    let r2  = q2.lerp(q3, t);

    let mid = r1.lerp(r2, t);

    ((w1, q1, r1, mid), (mid, r2, q3, w4))
}
