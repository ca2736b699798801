use std::ops::{Add, Sub, Mul, Div, Neg};

/// Vectors shorter than this are treated as having no direction
pub const SMALL_VECTOR: f64 = 1e-10;

///
/// A point or a direction in 2D space
///
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2(pub f64, pub f64);

impl Vector2 {
    /// The origin
    pub const ZERO: Vector2 = Vector2(0.0, 0.0);

    /// The unit vector along the x axis, used as the direction of degenerate geometry
    pub const UNIT_X: Vector2 = Vector2(1.0, 0.0);

    #[inline] pub fn x(&self) -> f64 { self.0 }
    #[inline] pub fn y(&self) -> f64 { self.1 }

    ///
    /// The dot product of this vector and another
    ///
    #[inline]
    pub fn dot(self, other: Vector2) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    ///
    /// The z component of the cross product of this vector and another (positive when `other` is clockwise
    /// from this vector in a y-down coordinate system)
    ///
    #[inline]
    pub fn cross(self, other: Vector2) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    ///
    /// The distance between this point and another
    ///
    #[inline]
    pub fn distance_to(self, other: Vector2) -> f64 {
        (other - self).length()
    }

    ///
    /// Returns the unit vector in the same direction as this one, or the zero vector if this vector is too
    /// short to have a meaningful direction
    ///
    #[inline]
    pub fn normalize(self) -> Vector2 {
        let length = self.length();

        if length < SMALL_VECTOR {
            Vector2::ZERO
        } else {
            Vector2(self.0 / length, self.1 / length)
        }
    }

    ///
    /// Linearly interpolates between this point (t=0) and another (t=1)
    ///
    #[inline]
    pub fn lerp(self, other: Vector2, t: f64) -> Vector2 {
        Vector2(self.0 + (other.0 - self.0) * t, self.1 + (other.1 - self.1) * t)
    }

    ///
    /// The component of this vector that lies along another
    ///
    pub fn project_onto(self, other: Vector2) -> Vector2 {
        let other_length_sq = other.length_squared();

        if other_length_sq < SMALL_VECTOR * SMALL_VECTOR {
            Vector2::ZERO
        } else {
            other * (self.dot(other) / other_length_sq)
        }
    }

    ///
    /// The component of this vector that is perpendicular to another
    ///
    #[inline]
    pub fn reject_from(self, other: Vector2) -> Vector2 {
        self - self.project_onto(other)
    }

    ///
    /// This vector rotated by +90 degrees
    ///
    #[inline]
    pub fn perpendicular(self) -> Vector2 {
        Vector2(-self.1, self.0)
    }

    ///
    /// The angle of this vector from the x axis, in radians
    ///
    #[inline]
    pub fn angle(self) -> f64 {
        self.1.atan2(self.0)
    }

    ///
    /// True if both components of this vector are within `tolerance` of the other vector
    ///
    #[inline]
    pub fn is_near(self, other: Vector2, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance && (self.1 - other.1).abs() <= tolerance
    }

    ///
    /// True if neither component is infinite or NaN
    ///
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2(self.0 * rhs, self.1 * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn div(self, rhs: f64) -> Vector2 {
        Vector2(self.0 / rhs, self.1 / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    #[inline]
    fn neg(self) -> Vector2 {
        Vector2(-self.0, -self.1)
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Vector2 {
        Vector2(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    #[inline]
    fn from(vector: Vector2) -> (f64, f64) {
        (vector.0, vector.1)
    }
}

///
/// The distance from a point to the closest point on the line segment between `start` and `end`
///
pub fn distance_to_segment(point: Vector2, start: Vector2, end: Vector2) -> f64 {
    let line        = end - start;
    let length_sq   = line.length_squared();

    if length_sq < SMALL_VECTOR * SMALL_VECTOR {
        point.distance_to(start)
    } else {
        let t = ((point - start).dot(line) / length_sq).max(0.0).min(1.0);
        point.distance_to(start + line * t)
    }
}

///
/// The perpendicular distance from a point to the infinite line through `start` and `end` (or the distance
/// to `start` if the two points are the same)
///
pub fn distance_to_line(point: Vector2, start: Vector2, end: Vector2) -> f64 {
    let line    = end - start;
    let length  = line.length();

    if length < SMALL_VECTOR {
        point.distance_to(start)
    } else {
        (line.cross(point - start) / length).abs()
    }
}
