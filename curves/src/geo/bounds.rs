use super::vector2::*;

///
/// An axis-aligned bounding box
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vector2,
    pub max: Vector2,
}

impl Bounds {
    ///
    /// Creates a bounding box from two corners (in any order)
    ///
    #[inline]
    pub fn new(p1: Vector2, p2: Vector2) -> Bounds {
        Bounds {
            min: Vector2(p1.0.min(p2.0), p1.1.min(p2.1)),
            max: Vector2(p1.0.max(p2.0), p1.1.max(p2.1)),
        }
    }

    ///
    /// Creates a bounding box that encloses a single point
    ///
    #[inline]
    pub fn from_point(point: Vector2) -> Bounds {
        Bounds { min: point, max: point }
    }

    ///
    /// Creates the bounding box of a set of points (None if there are no points)
    ///
    pub fn from_points(points: impl IntoIterator<Item=Vector2>) -> Option<Bounds> {
        let mut points  = points.into_iter();
        let first       = points.next()?;

        Some(points.fold(Bounds::from_point(first), |bounds, point| bounds.union_point(point)))
    }

    ///
    /// Extends this bounding box to include a point
    ///
    #[inline]
    pub fn union_point(self, point: Vector2) -> Bounds {
        Bounds {
            min: Vector2(self.min.0.min(point.0), self.min.1.min(point.1)),
            max: Vector2(self.max.0.max(point.0), self.max.1.max(point.1)),
        }
    }

    ///
    /// The bounding box enclosing this one and another
    ///
    #[inline]
    pub fn union(self, other: Bounds) -> Bounds {
        self.union_point(other.min).union_point(other.max)
    }

    ///
    /// True if a point lies inside or on the edge of this bounding box
    ///
    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        point.0 >= self.min.0 && point.0 <= self.max.0 && point.1 >= self.min.1 && point.1 <= self.max.1
    }

    ///
    /// Grows this bounding box by a distance in every direction
    ///
    #[inline]
    pub fn expand(self, distance: f64) -> Bounds {
        Bounds {
            min: Vector2(self.min.0 - distance, self.min.1 - distance),
            max: Vector2(self.max.0 + distance, self.max.1 + distance),
        }
    }

    #[inline] pub fn width(&self) -> f64 { self.max.0 - self.min.0 }
    #[inline] pub fn height(&self) -> f64 { self.max.1 - self.min.1 }

    #[inline]
    pub fn center(&self) -> Vector2 {
        self.min.lerp(self.max, 0.5)
    }
}
