use super::path::*;
use super::segment::*;
use crate::geo::*;
use crate::options::*;

impl Path {
    ///
    /// The total length of this path
    ///
    pub fn length(&self, tolerance: f64) -> f64 {
        self.segments()
            .map(|segment| segment.length(tolerance))
            .sum()
    }

    ///
    /// Finds the segment containing the point `distance` along the path, and the t value of that point
    ///
    /// The t value is interpolated linearly from the length along the segment, which is a close approximation
    /// to the true arc-length position for most curves. Distances past the end of the path are clamped to
    /// the end of the last segment.
    ///
    pub fn segment_at_length(&self, distance: f64, tolerance: f64) -> Option<(PathSegment<'_>, f64)> {
        let mut remaining       = distance.max(0.0);
        let mut last_segment    = None;

        for segment in self.segments() {
            let length = segment.length(tolerance);

            if length > 0.0 && remaining <= length {
                return Some((segment, remaining / length));
            }

            remaining       -= length;
            last_segment    = Some(segment);
        }

        last_segment.map(|segment| (segment, 1.0))
    }

    ///
    /// The point `distance` along this path
    ///
    /// Paths with no segments return their only anchor (or the origin if there are no anchors at all).
    ///
    pub fn point_at_length(&self, distance: f64, tolerance: f64) -> Vector2 {
        match self.segment_at_length(distance, tolerance) {
            Some((segment, t))  => segment.point_at(t),
            None                => self.start_point().unwrap_or(Vector2::ZERO),
        }
    }

    ///
    /// The unit tangent at the point `distance` along this path (`(1, 0)` for paths with no segments)
    ///
    pub fn tangent_at_length(&self, distance: f64, tolerance: f64) -> Vector2 {
        match self.segment_at_length(distance, tolerance) {
            Some((segment, t))  => segment.tangent_at(t),
            None                => Vector2::UNIT_X,
        }
    }

    ///
    /// The total length of this path, measured with the length tolerance from a set of options
    ///
    pub fn length_with_options(&self, options: &GeometryOptions) -> f64 {
        self.length(options.length_tolerance)
    }

    ///
    /// The point `distance` along this path, measured with the length tolerance from a set of options
    ///
    pub fn point_at_length_with_options(&self, distance: f64, options: &GeometryOptions) -> Vector2 {
        self.point_at_length(distance, options.length_tolerance)
    }

    ///
    /// The unit tangent at the point `distance` along this path, measured with the length tolerance from a set of options
    ///
    pub fn tangent_at_length_with_options(&self, distance: f64, options: &GeometryOptions) -> Vector2 {
        self.tangent_at_length(distance, options.length_tolerance)
    }
}
