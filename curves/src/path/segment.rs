use super::anchor::*;
use crate::geo::*;
use crate::bezier::*;

///
/// Whether a segment is drawn as a straight line or as a curve
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Line,
    Curve,
}

///
/// A view of two adjacent anchors in a path
///
/// The segment is a line if neither the outgoing handle of the start anchor nor the incoming handle of the
/// end anchor is set. Otherwise it's a cubic curve, using the anchor's own position in place of a missing
/// handle.
///
#[derive(Clone, Copy, Debug)]
pub struct PathSegment<'a> {
    /// The index of this segment within its path
    pub index: usize,

    /// The anchor where this segment starts
    pub start: &'a AnchorPoint,

    /// The anchor where this segment ends
    pub end: &'a AnchorPoint,
}

impl<'a> PathSegment<'a> {
    ///
    /// Whether this is a line or a curve
    ///
    #[inline]
    pub fn kind(&self) -> SegmentKind {
        if self.start.handle_out().is_none() && self.end.handle_in().is_none() {
            SegmentKind::Line
        } else {
            SegmentKind::Curve
        }
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        self.kind() == SegmentKind::Line
    }

    #[inline] pub fn start_point(&self) -> Vector2 { self.start.position() }
    #[inline] pub fn end_point(&self) -> Vector2 { self.end.position() }

    ///
    /// The cubic bezier curve described by this segment (lines are converted to curves that follow the line)
    ///
    pub fn to_cubic(&self) -> CubicBezier {
        let start   = self.start.position();
        let end     = self.end.position();

        match self.kind() {
            SegmentKind::Line   => CubicBezier::from_line(start, end),
            SegmentKind::Curve  => CubicBezier::new(start, self.start.handle_out().unwrap_or(start), self.end.handle_in().unwrap_or(end), end),
        }
    }

    ///
    /// The position along this segment at `t`
    ///
    pub fn point_at(&self, t: f64) -> Vector2 {
        match self.kind() {
            SegmentKind::Line   => self.start_point().lerp(self.end_point(), t),
            SegmentKind::Curve  => self.to_cubic().point_at(t),
        }
    }

    ///
    /// The unit tangent of this segment at `t` (`(1, 0)` for segments with no length)
    ///
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        match self.kind() {
            SegmentKind::Line => {
                let direction = (self.end_point() - self.start_point()).normalize();
                if direction == Vector2::ZERO { Vector2::UNIT_X } else { direction }
            }

            SegmentKind::Curve => self.to_cubic().tangent_at(t),
        }
    }

    ///
    /// The length of this segment
    ///
    pub fn length(&self, tolerance: f64) -> f64 {
        match self.kind() {
            SegmentKind::Line   => self.start_point().distance_to(self.end_point()),
            SegmentKind::Curve  => self.to_cubic().length(tolerance),
        }
    }

    ///
    /// Approximates this segment with a list of points (including both end points)
    ///
    pub fn flatten(&self, tolerance: f64) -> Vec<Vector2> {
        match self.kind() {
            SegmentKind::Line   => vec![self.start_point(), self.end_point()],
            SegmentKind::Curve  => self.to_cubic().flatten(tolerance),
        }
    }

    ///
    /// The tight bounding box of this segment
    ///
    pub fn bounding_box(&self) -> Bounds {
        match self.kind() {
            SegmentKind::Line   => Bounds::new(self.start_point(), self.end_point()),
            SegmentKind::Curve  => self.to_cubic().bounding_box(),
        }
    }

    ///
    /// Finds the point on this segment nearest to the specified point
    ///
    pub fn nearest_point(&self, point: Vector2, samples: usize) -> NearestPoint {
        match self.kind() {
            SegmentKind::Line => {
                let start       = self.start_point();
                let line        = self.end_point() - start;
                let length_sq   = line.length_squared();
                let t           = if length_sq <= 0.0 { 0.0 } else { ((point - start).dot(line) / length_sq).max(0.0).min(1.0) };
                let nearest     = start + line * t;

                NearestPoint { t: t, point: nearest, distance: nearest.distance_to(point) }
            }

            SegmentKind::Curve => self.to_cubic().nearest_point(point, samples),
        }
    }
}
