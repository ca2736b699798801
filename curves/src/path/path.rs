use super::anchor::*;
use super::segment::*;
use crate::geo::*;
use crate::bezier::*;

use std::f64::consts::{PI};

/// Anchors closer than this are considered to be in the same place when closing a path
const CLOSE_TOLERANCE: f64 = 1e-9;

/// Proportion of the radius used for the handles of a cubic curve approximating a quarter circle
const QUARTER_CIRCLE_HANDLE: f64 = 0.5522847498307936;

///
/// The rule used to decide which points are inside a path
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillRule {
    /// A point is inside if the path winds around it a non-zero number of times
    NonZero,

    /// A point is inside if a ray from it crosses the path an odd number of times
    EvenOdd,
}

impl Default for FillRule {
    fn default() -> Self {
        FillRule::NonZero
    }
}

///
/// A single contour made up of anchor points
///
/// An open path with `n` anchors has `n-1` segments. A closed path has `n` segments, the last of which
/// joins the final anchor back to the first one.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    anchors:    Vec<AnchorPoint>,
    closed:     bool,
    fill_rule:  FillRule,
}

impl Path {
    ///
    /// Creates a new empty path
    ///
    #[inline]
    pub fn new() -> Path {
        Path {
            anchors:    vec![],
            closed:     false,
            fill_rule:  FillRule::default(),
        }
    }

    ///
    /// Creates a path from a list of anchors
    ///
    pub fn from_anchors(anchors: impl IntoIterator<Item=AnchorPoint>, closed: bool) -> Path {
        Path {
            anchors:    anchors.into_iter().collect(),
            closed:     closed,
            fill_rule:  FillRule::default(),
        }
    }

    ///
    /// Creates a path of straight lines joining a set of points
    ///
    pub fn polyline(points: impl IntoIterator<Item=Vector2>, closed: bool) -> Path {
        Path::from_anchors(points.into_iter().map(AnchorPoint::corner), closed)
    }

    ///
    /// Creates a closed rectangular path with corners at `(x1, y1)` and `(x2, y2)`
    ///
    pub fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64) -> Path {
        Path::polyline(vec![Vector2(x1, y1), Vector2(x2, y1), Vector2(x2, y2), Vector2(x1, y2)], true)
    }

    ///
    /// Creates a closed rectangle with quarter-circle corners
    ///
    /// The radius is limited to half of the smaller side of the rectangle.
    ///
    pub fn rounded_rectangle(x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> Path {
        let (min_x, max_x)  = (x1.min(x2), x1.max(x2));
        let (min_y, max_y)  = (y1.min(y2), y1.max(y2));
        let radius          = radius.max(0.0).min((max_x - min_x) / 2.0).min((max_y - min_y) / 2.0);

        if radius <= 0.0 {
            return Path::rectangle(min_x, min_y, max_x, max_y);
        }

        // Start at the top-left corner's end and work clockwise (in a y-down coordinate system)
        let corners = [
            (Vector2(max_x - radius, min_y + radius), -PI / 2.0),
            (Vector2(max_x - radius, max_y - radius), 0.0),
            (Vector2(min_x + radius, max_y - radius), PI / 2.0),
            (Vector2(min_x + radius, min_y + radius), PI),
        ];

        let mut path = Path::new();
        path.move_to(Vector2(min_x + radius, min_y));

        for (center, start_angle) in corners.iter() {
            let arc         = arc_to_cubics(*center, radius, radius, *start_angle, PI / 2.0);
            let arc_start   = arc[0].p0;

            if path.current_point().map(|point| !point.is_near(arc_start, CLOSE_TOLERANCE)).unwrap_or(true) {
                path.line_to(arc_start);
            }

            for curve in arc {
                path.bezier_curve_to(curve.p1, curve.p2, curve.p3);
            }
        }

        path.close_path();
        path
    }

    ///
    /// Creates a closed ellipse made up of four symmetric anchors
    ///
    pub fn ellipse(center: impl Into<Vector2>, radius_x: f64, radius_y: f64) -> Path {
        let center      = center.into();
        let handle_x    = radius_x * QUARTER_CIRCLE_HANDLE;
        let handle_y    = radius_y * QUARTER_CIRCLE_HANDLE;

        let anchor      = |position: Vector2, handle_out: Vector2| {
            AnchorPoint::new(position, AnchorType::Symmetric, None, Some(position + handle_out))
        };

        Path::from_anchors(vec![
            anchor(center + Vector2(radius_x, 0.0), Vector2(0.0, handle_y)),
            anchor(center + Vector2(0.0, radius_y), Vector2(-handle_x, 0.0)),
            anchor(center + Vector2(-radius_x, 0.0), Vector2(0.0, -handle_y)),
            anchor(center + Vector2(0.0, -radius_y), Vector2(handle_x, 0.0)),
        ], true)
    }

    ///
    /// Creates a closed circle
    ///
    #[inline]
    pub fn circle(center: impl Into<Vector2>, radius: f64) -> Path {
        Path::ellipse(center, radius, radius)
    }

    #[inline] pub fn anchors(&self) -> &[AnchorPoint] { &self.anchors }
    #[inline] pub fn num_anchors(&self) -> usize { self.anchors.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.anchors.is_empty() }
    #[inline] pub fn is_closed(&self) -> bool { self.closed }
    #[inline] pub fn fill_rule(&self) -> FillRule { self.fill_rule }

    ///
    /// Retrieves an anchor for editing (anchors enforce their own handle constraints)
    ///
    #[inline]
    pub fn anchor_mut(&mut self, idx: usize) -> Option<&mut AnchorPoint> {
        self.anchors.get_mut(idx)
    }

    ///
    /// Adds an anchor to the end of the path
    ///
    #[inline]
    pub fn push_anchor(&mut self, anchor: AnchorPoint) {
        self.anchors.push(anchor);
    }

    ///
    /// Inserts an anchor before the anchor at `idx` (or at the end if `idx` is past the end of the path)
    ///
    pub fn insert_anchor(&mut self, idx: usize, anchor: AnchorPoint) {
        let idx = idx.min(self.anchors.len());
        self.anchors.insert(idx, anchor);
    }

    ///
    /// Removes the anchor at `idx`, returning it if it existed
    ///
    pub fn remove_anchor(&mut self, idx: usize) -> Option<AnchorPoint> {
        if idx < self.anchors.len() {
            Some(self.anchors.remove(idx))
        } else {
            None
        }
    }

    #[inline]
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    #[inline]
    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
    }

    ///
    /// Returns this path with a different fill rule
    ///
    #[inline]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Path {
        self.fill_rule = fill_rule;
        self
    }

    ///
    /// The number of segments in this path
    ///
    #[inline]
    pub fn segment_count(&self) -> usize {
        match (self.anchors.len(), self.closed) {
            (0, _)      => 0,
            (n, true)   => n,
            (n, false)  => n - 1,
        }
    }

    ///
    /// The segments joining the anchors in this path
    ///
    pub fn segments(&self) -> impl '_ + Iterator<Item=PathSegment<'_>> {
        let num_anchors = self.anchors.len();

        (0..self.segment_count())
            .map(move |idx| PathSegment {
                index:  idx,
                start:  &self.anchors[idx],
                end:    &self.anchors[(idx + 1) % num_anchors],
            })
    }

    ///
    /// Retrieves the segment with the specified index
    ///
    pub fn segment(&self, idx: usize) -> Option<PathSegment<'_>> {
        if idx < self.segment_count() {
            Some(PathSegment {
                index:  idx,
                start:  &self.anchors[idx],
                end:    &self.anchors[(idx + 1) % self.anchors.len()],
            })
        } else {
            None
        }
    }

    ///
    /// The position of the first anchor in the path
    ///
    #[inline]
    pub fn start_point(&self) -> Option<Vector2> {
        self.anchors.first().map(|anchor| anchor.position())
    }

    ///
    /// The position of the last anchor in the path (where the next segment will start)
    ///
    #[inline]
    pub fn current_point(&self) -> Option<Vector2> {
        self.anchors.last().map(|anchor| anchor.position())
    }

    ///
    /// Starts a new chain of anchors at the specified point
    ///
    /// A path is a single contour, so any anchors already in the path are replaced.
    ///
    pub fn move_to(&mut self, point: impl Into<Vector2>) {
        self.anchors.clear();
        self.closed = false;
        self.anchors.push(AnchorPoint::corner(point));
    }

    ///
    /// Adds a straight line from the current point
    ///
    pub fn line_to(&mut self, point: impl Into<Vector2>) {
        let point = point.into();

        if self.anchors.is_empty() {
            self.move_to(point);
        } else {
            self.anchors.push(AnchorPoint::corner(point));
        }
    }

    ///
    /// Adds a quadratic curve from the current point (stored as the equivalent cubic curve on the handles)
    ///
    pub fn quadratic_curve_to(&mut self, control_point: impl Into<Vector2>, point: impl Into<Vector2>) {
        let control_point   = control_point.into();
        let point           = point.into();

        let start           = match self.current_point() {
            Some(start) => start,
            None        => { self.move_to(control_point); control_point }
        };

        let cubic = QuadraticBezier::new(start, control_point, point).to_cubic();
        self.bezier_curve_to(cubic.p1, cubic.p2, cubic.p3);
    }

    ///
    /// Adds a cubic bezier curve from the current point
    ///
    pub fn bezier_curve_to(&mut self, control_point_1: impl Into<Vector2>, control_point_2: impl Into<Vector2>, point: impl Into<Vector2>) {
        let control_point_1 = control_point_1.into();
        let control_point_2 = control_point_2.into();

        if self.anchors.is_empty() {
            self.move_to(control_point_1);
        }

        if let Some(last) = self.anchors.last_mut() {
            last.set_handle_out(Some(control_point_1));
        }

        self.anchors.push(AnchorPoint::corner(point).with_handle_in(control_point_2));
    }

    ///
    /// Adds a circular arc of the specified radius that is tangent to the line from the current point to
    /// `point_1` and the line from `point_1` to `point_2`
    ///
    /// A straight line joins the current point to the start of the arc. If the lines are parallel or the
    /// radius is 0, this just draws a line to `point_1`.
    ///
    pub fn arc_to(&mut self, point_1: impl Into<Vector2>, point_2: impl Into<Vector2>, radius: f64) {
        let point_1 = point_1.into();
        let point_2 = point_2.into();

        let start = match self.current_point() {
            Some(start) => start,
            None        => { self.move_to(point_1); return; }
        };

        let to_start    = (start - point_1).normalize();
        let to_end      = (point_2 - point_1).normalize();

        if radius <= 0.0 || to_start == Vector2::ZERO || to_end == Vector2::ZERO || to_start.cross(to_end).abs() < SMALL_VECTOR {
            self.line_to(point_1);
            return;
        }

        // Angle between the two lines, and where the arc touches them
        let angle           = to_start.dot(to_end).max(-1.0).min(1.0).acos();
        let tangent_dist    = radius / (angle / 2.0).tan();
        let arc_start       = point_1 + to_start * tangent_dist;
        let arc_end         = point_1 + to_end * tangent_dist;
        let center          = point_1 + (to_start + to_end).normalize() * (radius / (angle / 2.0).sin());

        let start_angle     = (arc_start - center).angle();
        let mut sweep       = (arc_end - center).angle() - start_angle;
        if sweep > PI       { sweep -= 2.0 * PI; }
        if sweep < -PI      { sweep += 2.0 * PI; }

        if !arc_start.is_near(start, CLOSE_TOLERANCE) {
            self.line_to(arc_start);
        }

        for curve in arc_to_cubics(center, radius, radius, start_angle, sweep) {
            self.bezier_curve_to(curve.p1, curve.p2, curve.p3);
        }
    }

    ///
    /// Closes the path
    ///
    /// If the last anchor is in the same place as the first one, the two are merged (the first anchor takes
    /// the incoming handle of the last anchor).
    ///
    pub fn close_path(&mut self) {
        if self.anchors.len() > 1 {
            let first   = self.anchors[0].position();
            let last    = self.anchors[self.anchors.len() - 1];

            if last.position().is_near(first, CLOSE_TOLERANCE) {
                self.anchors.pop();
                self.anchors[0].set_handle_in(last.handle_in());
            }
        }

        self.closed = true;
    }

    ///
    /// Returns the same path running in the opposite direction
    ///
    pub fn reverse(&self) -> Path {
        let anchors = self.anchors.iter().rev().map(|anchor| anchor.reversed());

        let anchors = if self.closed && !self.anchors.is_empty() {
            // Keep the same starting point for closed paths
            let mut anchors = anchors.collect::<Vec<_>>();
            anchors.rotate_right(1);
            anchors
        } else {
            anchors.collect()
        };

        Path {
            anchors:    anchors,
            closed:     self.closed,
            fill_rule:  self.fill_rule,
        }
    }

    ///
    /// Returns this path moved by an offset
    ///
    pub fn translate(&self, offset: impl Into<Vector2>) -> Path {
        let offset = offset.into();

        Path {
            anchors:    self.anchors.iter().map(|anchor| { let mut anchor = *anchor; anchor.translate(offset); anchor }).collect(),
            closed:     self.closed,
            fill_rule:  self.fill_rule,
        }
    }

    ///
    /// Returns this path scaled about an origin
    ///
    pub fn scale(&self, scale_x: f64, scale_y: f64, origin: impl Into<Vector2>) -> Path {
        let origin  = origin.into();
        let scale   = move |point: Vector2| {
            let offset = point - origin;
            origin + Vector2(offset.x() * scale_x, offset.y() * scale_y)
        };

        Path {
            anchors:    self.anchors.iter().map(|anchor| anchor.map_points(scale)).collect(),
            closed:     self.closed,
            fill_rule:  self.fill_rule,
        }
    }
}
