use super::path::*;
use super::anchor::*;
use crate::geo::*;

impl Path {
    ///
    /// Approximates this path with a list of points no further than `tolerance` from the path
    ///
    /// The closing point of a closed path is not repeated at the end of the list.
    ///
    pub fn flatten_points(&self, tolerance: f64) -> Vec<Vector2> {
        let mut points = match self.start_point() {
            Some(start) => vec![start],
            None        => return vec![],
        };

        for segment in self.segments() {
            points.extend(segment.flatten(tolerance).into_iter().skip(1));
        }

        if self.is_closed() && points.len() > 1 {
            points.pop();
        }

        points
    }

    ///
    /// Creates a new path made only of straight lines that approximates this one
    ///
    /// Every point generated by flattening the curves becomes a corner anchor. The closed flag and fill rule
    /// are kept.
    ///
    pub fn flatten(&self, tolerance: f64) -> Path {
        Path::from_anchors(self.flatten_points(tolerance).into_iter().map(AnchorPoint::corner), self.is_closed())
            .with_fill_rule(self.fill_rule())
    }
}
