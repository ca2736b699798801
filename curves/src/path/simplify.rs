use super::path::*;
use super::anchor::*;
use crate::geo::*;

///
/// Reduces the number of points in a polyline with the Ramer-Douglas-Peucker algorithm
///
/// For each range of points, the point furthest from the line joining the two ends of the range is found. If
/// it's further than `tolerance` it's kept and both sides are simplified in the same way; otherwise every point
/// between the ends is removed.
///
pub fn rdp_simplify(points: &[Vector2], tolerance: f64) -> Vec<Vector2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep        = vec![false; points.len()];
    let mut to_process  = vec![(0, points.len() - 1)];

    keep[0]                 = true;
    keep[points.len() - 1]  = true;

    while let Some((start_idx, end_idx)) = to_process.pop() {
        if end_idx <= start_idx + 1 { continue; }

        let start   = points[start_idx];
        let end     = points[end_idx];

        let (furthest_idx, furthest_distance) = ((start_idx + 1)..end_idx)
            .map(|idx| (idx, distance_to_line(points[idx], start, end)))
            .fold((start_idx, -1.0), |best, next| if next.1 > best.1 { next } else { best });

        if furthest_distance > tolerance {
            keep[furthest_idx] = true;

            to_process.push((start_idx, furthest_idx));
            to_process.push((furthest_idx, end_idx));
        }
    }

    points.iter()
        .zip(keep.into_iter())
        .filter(|(_, keep)| *keep)
        .map(|(point, _)| *point)
        .collect()
}

impl Path {
    ///
    /// Creates a path of straight lines with as few anchors as possible that stays within `tolerance` of this path
    ///
    /// The path is flattened at half the tolerance and then simplified with `rdp_simplify()`.
    ///
    pub fn simplify(&self, tolerance: f64) -> Path {
        let points = self.flatten_points(tolerance / 2.0);

        let simplified = if self.is_closed() && points.len() > 2 {
            // Simplify the ring including its closing point, then remove it again
            let mut ring = points;
            ring.push(ring[0]);

            let mut simplified = rdp_simplify(&ring, tolerance);
            simplified.pop();
            simplified
        } else {
            rdp_simplify(&points, tolerance)
        };

        Path::from_anchors(simplified.into_iter().map(AnchorPoint::corner), self.is_closed())
            .with_fill_rule(self.fill_rule())
    }
}
