use super::path::*;
use crate::geo::*;

impl Path {
    ///
    /// Creates a path offset from this one by `distance` along its normals
    ///
    /// Each anchor (and its handles) moves along the average of the normals of the segments that meet at
    /// it. The ends of an open path use the normal of their only segment. This is a local approximation:
    /// sharp corners are not mitred and any self-intersections that result are left in place.
    ///
    pub fn offset(&self, distance: f64) -> Path {
        let num_anchors     = self.num_anchors();
        let num_segments    = self.segment_count();

        let segments        = self.segments().collect::<Vec<_>>();

        let anchors = self.anchors().iter()
            .enumerate()
            .map(|(idx, anchor)| {
                // Segment idx leaves this anchor, segment idx-1 arrives at it
                let outgoing = if idx < num_segments { Some(&segments[idx]) } else { None };
                let incoming = if idx > 0 {
                    Some(&segments[idx - 1])
                } else if self.is_closed() && num_segments > 0 {
                    Some(&segments[num_anchors - 1])
                } else {
                    None
                };

                let normal_out  = outgoing.map(|segment| segment.tangent_at(0.0).perpendicular());
                let normal_in   = incoming.map(|segment| segment.tangent_at(1.0).perpendicular());

                let normal = match (normal_in, normal_out) {
                    (Some(normal_in), Some(normal_out)) => {
                        let average = (normal_in + normal_out).normalize();
                        if average == Vector2::ZERO { normal_out } else { average }
                    }

                    (Some(normal), None) | (None, Some(normal)) => normal,
                    (None, None)                                => Vector2::ZERO,
                };

                let mut anchor = *anchor;
                anchor.translate(normal * distance);
                anchor
            })
            .collect::<Vec<_>>();

        Path::from_anchors(anchors, self.is_closed())
            .with_fill_rule(self.fill_rule())
    }
}
