use super::path::*;
use super::anchor::*;
use super::error::*;
use crate::geo::*;

///
/// The plain serializable form of an anchor point
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorData {
    pub kind: AnchorType,
    pub x: f64,
    pub y: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<(f64, f64)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<(f64, f64)>,
}

///
/// A segment in the serialized form of a path, as the indexes of the anchors it joins
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentData {
    pub start: usize,
    pub end: usize,
}

///
/// The plain serializable form of a path
///
/// The segment list is optional: segments are implied by the anchors, but if they're present they must
/// join the anchors in order.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub anchors: Vec<AnchorData>,
    pub closed: bool,

    #[serde(default)]
    pub fill_rule: FillRule,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SegmentData>>,
}

impl From<&AnchorPoint> for AnchorData {
    fn from(anchor: &AnchorPoint) -> AnchorData {
        let position = anchor.position();

        AnchorData {
            kind:       anchor.anchor_type(),
            x:          position.x(),
            y:          position.y(),
            handle_in:  anchor.handle_in().map(|handle| handle.into()),
            handle_out: anchor.handle_out().map(|handle| handle.into()),
        }
    }
}

impl AnchorData {
    ///
    /// True if every coordinate in this anchor is a finite number
    ///
    fn is_finite(&self) -> bool {
        Vector2(self.x, self.y).is_finite()
            && self.handle_in.map(|handle| Vector2::from(handle).is_finite()).unwrap_or(true)
            && self.handle_out.map(|handle| Vector2::from(handle).is_finite()).unwrap_or(true)
    }

    ///
    /// Creates the anchor point described by this data
    ///
    fn to_anchor(&self) -> AnchorPoint {
        AnchorPoint::new(Vector2(self.x, self.y), self.kind, self.handle_in.map(Vector2::from), self.handle_out.map(Vector2::from))
    }
}

impl Path {
    ///
    /// Converts this path to its serializable form
    ///
    pub fn to_data(&self) -> PathData {
        let num_anchors = self.num_anchors();

        PathData {
            anchors:    self.anchors().iter().map(AnchorData::from).collect(),
            closed:     self.is_closed(),
            fill_rule:  self.fill_rule(),
            segments:   Some((0..self.segment_count()).map(|idx| SegmentData { start: idx, end: (idx + 1) % num_anchors }).collect()),
        }
    }

    ///
    /// Rebuilds a path from its serializable form
    ///
    pub fn from_data(data: &PathData) -> Result<Path, PathError> {
        let num_anchors = data.anchors.len();

        if let Some(bad_anchor) = data.anchors.iter().position(|anchor| !anchor.is_finite()) {
            return Err(PathError::NonFiniteCoordinate { anchor: bad_anchor });
        }

        let path = Path::from_anchors(data.anchors.iter().map(|anchor| anchor.to_anchor()), data.closed)
            .with_fill_rule(data.fill_rule);

        if let Some(segments) = &data.segments {
            for (idx, segment) in segments.iter().enumerate() {
                for anchor in [segment.start, segment.end].iter() {
                    if *anchor >= num_anchors {
                        return Err(PathError::MissingAnchor { segment: idx, anchor: *anchor, anchor_count: num_anchors });
                    }
                }

                if segment.start != idx || segment.end != (idx + 1) % num_anchors {
                    return Err(PathError::DisconnectedSegment { segment: idx, start: segment.start, end: segment.end });
                }
            }

            if segments.len() != path.segment_count() {
                return Err(PathError::SegmentCount { expected: path.segment_count(), found: segments.len() });
            }
        }

        Ok(path)
    }
}
