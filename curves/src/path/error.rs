use thiserror::Error;

///
/// Reasons a path can't be rebuilt from its serialized form
///
#[derive(Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    #[error("segment {segment} refers to anchor {anchor}, but the path only has {anchor_count} anchors")]
    MissingAnchor { segment: usize, anchor: usize, anchor_count: usize },

    #[error("segment {segment} joins anchor {start} to anchor {end}, which do not follow each other in the path")]
    DisconnectedSegment { segment: usize, start: usize, end: usize },

    #[error("found {found} segments, but a path with these anchors should have {expected}")]
    SegmentCount { expected: usize, found: usize },

    #[error("anchor {anchor} has a coordinate that is not a finite number")]
    NonFiniteCoordinate { anchor: usize },
}
