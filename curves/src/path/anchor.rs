use crate::geo::*;

/// Handles closer than this to being collinear (or equal in length) are considered to already satisfy an anchor's constraints
const HANDLE_TOLERANCE: f64 = 1e-9;

///
/// Describes how the two control handles of an anchor point are related to each other
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorType {
    /// The handles can point in any direction
    Corner,

    /// The handles point in opposite directions but can have different lengths
    Smooth,

    /// The handles point in opposite directions and have the same length
    Symmetric,
}

impl Default for AnchorType {
    fn default() -> Self {
        AnchorType::Corner
    }
}

///
/// A vertex of a path, with optional control handles for the segments arriving at and leaving it
///
/// The handles are stored as absolute positions. For smooth and symmetric anchors, setting one handle
/// realigns the other one through the anchor, so the constraint described by the anchor type always holds.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPoint {
    position:       Vector2,
    anchor_type:    AnchorType,
    handle_in:      Option<Vector2>,
    handle_out:     Option<Vector2>,
}

/// The handle that was just changed on an anchor point
#[derive(Clone, Copy, PartialEq)]
enum Handle {
    In,
    Out,
}

impl AnchorPoint {
    ///
    /// Creates a corner anchor with no handles
    ///
    #[inline]
    pub fn corner(position: impl Into<Vector2>) -> AnchorPoint {
        AnchorPoint {
            position:       position.into(),
            anchor_type:    AnchorType::Corner,
            handle_in:      None,
            handle_out:     None,
        }
    }

    ///
    /// Creates an anchor point with a set of handles
    ///
    /// If the handles don't satisfy the anchor type, the incoming handle is adjusted to match the outgoing one.
    ///
    pub fn new(position: impl Into<Vector2>, anchor_type: AnchorType, handle_in: Option<Vector2>, handle_out: Option<Vector2>) -> AnchorPoint {
        let mut anchor = AnchorPoint {
            position:       position.into(),
            anchor_type:    anchor_type,
            handle_in:      handle_in,
            handle_out:     handle_out,
        };

        if anchor.handle_out.is_some() {
            anchor.mirror(Handle::Out);
        } else {
            anchor.mirror(Handle::In);
        }

        anchor
    }

    #[inline] pub fn position(&self) -> Vector2 { self.position }
    #[inline] pub fn anchor_type(&self) -> AnchorType { self.anchor_type }
    #[inline] pub fn handle_in(&self) -> Option<Vector2> { self.handle_in }
    #[inline] pub fn handle_out(&self) -> Option<Vector2> { self.handle_out }

    ///
    /// True if either handle is set
    ///
    #[inline]
    pub fn has_handles(&self) -> bool {
        self.handle_in.is_some() || self.handle_out.is_some()
    }

    ///
    /// Returns this anchor with a new incoming handle
    ///
    #[inline]
    pub fn with_handle_in(mut self, handle: impl Into<Vector2>) -> AnchorPoint {
        self.set_handle_in(Some(handle.into()));
        self
    }

    ///
    /// Returns this anchor with a new outgoing handle
    ///
    #[inline]
    pub fn with_handle_out(mut self, handle: impl Into<Vector2>) -> AnchorPoint {
        self.set_handle_out(Some(handle.into()));
        self
    }

    ///
    /// Sets the incoming handle, updating the outgoing handle if the anchor type requires it
    ///
    pub fn set_handle_in(&mut self, handle: Option<Vector2>) {
        self.handle_in = handle;
        self.mirror(Handle::In);
    }

    ///
    /// Sets the outgoing handle, updating the incoming handle if the anchor type requires it
    ///
    pub fn set_handle_out(&mut self, handle: Option<Vector2>) {
        self.handle_out = handle;
        self.mirror(Handle::Out);
    }

    ///
    /// Changes the type of this anchor
    ///
    /// The outgoing handle is kept when converting to a smooth or symmetric anchor and the incoming handle is
    /// moved to match it (if there's no outgoing handle, the incoming handle is kept instead).
    ///
    pub fn set_anchor_type(&mut self, anchor_type: AnchorType) {
        self.anchor_type = anchor_type;

        if self.handle_out.is_some() {
            self.mirror(Handle::Out);
        } else {
            self.mirror(Handle::In);
        }
    }

    ///
    /// Moves the anchor to a new position, taking its handles with it
    ///
    #[inline]
    pub fn set_position(&mut self, position: impl Into<Vector2>) {
        let offset = position.into() - self.position;
        self.translate(offset);
    }

    ///
    /// Moves the anchor and its handles by an offset
    ///
    #[inline]
    pub fn translate(&mut self, offset: Vector2) {
        self.position   = self.position + offset;
        self.handle_in  = self.handle_in.map(|handle| handle + offset);
        self.handle_out = self.handle_out.map(|handle| handle + offset);
    }

    ///
    /// Returns the same anchor with its handles swapped over (used when reversing a path)
    ///
    #[inline]
    pub fn reversed(&self) -> AnchorPoint {
        AnchorPoint {
            position:       self.position,
            anchor_type:    self.anchor_type,
            handle_in:      self.handle_out,
            handle_out:     self.handle_in,
        }
    }

    ///
    /// Returns an anchor with its position and handles mapped through a function (re-applying the anchor
    /// type constraints afterwards)
    ///
    pub fn map_points(&self, map: impl Fn(Vector2) -> Vector2) -> AnchorPoint {
        AnchorPoint::new(map(self.position), self.anchor_type, self.handle_in.map(&map), self.handle_out.map(&map))
    }

    ///
    /// Updates the handle opposite to `changed` so that the constraints of the anchor type hold
    ///
    fn mirror(&mut self, changed: Handle) {
        let position        = self.position;
        let (source, target) = match changed {
            Handle::In  => (self.handle_in, &mut self.handle_out),
            Handle::Out => (self.handle_out, &mut self.handle_in),
        };

        match self.anchor_type {
            AnchorType::Corner => { }

            AnchorType::Smooth => {
                if let (Some(source), Some(current_target)) = (source, *target) {
                    let direction       = (position - source).normalize();
                    let target_offset   = current_target - position;
                    let aligned         = (target_offset.normalize() - direction).length() <= HANDLE_TOLERANCE;

                    if direction != Vector2::ZERO && !aligned {
                        *target = Some(position + direction * target_offset.length());
                    }
                }
            }

            AnchorType::Symmetric => {
                match source {
                    None            => { *target = None; }
                    Some(source)    => {
                        let mirrored = position * 2.0 - source;

                        if target.map(|current| !current.is_near(mirrored, HANDLE_TOLERANCE)).unwrap_or(true) {
                            *target = Some(mirrored);
                        }
                    }
                }
            }
        }
    }
}
