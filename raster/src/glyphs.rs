use flo_ascii_curves::*;

/// Strokes within this angle of the x axis use the horizontal glyph
const HORIZONTAL_LIMIT: f64 = 22.5;

/// Strokes at least this steep use the vertical glyph
const VERTICAL_LIMIT: f64 = 67.5;

///
/// The characters used to draw strokes on the grid
///
/// The grid has y increasing downwards, so `diagonal_down` is used for lines running from the top-left to
/// the bottom-right. The arc and corner glyphs are named for the part of a shape they are found in: the
/// top-left arc glyph joins a curve running down the left of a shape to one running along the top.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphSet {
    pub horizontal: char,
    pub vertical: char,
    pub diagonal_down: char,
    pub diagonal_up: char,

    pub arc_top_left: char,
    pub arc_top_right: char,
    pub arc_bottom_left: char,
    pub arc_bottom_right: char,

    pub corner_top_left: char,
    pub corner_top_right: char,
    pub corner_bottom_left: char,
    pub corner_bottom_right: char,

    /// Used where a stroke turns back on itself
    pub junction: char,

    /// Used for zero-length lines and zero-radius circles
    pub point: char,

    /// Used for the interior of filled shapes
    pub fill: char,
}

impl Default for GlyphSet {
    fn default() -> Self {
        GlyphSet::ascii()
    }
}

impl GlyphSet {
    ///
    /// Glyphs using only ASCII characters
    ///
    pub fn ascii() -> GlyphSet {
        GlyphSet {
            horizontal:             '-',
            vertical:               '|',
            diagonal_down:          '\\',
            diagonal_up:            '/',

            arc_top_left:           '/',
            arc_top_right:          '\\',
            arc_bottom_left:        '\\',
            arc_bottom_right:       '/',

            corner_top_left:        '+',
            corner_top_right:       '+',
            corner_bottom_left:     '+',
            corner_bottom_right:    '+',

            junction:               '+',
            point:                  '*',
            fill:                   '#',
        }
    }

    ///
    /// Glyphs from the unicode box drawing block
    ///
    pub fn unicode() -> GlyphSet {
        GlyphSet {
            horizontal:             '─',
            vertical:               '│',
            diagonal_down:          '╲',
            diagonal_up:            '╱',

            arc_top_left:           '╭',
            arc_top_right:          '╮',
            arc_bottom_left:        '╰',
            arc_bottom_right:       '╯',

            corner_top_left:        '┌',
            corner_top_right:       '┐',
            corner_bottom_left:     '└',
            corner_bottom_right:    '┘',

            junction:               '┼',
            point:                  '•',
            fill:                   '█',
        }
    }

    ///
    /// The glyph for a straight stroke moving by `(dx, dy)`
    ///
    pub fn line_glyph(&self, dx: f64, dy: f64) -> char {
        match grid_direction(dx, dy) {
            (0, 0)              => self.point,
            (_, 0)              => self.horizontal,
            (0, _)              => self.vertical,
            (sx, sy) if sx == sy => self.diagonal_down,
            _                   => self.diagonal_up,
        }
    }

    ///
    /// The glyph for a point on a curved outline
    ///
    /// `offset` is the position of the point relative to the center of the shape and `tangent` is the
    /// direction of the outline there. Near-horizontal and near-vertical parts of the outline use the
    /// straight glyphs, and the rest use the arc glyph for the quadrant the point is in.
    ///
    pub fn arc_glyph(&self, offset: Vector2, tangent: Vector2) -> char {
        match grid_direction(tangent.x(), tangent.y()) {
            (0, 0) => self.point,
            (_, 0) => self.horizontal,
            (0, _) => self.vertical,

            _ => {
                match (offset.x() < 0.0, offset.y() < 0.0) {
                    (true, true)    => self.arc_top_left,
                    (false, true)   => self.arc_top_right,
                    (true, false)   => self.arc_bottom_left,
                    (false, false)  => self.arc_bottom_right,
                }
            }
        }
    }

    ///
    /// The glyph to use where a stroke arriving in the direction `incoming` leaves in the direction `outgoing`
    ///
    /// Directions are grid steps as returned by `grid_direction()`. Only right-angle turns between horizontal
    /// and vertical strokes produce a corner. A stroke that reverses direction produces the junction glyph. Any
    /// other join leaves the stroke glyph in place, so this returns `None`.
    ///
    pub fn corner_glyph(&self, incoming: GridDirection, outgoing: GridDirection) -> Option<char> {
        if incoming == (0, 0) || outgoing == (0, 0) {
            return None;
        }

        // The cell connects back along the incoming stroke and forward along the outgoing one
        let back = (-incoming.0, -incoming.1);

        if back == outgoing {
            return Some(self.junction);
        }

        let (horizontal, vertical) = match (back, outgoing) {
            ((h, 0), (0, v)) | ((0, v), (h, 0)) => (h, v),
            _                                   => { return None; }
        };

        match (horizontal, vertical) {
            (1, 1)      => Some(self.corner_top_left),
            (-1, 1)     => Some(self.corner_top_right),
            (1, -1)     => Some(self.corner_bottom_left),
            (-1, -1)    => Some(self.corner_bottom_right),
            _           => None,
        }
    }
}

/// One of the eight grid directions (or `(0, 0)` for no movement)
pub type GridDirection = (i32, i32);

///
/// Classifies a direction as one of the eight grid directions
///
/// Directions within 22.5 degrees of the x axis are horizontal and directions within 22.5 degrees of the y
/// axis are vertical. Everything else is diagonal.
///
pub fn grid_direction(dx: f64, dy: f64) -> GridDirection {
    if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
        return (0, 0);
    }

    let angle   = dy.abs().atan2(dx.abs()).to_degrees();
    let sign    = |val: f64| if val < 0.0 { -1 } else { 1 };

    if angle <= HORIZONTAL_LIMIT {
        (sign(dx), 0)
    } else if angle >= VERTICAL_LIMIT {
        (0, sign(dy))
    } else {
        (sign(dx), sign(dy))
    }
}
