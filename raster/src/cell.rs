use flo_ascii_curves::*;

use itertools::*;

/// A position on the character grid
pub type GridPoint = (i32, i32);

///
/// A single character written to the grid by a rasterizer
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    pub glyph: char,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl GridCell {
    ///
    /// Creates an uncoloured cell
    ///
    #[inline]
    pub fn new(x: i32, y: i32, glyph: char) -> GridCell {
        GridCell { x, y, glyph, color: None }
    }

    ///
    /// Returns this cell with a different colour
    ///
    #[inline]
    pub fn with_color(mut self, color: Option<String>) -> GridCell {
        self.color = color;
        self
    }

    #[inline]
    pub fn position(&self) -> GridPoint {
        (self.x, self.y)
    }
}

///
/// Rounds a point to the nearest grid position
///
#[inline]
pub fn to_grid(point: Vector2) -> GridPoint {
    (point.x().round() as i32, point.y().round() as i32)
}

///
/// Rounds a point to the nearest grid position, or returns None if it's not finite or is too far from the
/// origin to be represented on the grid
///
#[inline]
pub fn try_to_grid(point: Vector2) -> Option<GridPoint> {
    let (x, y)  = (point.x().round(), point.y().round());
    let range   = (i32::MIN as f64)..=(i32::MAX as f64);

    if range.contains(&x) && range.contains(&y) {
        Some((x as i32, y as i32))
    } else {
        None
    }
}

///
/// Removes cells that share a position with an earlier cell in the list
///
pub fn unique_cells(cells: Vec<GridCell>) -> Vec<GridCell> {
    cells.into_iter()
        .unique_by(|cell| cell.position())
        .collect()
}
