use crate::cell::*;

use std::fmt;

/// The largest width or height of a grid created by `CharGrid::from_cells()`
pub const MAX_GRID_DIMENSION: usize = 4096;

///
/// A fixed-size buffer of characters that grid cells can be drawn into
///
/// Cells are applied in order and a later cell replaces an earlier one in the same position. Cells outside
/// the grid are ignored. The top-left character of the grid is at `origin`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CharGrid {
    width:      usize,
    height:     usize,
    origin:     GridPoint,
    background: char,
    glyphs:     Vec<char>,
    colors:     Vec<Option<String>>,
}

impl CharGrid {
    ///
    /// Creates an empty grid with its origin at `(0, 0)`
    ///
    pub fn new(width: usize, height: usize) -> CharGrid {
        CharGrid {
            width:      width,
            height:     height,
            origin:     (0, 0),
            background: ' ',
            glyphs:     vec![' '; width * height],
            colors:     vec![None; width * height],
        }
    }

    ///
    /// Creates a grid just large enough to hold a set of cells, and draws them
    ///
    /// The grid's width and height are limited to `MAX_GRID_DIMENSION`: cells further than that from the
    /// top-left cell are left out.
    ///
    pub fn from_cells(cells: &[GridCell]) -> CharGrid {
        if cells.is_empty() {
            return CharGrid::new(0, 0);
        }

        let (min_x, min_y, max_x, max_y) = cells.iter()
            .fold((i32::MAX, i32::MAX, i32::MIN, i32::MIN), |(min_x, min_y, max_x, max_y), cell| {
                (min_x.min(cell.x), min_y.min(cell.y), max_x.max(cell.x), max_y.max(cell.y))
            });

        let extent      = |min: i32, max: i32| ((max as i64) - (min as i64) + 1).min(MAX_GRID_DIMENSION as i64) as usize;
        let width       = extent(min_x, max_x);
        let height      = extent(min_y, max_y);
        let mut grid    = CharGrid::new(width, height).with_origin((min_x, min_y));

        grid.draw(cells.iter().cloned());
        grid
    }

    ///
    /// Moves the grid so its top-left character is at the specified position
    ///
    pub fn with_origin(mut self, origin: GridPoint) -> CharGrid {
        self.origin = origin;
        self
    }

    ///
    /// Sets the character used for empty positions (clearing the grid)
    ///
    pub fn with_background(mut self, background: char) -> CharGrid {
        self.background = background;
        self.clear();
        self
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn origin(&self) -> GridPoint { self.origin }

    ///
    /// Empties the grid
    ///
    pub fn clear(&mut self) {
        let background = self.background;

        self.glyphs.iter_mut().for_each(|glyph| *glyph = background);
        self.colors.iter_mut().for_each(|color| *color = None);
    }

    ///
    /// The index into the buffers of a grid position, if it's inside the grid
    ///
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = (x as i64) - (self.origin.0 as i64);
        let y = (y as i64) - (self.origin.1 as i64);

        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some((y as usize) * self.width + (x as usize))
        } else {
            None
        }
    }

    ///
    /// Writes cells to the grid (later cells replace earlier ones)
    ///
    pub fn draw(&mut self, cells: impl IntoIterator<Item=GridCell>) {
        for cell in cells {
            if let Some(idx) = self.index(cell.x, cell.y) {
                self.glyphs[idx] = cell.glyph;
                self.colors[idx] = cell.color;
            }
        }
    }

    ///
    /// The character at a position (None if the position is outside the grid)
    ///
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|idx| self.glyphs[idx])
    }

    ///
    /// The colour of the character at a position
    ///
    pub fn color_at(&self, x: i32, y: i32) -> Option<&str> {
        self.index(x, y).and_then(|idx| self.colors[idx].as_deref())
    }

    ///
    /// The rows of the grid, from top to bottom
    ///
    pub fn rows(&self) -> impl '_ + Iterator<Item=String> {
        (0..self.height)
            .map(move |row| self.glyphs[(row * self.width)..((row + 1) * self.width)].iter().collect())
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 { writeln!(f)?; }
            write!(f, "{}", row)?;
        }

        Ok(())
    }
}
