use crate::cell::*;
use crate::glyphs::*;

/// Default maximum distance between a curve and the lines used to draw it, in grid cells
pub const DEFAULT_RASTER_FLATTEN_TOLERANCE: f64 = 0.25;

///
/// Options that control how shapes are turned into grid cells
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RasterOptions {
    /// The characters used to draw strokes and fills
    pub glyphs: GlyphSet,

    /// The colour attached to every generated cell
    pub color: Option<String>,

    /// Maximum distance between a curve and the lines it's drawn with
    pub flatten_tolerance: f64,

    /// If true, filled shapes leave a one-cell gap inside their outline so they don't cover the stroke
    pub fill_inset: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        RasterOptions {
            glyphs:             GlyphSet::ascii(),
            color:              None,
            flatten_tolerance:  DEFAULT_RASTER_FLATTEN_TOLERANCE,
            fill_inset:         true,
        }
    }
}

impl RasterOptions {
    ///
    /// Sets the glyph set used for drawing
    ///
    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    ///
    /// Sets the colour of the generated cells
    ///
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    ///
    /// Removes the colour from the generated cells
    ///
    pub fn without_color(mut self) -> Self {
        self.color = None;
        self
    }

    pub fn with_flatten_tolerance(mut self, tolerance: f64) -> Self {
        self.flatten_tolerance = tolerance;
        self
    }

    pub fn with_fill_inset(mut self, fill_inset: bool) -> Self {
        self.fill_inset = fill_inset;
        self
    }

    ///
    /// Creates a cell with the colour from these options
    ///
    #[inline]
    pub fn cell(&self, x: i32, y: i32, glyph: char) -> GridCell {
        GridCell::new(x, y, glyph).with_color(self.color.clone())
    }
}
