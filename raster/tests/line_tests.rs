use flo_ascii_raster::*;

use rand::prelude::*;

#[test]
pub fn horizontal_line_cells() {
    let cells = rasterize_line((0.0, 0.0), (10.0, 0.0), &RasterOptions::default());

    assert!(cells.len() == 11, "Generated {} cells", cells.len());

    for (idx, cell) in cells.iter().enumerate() {
        assert!(cell.x == idx as i32, "Cell {} was at x={}", idx, cell.x);
        assert!(cell.y == 0);
        assert!(cell.glyph == '-', "Cell {} had glyph {:?}", idx, cell.glyph);
        assert!(cell.color.is_none());
    }
}

#[test]
pub fn vertical_line_glyph() {
    let cells = rasterize_line((3.0, 10.0), (3.0, 2.0), &RasterOptions::default());

    assert!(cells.len() == 9);
    assert!(cells.iter().all(|cell| cell.glyph == '|' && cell.x == 3));
    assert!(cells[0].position() == (3, 10));
    assert!(cells[8].position() == (3, 2));
}

#[test]
pub fn diagonal_line_glyphs() {
    let options = RasterOptions::default();
    let down    = rasterize_line((0.0, 0.0), (5.0, 5.0), &options);
    let up      = rasterize_line((0.0, 5.0), (5.0, 0.0), &options);

    assert!(down.iter().all(|cell| cell.glyph == '\\'));
    assert!(up.iter().all(|cell| cell.glyph == '/'));

    // Reversing the line doesn't change its glyph
    let reversed = rasterize_line((5.0, 5.0), (0.0, 0.0), &options);
    assert!(reversed.iter().all(|cell| cell.glyph == '\\'));
}

#[test]
pub fn shallow_line_is_horizontal() {
    let cells = rasterize_line((0.0, 0.0), (10.0, 3.0), &RasterOptions::default());

    assert!(cells.iter().all(|cell| cell.glyph == '-'));
    assert!(cells.len() == 11);
}

#[test]
pub fn zero_length_line_is_a_point() {
    let cells = rasterize_line((4.2, 3.9), (4.4, 4.1), &RasterOptions::default());

    assert!(cells == vec![GridCell::new(4, 4, '*')], "Generated {:?}", cells);
}

#[test]
pub fn colored_line() {
    let cells = rasterize_line((0.0, 0.0), (3.0, 0.0), &RasterOptions::default().with_color("red"));

    assert!(cells.iter().all(|cell| cell.color.as_deref() == Some("red")));
}

#[test]
pub fn unicode_line() {
    let cells = rasterize_line((0.0, 0.0), (0.0, 3.0), &RasterOptions::default().with_glyphs(GlyphSet::unicode()));

    assert!(cells.iter().all(|cell| cell.glyph == '│'));
}

#[test]
pub fn random_lines_are_connected() {
    let mut rng = StdRng::seed_from_u64(0x11e5);

    for _ in 0..500 {
        let start   = (rng.gen_range(-50..50), rng.gen_range(-50..50));
        let end     = (rng.gen_range(-50..50), rng.gen_range(-50..50));
        let points  = bresenham_line(start, end);

        let expected_len = (end.0 - start.0).abs().max((end.1 - start.1).abs()) + 1;

        assert!(points.len() == expected_len as usize, "Line from {:?} to {:?} has {} points", start, end, points.len());
        assert!(points[0] == start);
        assert!(points[points.len()-1] == end);

        for idx in 1..points.len() {
            let (x0, y0) = points[idx-1];
            let (x1, y1) = points[idx];

            assert!((x1 - x0).abs() <= 1 && (y1 - y0).abs() <= 1, "Gap between {:?} and {:?}", points[idx-1], points[idx]);
        }
    }
}

#[test]
pub fn line_glyph_buckets() {
    let glyphs = GlyphSet::ascii();

    assert!(glyphs.line_glyph(10.0, 4.0) == '-');
    assert!(glyphs.line_glyph(-10.0, 4.0) == '-');
    assert!(glyphs.line_glyph(4.0, 10.0) == '|');
    assert!(glyphs.line_glyph(1.0, -1.0) == '/');
    assert!(glyphs.line_glyph(-1.0, -1.0) == '\\');
    assert!(glyphs.line_glyph(0.0, 0.0) == '*');
}

#[test]
pub fn grid_directions() {
    assert!(grid_direction(1.0, 0.0) == (1, 0));
    assert!(grid_direction(-3.0, 1.0) == (-1, 0));
    assert!(grid_direction(0.5, -4.0) == (0, -1));
    assert!(grid_direction(2.0, 2.0) == (1, 1));
    assert!(grid_direction(-2.0, 1.5) == (-1, 1));
    assert!(grid_direction(0.0, 0.0) == (0, 0));
    assert!(grid_direction(f64::NAN, 1.0) == (0, 0));
}

#[test]
pub fn line_wider_than_i32_range() {
    let cells = rasterize_line((-1.5e9, 0.0), (1.5e9, 0.0), &RasterOptions::default());

    assert!(cells.is_empty(), "Generated {} cells", cells.len());
}

#[test]
pub fn line_off_the_grid() {
    // Both ends are beyond i32::MIN, so there's nowhere on the grid to put the line
    let cells = rasterize_line((-3e9, 0.0), (-3e9 + 4.0, 0.0), &RasterOptions::default());
    assert!(cells.is_empty(), "Generated {:?}", cells);

    let cells = rasterize_line((f64::NAN, 0.0), (4.0, 0.0), &RasterOptions::default());
    assert!(cells.is_empty(), "Generated {:?}", cells);
}

#[test]
pub fn grid_line_between_extreme_positions() {
    let options = RasterOptions::default();

    assert!(bresenham_line((i32::MIN, 0), (i32::MAX, 0)).is_empty());
    assert!(rasterize_grid_line((0, i32::MIN), (0, i32::MAX), &options).is_empty());

    // Lines at the edge of the grid that are short enough still work
    let cells = rasterize_grid_line((i32::MAX - 4, 0), (i32::MAX, 0), &options);
    assert!(cells.len() == 5, "Generated {} cells", cells.len());
    assert!(cells[4].position() == (i32::MAX, 0));
}

#[test]
pub fn longest_line() {
    let points = bresenham_line((0, 0), (MAX_LINE_LENGTH as i32, 3));
    assert!(points.len() == MAX_LINE_LENGTH as usize + 1);

    let points = bresenham_line((0, 0), (MAX_LINE_LENGTH as i32 + 1, 3));
    assert!(points.is_empty());
}
