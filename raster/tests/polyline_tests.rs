use flo_ascii_raster::*;
use flo_ascii_raster::curves::*;

#[test]
pub fn rectangle_outline() {
    let cells   = rasterize_rectangle(0.0, 0.0, 4.0, 2.0, &RasterOptions::default());
    let grid    = CharGrid::from_cells(&cells);

    assert!(grid.to_string() == "+---+\n|   |\n+---+", "Rendered:\n{}", grid);
    assert!(cells.len() == 12, "Generated {} cells", cells.len());
}

#[test]
pub fn unicode_rectangle_outline() {
    let cells   = rasterize_rectangle(0.0, 0.0, 4.0, 2.0, &RasterOptions::default().with_glyphs(GlyphSet::unicode()));
    let grid    = CharGrid::from_cells(&cells);

    assert!(grid.to_string() == "┌───┐\n│   │\n└───┘", "Rendered:\n{}", grid);
}

#[test]
pub fn open_polyline_corner() {
    let points  = vec![Vector2(0.0, 0.0), Vector2(4.0, 0.0), Vector2(4.0, 3.0)];
    let cells   = rasterize_polyline(&points, false, &RasterOptions::default().with_glyphs(GlyphSet::unicode()));
    let grid    = CharGrid::from_cells(&cells);

    assert!(grid.to_string() == "────┐\n    │\n    │\n    │", "Rendered:\n{}", grid);
}

#[test]
pub fn polyline_does_not_repeat_vertices() {
    let points  = vec![Vector2(0.0, 0.0), Vector2(5.0, 0.0), Vector2(5.0, 5.0), Vector2(0.0, 5.0)];
    let cells   = rasterize_polyline(&points, true, &RasterOptions::default());

    let mut positions = cells.iter().map(|cell| cell.position()).collect::<Vec<_>>();
    let num_cells = positions.len();
    positions.sort();
    positions.dedup();

    assert!(positions.len() == num_cells, "Some cells were generated twice");
    assert!(num_cells == 20);
}

#[test]
pub fn diagonal_turns_have_no_corner() {
    let points  = vec![Vector2(0.0, 0.0), Vector2(3.0, 3.0), Vector2(6.0, 0.0)];
    let cells   = rasterize_polyline(&points, false, &RasterOptions::default());

    let vertex = cells.iter().find(|cell| cell.position() == (3, 3)).unwrap();
    assert!(vertex.glyph == '\\', "Vertex glyph was {:?}", vertex.glyph);
}

#[test]
pub fn single_point_polyline() {
    let cells = rasterize_polyline(&[Vector2(1.0, 1.0), Vector2(1.2, 0.9)], true, &RasterOptions::default());

    assert!(cells == vec![GridCell::new(1, 1, '*')]);
}

#[test]
pub fn corner_glyphs() {
    let glyphs = GlyphSet::unicode();

    assert!(glyphs.corner_glyph((1, 0), (0, 1)) == Some('┐'));
    assert!(glyphs.corner_glyph((0, 1), (-1, 0)) == Some('┘'));
    assert!(glyphs.corner_glyph((-1, 0), (0, -1)) == Some('└'));
    assert!(glyphs.corner_glyph((0, -1), (1, 0)) == Some('┌'));
    assert!(glyphs.corner_glyph((1, 0), (1, 0)) == None);
    assert!(glyphs.corner_glyph((1, 1), (1, -1)) == None);
    assert!(glyphs.corner_glyph((1, 0), (-1, 0)) == Some('┼'));
}

#[test]
pub fn rounded_rectangle_outline() {
    let cells   = rasterize_rounded_rectangle(0.0, 0.0, 10.0, 6.0, 2.0, &RasterOptions::default().with_glyphs(GlyphSet::unicode()));
    let grid    = CharGrid::from_cells(&cells);

    assert!(grid.width() == 11 && grid.height() == 7);

    // No square corners
    assert!(grid.glyph_at(0, 0) == Some(' '));
    assert!(grid.glyph_at(10, 6) == Some(' '));

    // Straight edges
    assert!(grid.glyph_at(5, 0) == Some('─'));
    assert!(grid.glyph_at(5, 6) == Some('─'));
    assert!(grid.glyph_at(0, 3) == Some('│'));
    assert!(grid.glyph_at(10, 3) == Some('│'));

    let mut positions = cells.iter().map(|cell| cell.position()).collect::<Vec<_>>();
    let num_cells = positions.len();
    positions.sort();
    positions.dedup();
    assert!(positions.len() == num_cells);
}

#[test]
pub fn rounded_rectangle_with_no_radius() {
    let options = RasterOptions::default();

    assert!(rasterize_rounded_rectangle(0.0, 0.0, 4.0, 2.0, 0.0, &options) == rasterize_rectangle(0.0, 0.0, 4.0, 2.0, &options));
}

#[test]
pub fn path_rectangle_matches_rectangle() {
    let options = RasterOptions::default();
    let path    = Path::rectangle(0.0, 0.0, 4.0, 2.0);

    assert!(rasterize_path(&path, &options) == rasterize_rectangle(0.0, 0.0, 4.0, 2.0, &options));
}

#[test]
pub fn stroked_circle_path() {
    let path    = Path::circle((20.0, 20.0), 10.0);
    let cells   = rasterize_path(&path, &RasterOptions::default());

    assert!(!cells.is_empty());

    for cell in cells.iter() {
        let distance = Vector2(cell.x as f64, cell.y as f64).distance_to(Vector2(20.0, 20.0));
        assert!(distance > 8.5 && distance < 11.5, "{:?} is {} from the center", cell, distance);
        assert!(cell.glyph != '+', "Corner glyph at {:?}", cell);
    }

    // The outline has no gaps
    for idx in 1..cells.len() {
        let (x0, y0) = cells[idx-1].position();
        let (x1, y1) = cells[idx].position();
        assert!((x1 - x0).abs() <= 1 && (y1 - y0).abs() <= 1, "Gap between {:?} and {:?}", cells[idx-1], cells[idx]);
    }
}

#[test]
pub fn empty_path_has_no_cells() {
    assert!(rasterize_path(&Path::new(), &RasterOptions::default()).is_empty());
}
