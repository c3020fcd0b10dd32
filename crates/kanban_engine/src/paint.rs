//! Paint driver: turns glyph bits into filled surface cells.

use crate::{Banner, DisplaySurface, Glyph, GlyphTable, Layout, Position, Result, GRID_COLUMN_PIXELS};

/// Paint `glyph` with its top left corner at logical pixel `origin`. Every set
/// bit becomes a `scale x scale` block of filled cells, unset bits are left
/// alone.
pub fn paint_glyph(surface: &mut dyn DisplaySurface, glyph: Glyph, origin: Position, scale: i32) {
    for (x, y) in glyph.ink() {
        let pixel = origin + Position::new(x as i32, y as i32);
        fill_square(surface, pixel, scale);
    }
}

fn fill_square(surface: &mut dyn DisplaySurface, pixel: Position, scale: i32) {
    let size = surface.size();
    for dy in 0..scale {
        for dx in 0..scale {
            let cell = Position::new(pixel.x * scale + dx, pixel.y * scale + dy);
            if size.contains(cell) {
                surface.fill_cell(cell);
            }
        }
    }
}

/// Clear `surface` and paint the whole banner centered on it.
///
/// Showing the result is left to the caller.
///
/// # Errors
///
/// Fails if no layout can be computed for the banner (see [`Layout::compute`]).
pub fn paint_banner(surface: &mut dyn DisplaySurface, table: &GlyphTable, banner: &Banner) -> Result<Layout> {
    surface.clear();
    let layout = Layout::compute(surface.size(), banner)?;
    for (i, line) in banner.lines().iter().enumerate() {
        let origin = layout.line_origin(i);
        for (offset, unit) in line.units() {
            let glyph = table.resolve(unit);
            paint_glyph(surface, glyph, origin.with_x(origin.x + (offset * GRID_COLUMN_PIXELS) as i32), layout.scale);
        }
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BufferSurface, Size};

    #[test]
    fn test_paint_glyph_scaled() {
        let mut surface = BufferSurface::new(Size::new(8, 8));
        let mut glyph = Glyph::EMPTY_HALF_WIDTH;
        glyph.set_pixel(1, 0, true);
        paint_glyph(&mut surface, glyph, Position::new(1, 1), 2);
        // pixel (2, 1) at scale 2 covers cells 4..6 x 2..4
        assert_eq!(surface.filled_count(), 4);
        assert!(surface.is_filled(Position::new(4, 2)));
        assert!(surface.is_filled(Position::new(5, 3)));
        assert!(!surface.is_filled(Position::new(3, 2)));
    }

    #[test]
    fn test_paint_empty_glyph() {
        let mut surface = BufferSurface::new(Size::new(8, 8));
        paint_glyph(&mut surface, Glyph::EMPTY_FULL_WIDTH, Position::new(0, 0), 3);
        assert_eq!(surface.filled_count(), 0);
    }

    #[test]
    fn test_paint_glyph_clips_at_surface_edges() {
        let mut surface = BufferSurface::new(Size::new(4, 4));
        let glyph = Glyph::from_bits(8, 8, u64::MAX);
        paint_glyph(&mut surface, glyph, Position::new(-2, -2), 1);
        assert_eq!(surface.filled_count(), 16);
    }
}
