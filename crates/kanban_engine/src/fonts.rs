use std::{fmt::Display, str::FromStr};

use image::{ImageFormat, Rgba, RgbaImage};

use crate::{
    AssetSource, CodeUnit, EngineError, Glyph, Result, FULL_WIDTH_1_LEAD, FULL_WIDTH_2_LEAD, FULL_WIDTH_SIZE, HALF_WIDTH_SIZE, TRAIL_BYTES,
};

/// Half-width sheet shared by both font variants.
pub const HALF_WIDTH_SHEET: &str = "misaki_gothic_2nd_4x8.png";

/// Glyph cells per row and column of the half-width sheet.
pub const HALF_WIDTH_GRID: u32 = 16;

/// Glyph cells per sheet row of the full-width sheet (one JIS row).
pub const SHEET_COLUMNS: u32 = 94;

/// Logical columns of a full-width row, one per trail byte 0x40..=0xFC.
pub const TRAIL_COLUMNS: usize = (*TRAIL_BYTES.end() - *TRAIL_BYTES.start()) as usize + 1;

/// Offset of the odd sheet row inside the logical column space
/// (trail byte 0x9F starts the second JIS row of a pair).
pub const ODD_ROW_COLUMN_OFFSET: usize = 0x9F - 0x40;

/// Logical rows of the first full-width range (lead bytes 0x81..=0x9F).
pub const FULL_WIDTH_1_ROWS: usize = (*FULL_WIDTH_1_LEAD.end() - *FULL_WIDTH_1_LEAD.start()) as usize + 1;

/// Logical rows of the second full-width range (lead bytes 0xE0..=0xEF).
pub const FULL_WIDTH_2_ROWS: usize = (*FULL_WIDTH_2_LEAD.end() - *FULL_WIDTH_2_LEAD.start()) as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariant {
    #[default]
    Mincho,
    Gothic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 2] = [FontVariant::Mincho, FontVariant::Gothic];

    pub fn name(self) -> &'static str {
        match self {
            FontVariant::Mincho => "mincho",
            FontVariant::Gothic => "gothic",
        }
    }

    pub fn half_width_sheet(self) -> &'static str {
        HALF_WIDTH_SHEET
    }

    pub fn full_width_sheet(self) -> &'static str {
        match self {
            FontVariant::Mincho => "misaki_mincho.png",
            FontVariant::Gothic => "misaki_gothic_2nd.png",
        }
    }
}

impl Display for FontVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FontVariant {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        FontVariant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| EngineError::UnknownFont { name: s.to_string() })
    }
}

/// One full-width code range: `rows` logical rows of [`TRAIL_COLUMNS`] glyphs.
#[derive(Debug, Clone, PartialEq)]
struct FullWidthPage {
    rows: usize,
    glyphs: Vec<Glyph>,
}

impl FullWidthPage {
    fn new(rows: usize) -> Self {
        Self {
            rows,
            glyphs: vec![Glyph::EMPTY_FULL_WIDTH; rows * TRAIL_COLUMNS],
        }
    }

    fn set(&mut self, row: usize, column: usize, glyph: Glyph) {
        self.glyphs[row * TRAIL_COLUMNS + column] = glyph;
    }

    fn get(&self, row: usize, trail: u8) -> Glyph {
        if row >= self.rows || !TRAIL_BYTES.contains(&trail) {
            return Glyph::EMPTY_FULL_WIDTH;
        }
        self.glyphs[row * TRAIL_COLUMNS + (trail - TRAIL_BYTES.start()) as usize]
    }

    fn ink_glyphs(&self) -> usize {
        self.glyphs.iter().filter(|g| !g.is_empty()).count()
    }
}

/// All glyphs of one font variant. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphTable {
    half_width: Vec<Glyph>,
    full_width_1: FullWidthPage,
    full_width_2: FullWidthPage,
}

impl GlyphTable {
    /// Build the table of `variant` from the sheets provided by `assets`.
    ///
    /// # Errors
    ///
    /// Fails if a sheet is missing, can't be decoded or is too small. No
    /// partial table is returned.
    pub fn load(variant: FontVariant, assets: &dyn AssetSource) -> Result<Self> {
        let half_name = variant.half_width_sheet();
        let full_name = variant.full_width_sheet();
        let half = decode_sheet(half_name, &assets.load(half_name)?)?;
        let full = decode_sheet(full_name, &assets.load(full_name)?)?;
        let table = Self::from_sheets(half_name, &half, full_name, &full)?;
        log::info!(
            "glyph table '{variant}' ready: {} half-width, {} + {} full-width glyphs with ink",
            table.half_width.iter().filter(|g| !g.is_empty()).count(),
            table.full_width_1.ink_glyphs(),
            table.full_width_2.ink_glyphs()
        );
        Ok(table)
    }

    /// Build the table from already decoded sheets. Names are used for error
    /// reporting only.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::SheetTooSmall`] if a sheet doesn't cover the
    /// whole glyph grid.
    pub fn from_sheets(half_name: &str, half: &RgbaImage, full_name: &str, full: &RgbaImage) -> Result<Self> {
        Ok(Self {
            half_width: parse_half_width_sheet(half_name, half)?,
            full_width_1: parse_full_width_block(full_name, full, 0, FULL_WIDTH_1_ROWS)?,
            full_width_2: parse_full_width_block(full_name, full, 2 * FULL_WIDTH_1_ROWS as u32, FULL_WIDTH_2_ROWS)?,
        })
    }

    pub fn half_width(&self, byte: u8) -> Glyph {
        self.half_width[byte as usize]
    }

    /// Look up the glyph of a classified code unit.
    pub fn resolve(&self, unit: CodeUnit) -> Glyph {
        match unit {
            CodeUnit::HalfWidth(byte) => self.half_width(byte),
            CodeUnit::FullWidth1 { lead, trail } => self.full_width_1.get(lead.wrapping_sub(*FULL_WIDTH_1_LEAD.start()) as usize, trail),
            CodeUnit::FullWidth2 { lead, trail } => self.full_width_2.get(lead.wrapping_sub(*FULL_WIDTH_2_LEAD.start()) as usize, trail),
        }
    }
}

/// Decode a PNG font sheet.
///
/// # Errors
///
/// Returns the image error if the data isn't a decodable PNG.
pub fn decode_sheet(name: &str, data: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory_with_format(data, ImageFormat::Png).map_err(|err| {
        log::error!("font sheet {name} can't be decoded: {err}");
        EngineError::from(err)
    })?;
    Ok(img.to_rgba8())
}

/// Pure black is ink, everything else is background. Alpha is ignored.
#[inline]
fn is_ink(pixel: &Rgba<u8>) -> bool {
    pixel[0] == 0 && pixel[1] == 0 && pixel[2] == 0
}

fn read_cell(sheet: &RgbaImage, left: u32, top: u32, (width, height): (u8, u8)) -> Glyph {
    let mut glyph = Glyph::new(width, height);
    for y in 0..height as u32 {
        for x in 0..width as u32 {
            if is_ink(sheet.get_pixel(left + x, top + y)) {
                glyph.set_pixel(x as usize, y as usize, true);
            }
        }
    }
    glyph
}

fn check_sheet_size(name: &str, sheet: &RgbaImage, min_width: u32, min_height: u32) -> Result<()> {
    if sheet.width() < min_width || sheet.height() < min_height {
        return Err(EngineError::SheetTooSmall {
            name: name.to_string(),
            width: sheet.width(),
            height: sheet.height(),
            min_width,
            min_height,
        });
    }
    Ok(())
}

/// 16x16 cells of 4x8 pixels, cell `(row, col)` is byte `row * 16 + col`.
fn parse_half_width_sheet(name: &str, sheet: &RgbaImage) -> Result<Vec<Glyph>> {
    let (w, h) = HALF_WIDTH_SIZE;
    check_sheet_size(name, sheet, HALF_WIDTH_GRID * w as u32, HALF_WIDTH_GRID * h as u32)?;

    let mut glyphs = Vec::with_capacity(256);
    for row in 0..HALF_WIDTH_GRID {
        for col in 0..HALF_WIDTH_GRID {
            glyphs.push(read_cell(sheet, col * w as u32, row * h as u32, HALF_WIDTH_SIZE));
        }
    }
    Ok(glyphs)
}

/// Logical column of a glyph cell. Even sheet rows hold trail bytes
/// 0x40..=0x7E, 0x80..=0x9E (0x7F is not a valid trail byte), odd rows hold
/// 0x9F..=0xFC.
pub fn sheet_column_to_logical(sheet_row: u32, column: u32) -> usize {
    let column = column as usize;
    if sheet_row % 2 == 1 {
        ODD_ROW_COLUMN_OFFSET + column
    } else if column < 0x7F - 0x40 {
        column
    } else {
        column + 1
    }
}

/// A block of `rows * 2` sheet rows starting at sheet row `first_row`.
fn parse_full_width_block(name: &str, sheet: &RgbaImage, first_row: u32, rows: usize) -> Result<FullWidthPage> {
    let (w, h) = FULL_WIDTH_SIZE;
    let sheet_rows = rows as u32 * 2;
    check_sheet_size(name, sheet, SHEET_COLUMNS * w as u32, (first_row + sheet_rows) * h as u32)?;

    let mut page = FullWidthPage::new(rows);
    for sheet_row in 0..sheet_rows {
        let top = (first_row + sheet_row) * h as u32;
        for col in 0..SHEET_COLUMNS {
            let glyph = read_cell(sheet, col * w as u32, top, FULL_WIDTH_SIZE);
            page.set(sheet_row as usize / 2, sheet_column_to_logical(sheet_row, col), glyph);
        }
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_variant_from_str() {
        assert_eq!("mincho".parse::<FontVariant>().unwrap(), FontVariant::Mincho);
        assert_eq!("gothic".parse::<FontVariant>().unwrap(), FontVariant::Gothic);
        assert!(matches!("comic".parse::<FontVariant>(), Err(EngineError::UnknownFont { .. })));
        assert!("Gothic".parse::<FontVariant>().is_err());
    }

    #[test]
    fn test_font_variant_sheets() {
        assert_eq!(FontVariant::Mincho.half_width_sheet(), FontVariant::Gothic.half_width_sheet());
        assert_eq!(FontVariant::Mincho.full_width_sheet(), "misaki_mincho.png");
        assert_eq!(FontVariant::Gothic.full_width_sheet(), "misaki_gothic_2nd.png");
    }

    #[test]
    fn test_table_dimensions() {
        assert_eq!(TRAIL_COLUMNS, 189);
        assert_eq!(FULL_WIDTH_1_ROWS, 31);
        assert_eq!(FULL_WIDTH_2_ROWS, 16);
        assert_eq!(ODD_ROW_COLUMN_OFFSET, 95);
    }

    #[test]
    fn test_sheet_column_to_logical() {
        // even row: 0x40..=0x7E, skip 0x7F, 0x80..=0x9E
        assert_eq!(sheet_column_to_logical(0, 0), 0x40 - 0x40);
        assert_eq!(sheet_column_to_logical(0, 62), 0x7E - 0x40);
        assert_eq!(sheet_column_to_logical(0, 63), 0x80 - 0x40);
        assert_eq!(sheet_column_to_logical(0, 93), 0x9E - 0x40);
        // odd row: 0x9F..=0xFC
        assert_eq!(sheet_column_to_logical(1, 0), 0x9F - 0x40);
        assert_eq!(sheet_column_to_logical(1, 93), 0xFC - 0x40);
    }

    #[test]
    fn test_is_ink() {
        assert!(is_ink(&Rgba([0, 0, 0, 255])));
        assert!(is_ink(&Rgba([0, 0, 0, 0])));
        assert!(!is_ink(&Rgba([1, 0, 0, 255])));
        assert!(!is_ink(&Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_undersized_half_width_sheet() {
        let sheet = RgbaImage::from_pixel(63, 128, Rgba([255, 255, 255, 255]));
        let err = parse_half_width_sheet("hw.png", &sheet).unwrap_err();
        assert!(matches!(err, EngineError::SheetTooSmall { width: 63, height: 128, .. }));
    }

    #[test]
    fn test_full_width_page_out_of_range() {
        let page = FullWidthPage::new(2);
        assert_eq!(page.get(5, 0x40), Glyph::EMPTY_FULL_WIDTH);
        assert_eq!(page.get(0, 0x3F), Glyph::EMPTY_FULL_WIDTH);
        assert_eq!(page.get(0, 0xFD), Glyph::EMPTY_FULL_WIDTH);
    }
}
