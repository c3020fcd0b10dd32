//! Shift_JIS encoding and code unit classification.
//!
//! Lines are stored as Shift_JIS bytes. A byte in one of the two supported lead
//! ranges starts a two byte full-width unit, every other byte is a half-width
//! unit on its own.

use std::ops::RangeInclusive;

use encoding_rs::SHIFT_JIS;

use crate::HALF_WIDTH_SIZE;

/// Lead bytes of the first full-width range.
pub const FULL_WIDTH_1_LEAD: RangeInclusive<u8> = 0x81..=0x9F;

/// Lead bytes of the second full-width range.
pub const FULL_WIDTH_2_LEAD: RangeInclusive<u8> = 0xE0..=0xEF;

/// Valid trail bytes of a full-width unit (0x7F excluded by Shift_JIS itself).
pub const TRAIL_BYTES: RangeInclusive<u8> = 0x40..=0xFC;

/// Substitute for characters without a supported Shift_JIS form (ASCII SUB).
pub const FALLBACK_BYTE: u8 = 0x1A;

/// Pixel width of one grid column, the width of a half-width glyph.
pub const GRID_COLUMN_PIXELS: usize = HALF_WIDTH_SIZE.0 as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    HalfWidth,
    FullWidth1,
    FullWidth2,
}

impl CharClass {
    /// Classify a byte by its value alone.
    pub fn of(byte: u8) -> CharClass {
        if FULL_WIDTH_1_LEAD.contains(&byte) {
            CharClass::FullWidth1
        } else if FULL_WIDTH_2_LEAD.contains(&byte) {
            CharClass::FullWidth2
        } else {
            CharClass::HalfWidth
        }
    }

    pub fn is_full_width(self) -> bool {
        !matches!(self, CharClass::HalfWidth)
    }
}

/// One character of an encoded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeUnit {
    HalfWidth(u8),
    FullWidth1 { lead: u8, trail: u8 },
    FullWidth2 { lead: u8, trail: u8 },
}

impl CodeUnit {
    pub fn class(self) -> CharClass {
        match self {
            CodeUnit::HalfWidth(_) => CharClass::HalfWidth,
            CodeUnit::FullWidth1 { .. } => CharClass::FullWidth1,
            CodeUnit::FullWidth2 { .. } => CharClass::FullWidth2,
        }
    }

    /// Number of bytes the unit occupies in the line.
    pub fn byte_len(self) -> usize {
        if self.class().is_full_width() {
            2
        } else {
            1
        }
    }

    /// Grid columns covered by the unit, equal to its byte length.
    pub fn columns(self) -> usize {
        self.byte_len()
    }
}

/// Iterator over the code units of a Shift_JIS byte string, yielding the byte
/// offset of each unit.
#[derive(Debug, Clone)]
pub struct CodeUnits<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CodeUnits<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for CodeUnits<'_> {
    type Item = (usize, CodeUnit);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.pos;
        let lead = *self.bytes.get(offset)?;
        let class = CharClass::of(lead);
        // a lead byte without trail byte falls back to half-width
        let unit = match (class, self.bytes.get(offset + 1)) {
            (CharClass::FullWidth1, Some(&trail)) => CodeUnit::FullWidth1 { lead, trail },
            (CharClass::FullWidth2, Some(&trail)) => CodeUnit::FullWidth2 { lead, trail },
            _ => CodeUnit::HalfWidth(lead),
        };
        self.pos += unit.byte_len();
        Some((offset, unit))
    }
}

/// Shift_JIS form of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedLine {
    bytes: Vec<u8>,
    substitutions: usize,
}

impl EncodedLine {
    /// Encode `text`. Characters that Shift_JIS can't represent, or that encode
    /// to a lead byte outside the supported ranges, become [`FALLBACK_BYTE`].
    pub fn new(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len());
        let mut substitutions = 0;
        for ch in text.chars() {
            if encode_char(ch, &mut bytes) {
                continue;
            }
            log::debug!("no glyph for {ch:?} (U+{:04X}), using fallback", ch as u32);
            bytes.push(FALLBACK_BYTE);
            substitutions += 1;
        }
        Self { bytes, substitutions }
    }

    /// Wrap bytes that are already Shift_JIS.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            substitutions: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of characters replaced by [`FALLBACK_BYTE`].
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    pub fn units(&self) -> CodeUnits<'_> {
        CodeUnits::new(&self.bytes)
    }

    /// Width of the line in grid columns.
    pub fn grid_columns(&self) -> usize {
        self.units().map(|(_, unit)| unit.columns()).sum()
    }

    /// Width of the line in logical pixels.
    pub fn grid_width(&self) -> usize {
        self.grid_columns() * GRID_COLUMN_PIXELS
    }
}

/// Append the Shift_JIS bytes of `ch`, returns `false` if there is no usable form.
fn encode_char(ch: char, out: &mut Vec<u8>) -> bool {
    let mut utf8 = [0u8; 4];
    let (encoded, _, unmappable) = SHIFT_JIS.encode(ch.encode_utf8(&mut utf8));
    if unmappable {
        return false;
    }
    match &*encoded {
        [byte] if !CharClass::of(*byte).is_full_width() => out.push(*byte),
        [lead, trail] if CharClass::of(*lead).is_full_width() => out.extend_from_slice(&[*lead, *trail]),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ranges() {
        assert_eq!(CharClass::of(0x80), CharClass::HalfWidth);
        assert_eq!(CharClass::of(0x81), CharClass::FullWidth1);
        assert_eq!(CharClass::of(0x9F), CharClass::FullWidth1);
        assert_eq!(CharClass::of(0xA0), CharClass::HalfWidth);
        assert_eq!(CharClass::of(0xDF), CharClass::HalfWidth);
        assert_eq!(CharClass::of(0xE0), CharClass::FullWidth2);
        assert_eq!(CharClass::of(0xEF), CharClass::FullWidth2);
        assert_eq!(CharClass::of(0xF0), CharClass::HalfWidth);
    }

    #[test]
    fn test_trail_byte_is_not_a_lead() {
        // 0x82 0x81 is one unit even though 0x81 is a lead byte
        let units: Vec<_> = CodeUnits::new(&[0x82, 0x81, b'A']).collect();
        assert_eq!(
            units,
            vec![(0, CodeUnit::FullWidth1 { lead: 0x82, trail: 0x81 }), (2, CodeUnit::HalfWidth(b'A'))]
        );
    }

    #[test]
    fn test_dangling_lead_byte() {
        let units: Vec<_> = CodeUnits::new(&[b'A', 0xE0]).collect();
        assert_eq!(units, vec![(0, CodeUnit::HalfWidth(b'A')), (1, CodeUnit::HalfWidth(0xE0))]);
        assert_eq!(EncodedLine::from_bytes(vec![b'A', 0xE0]).grid_columns(), 2);
    }

    #[test]
    fn test_encode_kana() {
        // あ = 0x82A0, 漢 = 0x8ABF, 煕 = 0xE086
        let line = EncodedLine::new("あ漢煕");
        assert_eq!(line.as_bytes(), &[0x82, 0xA0, 0x8A, 0xBF, 0xE0, 0x86]);
        assert_eq!(line.substitutions(), 0);
        let classes: Vec<_> = line.units().map(|(_, u)| u.class()).collect();
        assert_eq!(classes, vec![CharClass::FullWidth1, CharClass::FullWidth1, CharClass::FullWidth2]);
    }

    #[test]
    fn test_encode_half_width_katakana() {
        let line = EncodedLine::new("ｱ");
        assert_eq!(line.as_bytes(), &[0xB1]);
        assert_eq!(line.grid_columns(), 1);
    }

    #[test]
    fn test_unsupported_character_uses_fallback() {
        let line = EncodedLine::new("a😀b");
        assert_eq!(line.as_bytes(), &[b'a', FALLBACK_BYTE, b'b']);
        assert_eq!(line.substitutions(), 1);
    }

    #[test]
    fn test_lead_byte_outside_supported_ranges_uses_fallback() {
        // small roman numeral one encodes to 0xFA40
        let line = EncodedLine::new("ⅰ");
        assert_eq!(line.as_bytes(), &[FALLBACK_BYTE]);
        assert_eq!(line.substitutions(), 1);
    }

    #[test]
    fn test_grid_width() {
        assert_eq!(EncodedLine::new("").grid_width(), 0);
        assert_eq!(EncodedLine::new("abc").grid_width(), 12);
        assert_eq!(EncodedLine::new("日本").grid_width(), 16);
        assert_eq!(EncodedLine::new("a日").grid_columns(), 3);
    }
}
