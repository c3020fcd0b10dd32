//! Bit-packed glyph representation.
//!
//! A glyph stores its pixels in a single `u64`, row-major: pixel `(x, y)` lives
//! at bit `y * width + x`. All bit index arithmetic goes through
//! [`Glyph::bit_index`], the table builder and the paint driver only talk in
//! coordinates.

/// Maximum number of pixels a glyph can hold.
pub const MAX_GLYPH_PIXELS: usize = 64;

/// Half-width glyph cell (4x8 pixels, 32 bits used).
pub const HALF_WIDTH_SIZE: (u8, u8) = (4, 8);

/// Full-width glyph cell (8x8 pixels, 64 bits used).
pub const FULL_WIDTH_SIZE: (u8, u8) = (8, 8);

/// A monochrome bitmap glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    bits: u64,
    width: u8,
    height: u8,
}

impl Glyph {
    /// An empty 4x8 glyph.
    pub const EMPTY_HALF_WIDTH: Self = Self::new(HALF_WIDTH_SIZE.0, HALF_WIDTH_SIZE.1);

    /// An empty 8x8 glyph.
    pub const EMPTY_FULL_WIDTH: Self = Self::new(FULL_WIDTH_SIZE.0, FULL_WIDTH_SIZE.1);

    /// Create a new glyph with the given dimensions.
    /// All pixels are initially off.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` exceeds [`MAX_GLYPH_PIXELS`].
    pub const fn new(width: u8, height: u8) -> Self {
        assert!((width as usize) * (height as usize) <= MAX_GLYPH_PIXELS, "glyph too large");
        Self { bits: 0, width, height }
    }

    /// Create a glyph from raw bits. Bits beyond `width * height` are dropped.
    pub fn from_bits(width: u8, height: u8, bits: u64) -> Self {
        let mut glyph = Self::new(width, height);
        glyph.bits = bits & glyph.mask();
        glyph
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Bit index of pixel `(x, y)`, `None` when outside the glyph.
    #[inline]
    pub fn bit_index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        Some(y * self.width as usize + x)
    }

    /// Pixel coordinates of a bit index. Inverse of [`Glyph::bit_index`].
    #[inline]
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.width as usize, index / self.width as usize)
    }

    /// Get a pixel value at the given position.
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        match self.bit_index(x, y) {
            Some(i) => self.bits & (1u64 << i) != 0,
            None => false,
        }
    }

    /// Set a pixel value at the given position.
    ///
    /// Does nothing if coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        let Some(i) = self.bit_index(x, y) else {
            return;
        };
        if value {
            self.bits |= 1u64 << i;
        } else {
            self.bits &= !(1u64 << i);
        }
    }

    /// Check if the glyph is empty (all pixels off).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of set pixels.
    pub fn ink_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterate the coordinates of all set pixels in bit order.
    pub fn ink(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let pixels = self.width as usize * self.height as usize;
        (0..pixels).filter(|&i| self.bits & (1u64 << i) != 0).map(|i| self.coordinates(i))
    }

    fn mask(&self) -> u64 {
        let pixels = self.width as u32 * self.height as u32;
        if pixels >= 64 {
            u64::MAX
        } else {
            (1u64 << pixels) - 1
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        for y in 0..self.height as usize {
            s.push_str(&format!("{y:2}"));
            for x in 0..self.width as usize {
                s.push(if self.get_pixel(x, y) { '#' } else { '-' });
            }
            s.push('\n');
        }
        write!(f, "{s}---")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_glyph() {
        let glyph = Glyph::new(4, 8);
        assert_eq!(glyph.width(), 4);
        assert_eq!(glyph.height(), 8);
        assert!(glyph.is_empty());
    }

    #[test]
    fn test_bit_index_roundtrip() {
        let glyph = Glyph::EMPTY_HALF_WIDTH;
        assert_eq!(glyph.bit_index(0, 0), Some(0));
        assert_eq!(glyph.bit_index(3, 0), Some(3));
        assert_eq!(glyph.bit_index(0, 1), Some(4));
        assert_eq!(glyph.bit_index(3, 7), Some(31));
        assert_eq!(glyph.bit_index(4, 0), None);
        assert_eq!(glyph.bit_index(0, 8), None);
        for i in 0..32 {
            let (x, y) = glyph.coordinates(i);
            assert_eq!(glyph.bit_index(x, y), Some(i));
        }
    }

    #[test]
    fn test_get_set_pixel() {
        let mut glyph = Glyph::EMPTY_FULL_WIDTH;

        glyph.set_pixel(0, 0, true);
        assert!(glyph.get_pixel(0, 0));
        assert_eq!(glyph.bits(), 0x01);

        glyph.set_pixel(7, 7, true);
        assert!(glyph.get_pixel(7, 7));
        assert_eq!(glyph.bits(), 0x8000_0000_0000_0001);

        glyph.set_pixel(0, 0, false);
        assert!(!glyph.get_pixel(0, 0));
        assert_eq!(glyph.bits(), 0x8000_0000_0000_0000);

        // out of bounds writes are ignored
        glyph.set_pixel(8, 0, true);
        assert_eq!(glyph.ink_count(), 1);
    }

    #[test]
    fn test_from_bits_masks_unused_bits() {
        let glyph = Glyph::from_bits(4, 8, u64::MAX);
        assert_eq!(glyph.bits(), 0xFFFF_FFFF);
        assert_eq!(glyph.ink_count(), 32);
    }

    #[test]
    fn test_ink_iterates_set_pixels() {
        let mut glyph = Glyph::EMPTY_HALF_WIDTH;
        glyph.set_pixel(1, 0, true);
        glyph.set_pixel(2, 5, true);
        let ink: Vec<_> = glyph.ink().collect();
        assert_eq!(ink, vec![(1, 0), (2, 5)]);
    }

    #[test]
    fn test_display() {
        let mut glyph = Glyph::new(2, 2);
        glyph.set_pixel(1, 1, true);
        assert_eq!(glyph.to_string(), " 0--\n 1-#\n---");
    }
}
