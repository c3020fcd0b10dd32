use crate::{EncodedLine, FULL_WIDTH_SIZE};

/// Pixel height of one banner line.
pub const LINE_HEIGHT: usize = FULL_WIDTH_SIZE.1 as usize;

/// The encoded lines to display, one per input argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Banner {
    lines: Vec<EncodedLine>,
}

impl Banner {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines: Vec<_> = lines.iter().map(|line| EncodedLine::new(line.as_ref())).collect();
        let substitutions: usize = lines.iter().map(EncodedLine::substitutions).sum();
        if substitutions > 0 {
            log::info!("{substitutions} unsupported character(s) replaced by the fallback glyph");
        }
        Self { lines }
    }

    pub fn from_lines(lines: Vec<EncodedLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[EncodedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width of each line in logical pixels.
    pub fn grid_widths(&self) -> Vec<usize> {
        self.lines.iter().map(EncodedLine::grid_width).collect()
    }

    /// Width of the widest line in logical pixels.
    pub fn grid_width(&self) -> usize {
        self.lines.iter().map(EncodedLine::grid_width).max().unwrap_or(0)
    }

    /// Height of the whole banner in logical pixels.
    pub fn grid_height(&self) -> usize {
        LINE_HEIGHT * self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_dimensions() {
        let banner = Banner::new(&["ab", "日本語"]);
        assert_eq!(banner.len(), 2);
        assert_eq!(banner.grid_widths(), vec![8, 24]);
        assert_eq!(banner.grid_width(), 24);
        assert_eq!(banner.grid_height(), 16);
    }

    #[test]
    fn test_empty_banner() {
        let banner = Banner::new::<&str>(&[]);
        assert!(banner.is_empty());
        assert_eq!(banner.grid_width(), 0);
        assert_eq!(banner.grid_height(), 0);
    }

    #[test]
    fn test_banner_from_encoded_lines() {
        let banner = Banner::from_lines(vec![EncodedLine::from_bytes(vec![0x8A, 0xBF]), EncodedLine::default()]);
        assert_eq!(banner.grid_widths(), vec![8, 0]);
        assert_eq!(banner.grid_height(), 16);
    }
}
