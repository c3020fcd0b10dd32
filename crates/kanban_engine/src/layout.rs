use crate::{Banner, EngineError, Position, Result, Size, LINE_HEIGHT};

/// Upper bound of the width derived scale relative to the height derived one.
pub const MAX_SCALE_RATIO: i32 = 8;

/// Placement of a banner on a surface. All offsets are in logical pixels,
/// one logical pixel covers `scale x scale` surface cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub scale: i32,
    pub x_offsets: Vec<i32>,
    pub y_offset: i32,
}

impl Layout {
    /// Fit `banner` into a surface of `surface` cells and center it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyBanner`] if the banner has no visible column
    /// and [`EngineError::EmptySurface`] if the surface has no cells.
    pub fn compute(surface: Size, banner: &Banner) -> Result<Self> {
        if surface.is_empty() {
            return Err(EngineError::EmptySurface {
                width: surface.width,
                height: surface.height,
            });
        }
        let grid_width = banner.grid_width() as i32;
        let grid_height = banner.grid_height() as i32;
        if grid_width == 0 || grid_height == 0 {
            return Err(EngineError::EmptyBanner);
        }

        let width_scale = surface.width / grid_width;
        let height_scale = surface.height / grid_height;
        // the 8x ratio clamp never binds once both axes share the smaller scale
        let scale = width_scale.min(height_scale * MAX_SCALE_RATIO).min(height_scale);
        if scale < 1 {
            log::debug!("surface {surface} is smaller than the banner ({grid_width}x{grid_height}), clipping");
        }
        let scale = scale.max(1);

        let columns = surface.width / scale;
        let rows = surface.height / scale;
        let x_offsets = banner.grid_widths().into_iter().map(|w| (columns - w as i32) / 2).collect();
        let y_offset = (rows - grid_height) / 2;

        log::trace!("layout for {surface}: scale {scale}, y offset {y_offset}");
        Ok(Self { scale, x_offsets, y_offset })
    }

    /// Logical pixel position of the top left corner of line `line`.
    pub fn line_origin(&self, line: usize) -> Position {
        Position::new(self.x_offsets[line], self.y_offset + (line * LINE_HEIGHT) as i32)
    }
}
