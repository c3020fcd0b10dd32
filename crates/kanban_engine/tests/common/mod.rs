#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use kanban_engine::{FontVariant, MemoryAssets};

pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub const HALF_WIDTH_SHEET_SIZE: (u32, u32) = (64, 128);
pub const FULL_WIDTH_SHEET_SIZE: (u32, u32) = (752, 752);

pub fn blank_sheet((width, height): (u32, u32)) -> RgbaImage {
    RgbaImage::from_pixel(width, height, PAPER)
}

pub fn inked_sheet((width, height): (u32, u32)) -> RgbaImage {
    RgbaImage::from_pixel(width, height, INK)
}

pub fn encode_png(sheet: &RgbaImage) -> Vec<u8> {
    let mut data = Vec::new();
    sheet.write_to(&mut Cursor::new(&mut data), ImageFormat::Png).unwrap();
    data
}

/// Half-width sheet where every glyph but the space has its top left pixel set.
pub fn dotted_half_width_sheet() -> RgbaImage {
    let mut sheet = blank_sheet(HALF_WIDTH_SHEET_SIZE);
    for byte in 0..=255u32 {
        if byte == u32::from(b' ') {
            continue;
        }
        sheet.put_pixel((byte % 16) * 4, (byte / 16) * 8, INK);
    }
    sheet
}

pub fn assets_for(variant: FontVariant, half: &RgbaImage, full: &RgbaImage) -> MemoryAssets {
    MemoryAssets::new()
        .with(variant.half_width_sheet(), encode_png(half))
        .with(variant.full_width_sheet(), encode_png(full))
}
