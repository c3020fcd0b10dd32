#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
//! Core of the kanban banner renderer.
//!
//! Font sheets are decoded into [`GlyphTable`]s, text is encoded to Shift_JIS and
//! split into [`CodeUnit`]s, the [`Layout`] engine scales the banner to the
//! surface and the paint driver pushes filled cells to a [`DisplaySurface`].

mod error;
pub use error::*;

mod position;
pub use position::*;

mod glyph;
pub use glyph::*;

pub mod assets;
pub use assets::{AssetSource, DirectoryAssets, MemoryAssets};

mod fonts;
pub use fonts::*;

mod encoding;
pub use encoding::*;

mod banner;
pub use banner::*;

mod layout;
pub use layout::*;

mod surface;
pub use surface::*;

pub mod paint;
pub use paint::{paint_banner, paint_glyph};
