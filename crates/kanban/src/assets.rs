//! Font sheets compiled into the binary.

use kanban_engine::{AssetSource, EngineError, Result};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"] // the Misaki PNG sheets, see assets/README.md
struct FontSheets;

/// [`AssetSource`] backed by the sheets bundled with the program.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    /// Names of all bundled files.
    pub fn names() -> impl Iterator<Item = String> {
        FontSheets::iter().map(|name| name.into_owned())
    }
}

impl AssetSource for EmbeddedAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        log::debug!("loading bundled font asset {name}");
        FontSheets::get(name)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| EngineError::AssetNotFound { name: name.to_string() })
    }
}
