//! Font sheet access.
//!
//! The glyph table builder never touches the filesystem directly, it asks an
//! [`AssetSource`] for the bytes of a logical asset name.

use std::{collections::HashMap, path::PathBuf};

use crate::{EngineError, Result};

/// Provides font sheet bytes by logical name (e.g. `misaki_gothic_2nd.png`).
pub trait AssetSource {
    /// Load the asset `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AssetNotFound`] if there is no such asset, or a
    /// read error if it exists but could not be loaded.
    fn load(&self, name: &str) -> Result<Vec<u8>>;
}

/// Assets stored as files inside a directory.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirectoryAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        log::debug!("loading font asset {}", path.display());
        match std::fs::read(&path) {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(EngineError::AssetNotFound {
                name: path.display().to_string(),
            }),
            Err(err) => Err(EngineError::read_asset(path.display().to_string(), err)),
        }
    }
}

/// Assets held in memory, keyed by logical name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), data.into());
    }

    pub fn with(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }
}

impl AssetSource for MemoryAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        self.files.get(name).cloned().ok_or_else(|| EngineError::AssetNotFound { name: name.to_string() })
    }
}
