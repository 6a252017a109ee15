//! Shared color palette.
//!
//! The palette is owned by the site's stylesheet tooling; this crate only
//! reads it. The file is a flat TOML table of color tokens:
//!
//! ```toml
//! background = "#1D1E20"
//! accent = "#FF5700"
//! ```

use crate::config::ConfigError;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    path: PathBuf,
    colors: FxHashMap<String, String>,
}

impl Palette {
    /// Read the palette file at an already resolved path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content, path)
    }

    /// Parse palette content; `path` is only kept for error messages.
    pub fn from_str(content: &str, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let colors = toml::from_str(content)
            .map_err(|err| ConfigError::PaletteParse(path.clone(), err))?;
        Ok(Self { path, colors })
    }

    #[inline]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}
