//! `[palette]` configuration: where the shared color tokens live.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shared color palette, referenced by `{ palette = "token" }` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "palette")]
pub struct PaletteSectionConfig {
    /// Palette file, relative to this config file. `~` is the home directory.
    #[config(default = "colors.toml")]
    pub path: PathBuf,
}

impl Default for PaletteSectionConfig {
    fn default() -> Self {
        Self {
            path: "colors.toml".into(),
        }
    }
}
