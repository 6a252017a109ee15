//! Web app manifest generation.
//!
//! # Format
//!
//! ```json
//! {
//!   "name": "Alice's Blog",
//!   "short_name": "AliceBlog",
//!   "start_url": "/",
//!   "background_color": "#1D1E20",
//!   "theme_color": "#1D1E20",
//!   "display": "standalone",
//!   "lang": "en",
//!   "description": "..."
//! }
//! ```

use crate::{
    config::{ColorRef, ConfigError, DisplayMode, SiteConfig},
    log,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json` contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: DisplayMode,
    pub lang: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl WebManifest {
    /// Build from a loaded config.
    ///
    /// `start_url` is served under `site.path_prefix`. Fails if a color is
    /// still a palette reference, i.e. the config was not loaded via
    /// [`SiteConfig::load`].
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let manifest = &config.manifest;
        let start_url = format!(
            "{}/{}",
            config.site.path_prefix.trim_end_matches('/'),
            manifest.start_url.trim_start_matches('/')
        );

        Ok(Self {
            name: manifest.name.clone(),
            short_name: manifest.short_name.clone(),
            start_url,
            background_color: resolved(&manifest.background_color, "background_color")?,
            theme_color: resolved(&manifest.theme_color, "theme_color")?,
            display: manifest.display,
            lang: config.site.language.clone(),
            description: config.site.description.clone(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize web manifest")
    }
}

fn resolved(color: &ColorRef, field: &str) -> Result<String> {
    match color.as_color() {
        Some(value) => Ok(value.to_string()),
        None => Err(ConfigError::Validation(format!(
            "manifest.{field} still references palette token `{}`",
            color.token().unwrap_or_default()
        ))
        .into()),
    }
}

/// Write `manifest.json` into `out_dir`, creating the directory if needed.
pub fn write_manifest(config: &SiteConfig, out_dir: &Path) -> Result<PathBuf> {
    let json = WebManifest::from_config(config)?.to_json()?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let path = out_dir.join(MANIFEST_FILE);
    fs::write(&path, json + "\n")
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

    log!("manifest"; "{}", path.display());
    Ok(path)
}
