//! `[manifest]` configuration for the web app manifest.
//!
//! # Example
//!
//! ```toml
//! [manifest]
//! name = "Alice's Blog"
//! short_name = "AliceBlog"  # max 12 characters
//! start_url = "/"
//! background_color = { palette = "background" }
//! theme_color = "#1D1E20"
//! display = "standalone"
//! ```

use crate::config::util::is_css_color;
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::palette::Palette;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Launchers truncate longer short names.
pub const SHORT_NAME_MAX_CHARS: usize = 12;

/// Web app manifest fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "manifest")]
pub struct ManifestConfig {
    /// Application name.
    pub name: String,

    /// Name shown under the home screen icon.
    #[config(inline_doc = "max 12 characters")]
    pub short_name: String,

    /// Path opened when the app is launched.
    #[config(default = "/")]
    pub start_url: String,

    /// Splash screen background: a color or `{ palette = "token" }`.
    pub background_color: ColorRef,

    /// Browser UI color: a color or `{ palette = "token" }`.
    pub theme_color: ColorRef,

    /// Display mode: standalone | fullscreen | minimal-ui | browser.
    #[config(default = "standalone")]
    pub display: DisplayMode,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            short_name: String::new(),
            start_url: "/".into(),
            background_color: ColorRef::palette("background"),
            theme_color: ColorRef::palette("background"),
            display: DisplayMode::Standalone,
        }
    }
}

impl ManifestConfig {
    /// Whether any color still points at the palette.
    pub fn needs_palette(&self) -> bool {
        self.background_color.token().is_some() || self.theme_color.token().is_some()
    }

    /// Replace palette references with the palette's values.
    pub fn resolve_colors(&mut self, palette: &Palette) -> Result<(), ConfigError> {
        self.background_color
            .resolve(palette, &Self::FIELDS.background_color)?;
        self.theme_color.resolve(palette, &Self::FIELDS.theme_color)?;
        Ok(())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "must not be empty");
        }

        let short_len = self.short_name.chars().count();
        if short_len == 0 {
            diag.error(Self::FIELDS.short_name, "must not be empty");
        } else if short_len > SHORT_NAME_MAX_CHARS {
            diag.error_with_hint(
                Self::FIELDS.short_name,
                format!(
                    "'{}' is {short_len} characters, at most {SHORT_NAME_MAX_CHARS} allowed",
                    self.short_name
                ),
                "launchers truncate longer names",
            );
        }

        if !self.start_url.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.start_url,
                format!("'{}' must be a site path", self.start_url),
                "use format like \"/\"",
            );
        }

        Self::validate_color(&self.background_color, Self::FIELDS.background_color, diag);
        Self::validate_color(&self.theme_color, Self::FIELDS.theme_color, diag);
    }

    fn validate_color(color: &ColorRef, field: FieldPath, diag: &mut ConfigDiagnostics) {
        match color {
            ColorRef::Palette { palette } => diag.error(
                field,
                format!("palette token '{palette}' was not resolved"),
            ),
            ColorRef::Literal(value) if !is_css_color(value) => {
                let is_word = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
                let hint = if is_word {
                    format!("to use a palette color, write {{ palette = \"{value}\" }}")
                } else {
                    "use format like \"#1D1E20\"".to_string()
                };
                diag.error_with_hint(field, format!("'{value}' is not a CSS color"), hint);
            }
            ColorRef::Literal(_) => {}
        }
    }
}

// ============================================================================
// ColorRef
// ============================================================================

/// A manifest color: literal, or a reference into the shared palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    /// `{ palette = "background" }`
    Palette { palette: String },
    /// `"#1D1E20"`
    Literal(String),
}

impl ColorRef {
    /// Reference to a palette token.
    pub fn palette(token: &str) -> Self {
        Self::Palette {
            palette: token.to_string(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Palette { palette } => Some(palette),
            Self::Literal(_) => None,
        }
    }

    /// The color value, once resolved.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Palette { .. } => None,
        }
    }

    /// Replace a palette reference by its value; literals are left alone.
    pub fn resolve(&mut self, palette: &Palette, field: &FieldPath) -> Result<(), ConfigError> {
        if let Self::Palette { palette: token } = self {
            let value = palette
                .get(token)
                .ok_or_else(|| ConfigError::UnknownToken {
                    field: field.as_str().to_string(),
                    token: token.clone(),
                    path: palette.path().to_path_buf(),
                })?;
            *self = Self::Literal(value.to_string());
        }
        Ok(())
    }
}

// ============================================================================
// DisplayMode
// ============================================================================

/// Manifest `display` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Standalone,
    Fullscreen,
    MinimalUi,
    Browser,
}

impl DisplayMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::Fullscreen => "fullscreen",
            Self::MinimalUi => "minimal-ui",
            Self::Browser => "browser",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
