//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── author     # [author] and [[author.social]]
//! │   ├── contact    # [contact]
//! │   ├── info       # [info]
//! │   ├── manifest   # [manifest], ColorRef, DisplayMode
//! │   ├── palette    # [palette]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Process-wide loaded config
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! `site.toml` is parsed, palette tokens in `[manifest]` are replaced by the
//! palette's values, then every section is validated. Any failure is fatal:
//! a half-valid record is never handed out.

pub mod section;
pub mod types;
mod util;

pub use section::{
    AuthorConfig, ColorRef, ContactConfig, DisplayMode, InfoConfig, ManifestConfig,
    PaletteSectionConfig, SiteInfoConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, load_once};
pub use util::find_config_file;

use crate::{log, palette::Palette};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default config filename.
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// root configuration
// ============================================================================

/// The site configuration record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Title, description, canonical URL, language
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Author name, twitter account, social links
    #[serde(default)]
    pub author: AuthorConfig,

    /// Info box heading
    #[serde(default)]
    pub info: InfoConfig,

    /// Web app manifest
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Contact details
    #[serde(default)]
    pub contact: ContactConfig,

    /// Shared color palette location
    #[serde(default)]
    pub palette: PaletteSectionConfig,
}

/// Parse configuration from a TOML string, without loading the palette.
impl FromStr for SiteConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

impl SiteConfig {
    /// Load, resolve and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;

        config.config_path = path.to_path_buf();
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.set_root(&root);

        config.resolve_palette()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Replace palette references in `[manifest]` with palette values.
    ///
    /// The palette file is only read when something references it.
    pub fn resolve_palette(&mut self) -> Result<()> {
        if !self.manifest.needs_palette() {
            return Ok(());
        }

        let path = self.palette_path();
        let palette = Palette::load(&path)
            .with_context(|| format!("Failed to load color palette `{}`", path.display()))?;
        crate::debug!("palette"; "{} tokens from {}", palette.len(), path.display());

        self.manifest.resolve_colors(&palette)?;
        Ok(())
    }

    /// Palette file location: `~` expanded, relative paths taken from the config root.
    pub fn palette_path(&self) -> PathBuf {
        util::resolve_path(&self.palette.path, &self.root)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // derived values
    // ========================================================================

    /// Absolute URL for a site path: `site.url` + `site.path_prefix` + `path`.
    ///
    /// # Example
    /// ```ignore
    /// // url = "https://example.com", path_prefix = "/blog"
    /// config.absolute_url("posts/hello/") // "https://example.com/blog/posts/hello/"
    /// config.absolute_url("")             // "https://example.com/blog/"
    /// ```
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.site.url.trim_end_matches('/'),
            self.site.path_prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Absolute URL of the preview image, if one is set.
    pub fn image_url(&self) -> Option<String> {
        (!self.site.image.is_empty()).then(|| self.absolute_url(&self.site.image))
    }

    /// `<title>` text: the full title on the home page, otherwise
    /// `"{page} - {short_title}"`.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.is_empty() => format!("{page} - {}", self.site.short_title),
            _ => self.site.title.clone(),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section's checks without failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.author.validate(&mut diag);
        self.info.validate(&mut diag);
        self.manifest.validate(&mut diag);
        self.contact.validate(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Complete config that passes validation once `background` is in the palette.
#[cfg(test)]
pub const MINIMAL_VALID_CONFIG: &str = r#"
[site]
title = "Test Site"
short_title = "Test"
description = "A test site"
url = "https://example.com"
image = "preview.jpg"

[author]
name = "Tester"

[manifest]
name = "Test Site"
short_name = "Test"
"#;

/// Parse config with a valid `[site]` section prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test Site\"\nshort_title = \"Test\"\ndescription = \"Test\"\nurl = \"https://example.com\"\nimage = \"preview.jpg\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The shipped blog configuration under `demos/blog`.
#[cfg(test)]
pub fn demo_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/blog/site.toml")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use section::SocialLink;
    use tempfile::TempDir;

    fn write_site(dir: &Path, config: &str, colors: Option<&str>) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, config).unwrap();
        if let Some(colors) = colors {
            fs::write(dir.join("colors.toml"), colors).unwrap();
        }
        path
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = "[site\ntitle = \"My Blog\"".parse::<SiteConfig>();
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.manifest.start_url, "/");
        assert_eq!(config.palette.path, PathBuf::from("colors.toml"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(MINIMAL_VALID_CONFIG).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_resolves_palette() {
        let temp = TempDir::new().unwrap();
        let path = write_site(
            temp.path(),
            MINIMAL_VALID_CONFIG,
            Some("background = \"#1D1E20\""),
        );

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.get_root(), temp.path());
        assert_eq!(config.manifest.background_color.as_color(), Some("#1D1E20"));
        assert_eq!(config.manifest.theme_color.as_color(), Some("#1D1E20"));
    }

    #[test]
    fn test_load_missing_palette_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = write_site(temp.path(), MINIMAL_VALID_CONFIG, None);

        let err = SiteConfig::load(&path).unwrap_err();
        let root = err.root_cause().downcast_ref::<std::io::Error>();
        assert!(root.is_some(), "unexpected error: {err:?}");
        assert!(format!("{err:#}").contains("colors.toml"));
    }

    #[test]
    fn test_load_unknown_token_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = write_site(
            temp.path(),
            MINIMAL_VALID_CONFIG,
            Some("foreground = \"#FFFFFF\""),
        );

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownToken { .. })
        ));
    }

    #[test]
    fn test_literal_colors_skip_palette() {
        let temp = TempDir::new().unwrap();
        let config = format!(
            "{MINIMAL_VALID_CONFIG}background_color = \"#000000\"\ntheme_color = \"#ffffff\"\n"
        );
        // No colors.toml on disk
        let path = write_site(temp.path(), &config, None);

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.manifest.background_color.as_color(), Some("#000000"));
        assert_eq!(config.manifest.theme_color.as_color(), Some("#ffffff"));
    }

    #[test]
    fn test_custom_palette_path() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("styles")).unwrap();
        fs::write(
            temp.path().join("styles/palette.toml"),
            "background = \"#123456\"",
        )
        .unwrap();
        let config = format!("{MINIMAL_VALID_CONFIG}\n[palette]\npath = \"styles/palette.toml\"\n");
        let path = write_site(temp.path(), &config, None);

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.manifest.theme_color.as_color(), Some("#123456"));
    }

    #[test]
    fn test_palette_path_expands_home() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/srv/blog"));
        assert_eq!(config.palette_path(), PathBuf::from("/srv/blog/colors.toml"));

        config.palette.path = "~/.config/colors.toml".into();
        let path = config.palette_path();
        assert!(!path.starts_with("/srv/blog"));
        assert!(path.ends_with(".config/colors.toml"));
        assert!(!path.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_validation_lists_every_bad_field() {
        let temp = TempDir::new().unwrap();
        let config = MINIMAL_VALID_CONFIG
            .replace("https://example.com", "example.com")
            .replace("short_name = \"Test\"", "short_name = \"Far Too Long Name\"")
            + "\n[contact]\nemail = \"nobody\"\n";
        let path = write_site(temp.path(), &config, Some("background = \"#1D1E20\""));

        let err = SiteConfig::load(&path).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert!(diag.has_error_for("site.url"));
        assert!(diag.has_error_for("manifest.short_name"));
        assert!(diag.has_error_for("contact.email"));
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_load_is_deterministic() {
        let first = SiteConfig::load(&demo_config_path()).unwrap();
        let second = SiteConfig::load(&demo_config_path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_demo_config() {
        let config = SiteConfig::load(&demo_config_path()).unwrap();

        assert_eq!(config.site.url, "https://blog.benjamin.piouffle.com");
        assert!(config.site.path_prefix.is_empty());
        assert_eq!(config.site.language, "en");
        assert_eq!(config.manifest.short_name, "PersonalBlog");
        assert!(config.manifest.short_name.chars().count() <= section::SHORT_NAME_MAX_CHARS);
        assert_eq!(config.manifest.display, DisplayMode::Standalone);
        assert_eq!(config.contact.email, "benjamin.piouffle@protonmail.ch");

        // Both colors come from the same palette token
        assert_eq!(config.manifest.background_color.as_color(), Some("#1D1E20"));
        assert_eq!(config.manifest.background_color, config.manifest.theme_color);

        assert_eq!(
            config.author.social,
            vec![
                SocialLink::new("github", "https://github.com/Betree"),
                SocialLink::new("twitter", "https://twitter.com/Betree83"),
            ]
        );
    }

    #[test]
    fn test_absolute_url() {
        let mut config = test_parse_config("");
        assert_eq!(config.absolute_url(""), "https://example.com/");
        assert_eq!(config.absolute_url("/posts/a/"), "https://example.com/posts/a/");

        config.site.path_prefix = "/blog".into();
        assert_eq!(config.absolute_url("preview.jpg"), "https://example.com/blog/preview.jpg");
        assert_eq!(config.image_url().as_deref(), Some("https://example.com/blog/preview.jpg"));

        config.site.image.clear();
        assert!(config.image_url().is_none());
    }

    #[test]
    fn test_page_title() {
        let config = test_parse_config("");
        assert_eq!(config.page_title(None), "Test Site");
        assert_eq!(config.page_title(Some("")), "Test Site");
        assert_eq!(config.page_title(Some("Hello")), "Hello - Test");
    }
}
