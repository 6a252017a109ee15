//! `[site]` configuration.
//!
//! Basic site information used for `<title>`, meta tags and canonical URLs.

use crate::config::ConfigDiagnostics;
use crate::config::util::{extract_url_path, is_language_tag};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest description search engines show without truncation.
const DESCRIPTION_SOFT_LIMIT: usize = 160;

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Full site title, used as `<title>` on the home page.
    pub title: String,

    /// `<title>` ending for posts and pages.
    pub short_title: String,

    /// Site description.
    pub description: String,

    /// Canonical site URL, absolute, without trailing slash.
    #[config(inline_doc = "e.g. \"https://example.com\"")]
    pub url: String,

    /// Prefix for every site path when not served from the domain root.
    #[config(inline_doc = "\"\" or e.g. \"/blog\"")]
    pub path_prefix: String,

    /// Preview image, relative to the site root.
    #[config(inline_doc = "e.g. \"preview.jpg\"")]
    pub image: String,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(default = "en")]
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            short_title: String::new(),
            description: String::new(),
            url: String::new(),
            path_prefix: String::new(),
            image: String::new(),
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title`, `short_title`, `description`, `url` must be set
    /// - `url` must be http(s) with a host and no trailing slash
    /// - `path_prefix` is empty or `/segment` without trailing slash
    /// - `image` is a relative path
    /// - `language` looks like a BCP 47 tag
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (value, field) in [
            (&self.title, Self::FIELDS.title),
            (&self.short_title, Self::FIELDS.short_title),
            (&self.description, Self::FIELDS.description),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        if self.description.chars().count() > DESCRIPTION_SOFT_LIMIT {
            diag.warn(
                Self::FIELDS.description,
                format!("longer than {DESCRIPTION_SOFT_LIMIT} characters, search engines will truncate it"),
            );
        }

        self.validate_url(diag);
        self.validate_path_prefix(diag);

        if !self.image.is_empty() {
            let is_url = url::Url::parse(&self.image).is_ok();
            if is_url || Path::new(&self.image).is_absolute() {
                diag.error_with_hint(
                    Self::FIELDS.image,
                    format!("'{}' must be a path relative to the site root", self.image),
                    "use format like \"preview.jpg\"",
                );
            }
        } else {
            diag.warn(Self::FIELDS.image, "not set, og:image will be omitted");
        }

        if !is_language_tag(&self.language) {
            diag.error_with_hint(
                Self::FIELDS.language,
                format!("'{}' is not a language code", self.language),
                "use format like \"en\" or \"pt-BR\"",
            );
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "must not be empty",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if let Some(path) = extract_url_path(&self.url)
                    && !path.is_empty()
                {
                    diag.warn(
                        Self::FIELDS.url,
                        format!("has path '/{path}', set it as path_prefix instead"),
                    );
                }
                if self.url.ends_with('/') {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must not end with '/'",
                        format!("use \"{}\"", self.url.trim_end_matches('/')),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }

    fn validate_path_prefix(&self, diag: &mut ConfigDiagnostics) {
        let prefix = &self.path_prefix;
        if prefix.is_empty() {
            return;
        }
        if !prefix.starts_with('/') || prefix.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!("'{prefix}' must start with '/' and not end with '/'"),
                format!("use \"/{}\"", prefix.trim_matches('/')),
            );
        }
    }
}
