//! `[author]` configuration.
//!
//! # Example
//!
//! ```toml
//! [author]
//! name = "Alice"
//! twitter = "alice"
//!
//! [[author.social]]
//! name = "github"
//! url = "https://github.com/alice"
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::{is_absolute_url, is_twitter_handle};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Author of the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "author")]
pub struct AuthorConfig {
    /// Author name.
    pub name: String,

    /// Twitter account without the leading `@`, used for `twitter:creator`.
    pub twitter: String,

    /// Social profiles, rendered in the order written.
    #[config(hidden)]
    pub social: Vec<SocialLink>,
}

/// One social profile: platform name and profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl AuthorConfig {
    /// `@handle` form of the twitter account, if one is set.
    pub fn twitter_handle(&self) -> Option<String> {
        (!self.twitter.is_empty()).then(|| format!("@{}", self.twitter))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "must not be empty");
        }

        if !self.twitter.is_empty() && !is_twitter_handle(&self.twitter) {
            let hint = match self.twitter.strip_prefix('@') {
                Some(stripped) => format!("drop the '@': \"{stripped}\""),
                None => "1-15 letters, digits or '_'".to_string(),
            };
            diag.error_with_hint(
                Self::FIELDS.twitter,
                format!("'{}' is not a twitter handle", self.twitter),
                hint,
            );
        }

        let mut seen = FxHashSet::default();
        for (i, link) in self.social.iter().enumerate() {
            let entry = Self::FIELDS.social.index(i);

            if link.name.trim().is_empty() {
                diag.error(entry.child("name"), "must not be empty");
            } else if !seen.insert(link.name.as_str()) {
                diag.error(
                    entry.child("name"),
                    format!("duplicate social link '{}'", link.name),
                );
            }

            if !is_absolute_url(&link.url) {
                diag.error_with_hint(
                    entry.child("url"),
                    format!("'{}' is not an absolute URL", link.url),
                    "use format like https://github.com/alice",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn errors_for(author: &AuthorConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        author.validate(&mut diag);
        diag
    }

    #[test]
    fn test_social_links_keep_order() {
        let config = test_parse_config(
            r#"
[[author.social]]
name = "twitter"
url = "https://twitter.com/alice"

[[author.social]]
name = "github"
url = "https://github.com/alice"
"#,
        );
        let social = &config.author.social;
        assert_eq!(social.len(), 2);
        assert_eq!(social[0].name, "twitter");
        assert_eq!(social[1].name, "github");
        assert_eq!(social[1].url, "https://github.com/alice");
    }

    #[test]
    fn test_twitter_handle() {
        let author = AuthorConfig {
            twitter: "alice".into(),
            ..Default::default()
        };
        assert_eq!(author.twitter_handle().as_deref(), Some("@alice"));
        assert!(AuthorConfig::default().twitter_handle().is_none());
    }

    #[test]
    fn test_twitter_with_at_sign_is_rejected() {
        let author = AuthorConfig {
            name: "Alice".into(),
            twitter: "@alice".into(),
            ..Default::default()
        };
        let diag = errors_for(&author);
        assert!(diag.has_error_for("author.twitter"));
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("drop the '@': \"alice\""));
    }

    #[test]
    fn test_invalid_social_entries_are_indexed() {
        let author = AuthorConfig {
            name: "Alice".into(),
            twitter: String::new(),
            social: vec![
                SocialLink::new("github", "https://github.com/alice"),
                SocialLink::new("", "github.com/alice"),
                SocialLink::new("github", "https://github.com/alice2"),
            ],
        };
        let diag = errors_for(&author);
        assert!(diag.has_error_for("author.social[1].name"));
        assert!(diag.has_error_for("author.social[1].url"));
        assert!(diag.has_error_for("author.social[2].name"));
        assert!(!diag.has_error_for("author.social[0].url"));
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_name_required() {
        let diag = errors_for(&AuthorConfig::default());
        assert!(diag.has_error_for("author.name"));
    }
}
