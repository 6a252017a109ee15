//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::borrow::Cow;
use std::fmt;

/// A dotted TOML path naming one config field.
///
/// Static paths come from `#[derive(Config)]`; indexed paths for array
/// entries are built at validation time.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub url: String,
/// }
///
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// diag.error(AuthorConfig::FIELDS.social.index(1).child("url"), "invalid URL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path to the `i`-th entry of an array field: `author.social[1]`.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// Path to a key below this one: `author.social[1].url`.
    pub fn child(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{key}", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |t| t.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
