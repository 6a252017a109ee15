//! Proc macros for sitemeta.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "manifest")]
//! /// Web app manifest fields.
//! pub struct ManifestConfig {
//!     /// Name shown on the home screen.
//!     #[config(inline_doc = "max 12 characters")]
//!     pub short_name: String,
//!
//!     /// Display mode.
//!     #[config(default = "standalone")]
//!     pub display: DisplayMode,
//! }
//!
//! // Generates:
//! // - ManifestConfig::FIELDS.short_name -> FieldPath("manifest.short_name")
//! // - ManifestConfig::template() -> TOML string with comments
//! // - ManifestConfig::template_with_header() -> with [manifest] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc = "x")]` - Trailing comment in template
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteInfoConfig` → `site_info`
//! - `ContactConfig` → `contact`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
