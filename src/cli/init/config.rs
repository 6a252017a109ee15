//! Configuration file generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{
    AuthorConfig, CONFIG_FILE, ContactConfig, InfoConfig, ManifestConfig, PaletteSectionConfig,
    SiteInfoConfig,
};

/// Starter palette filename, matching the `[palette]` default.
pub const PALETTE_FILE: &str = "colors.toml";

const PALETTE_TEMPLATE: &str = "\
# Color tokens shared with the stylesheets.
# Referenced from site.toml as `{ palette = \"token\" }`.
background = \"#1D1E20\"
";

/// Example social entry; `[[author.social]]` has no scalar default to render.
const SOCIAL_EXAMPLE: &str = "\
# Social profiles, rendered in the order written.
# [[author.social]]
# name = \"github\"
# url = \"https://github.com/alice\"
";

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Site configuration ({} v{})\n\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));

    for section in [
        SiteInfoConfig::template_with_header(),
        AuthorConfig::template_with_header(),
        SOCIAL_EXAMPLE.to_string(),
        InfoConfig::template_with_header(),
        ManifestConfig::template_with_header(),
        ContactConfig::template_with_header(),
        PaletteSectionConfig::template_with_header(),
    ] {
        out.push_str(&section);
        out.push('\n');
    }

    out
}

/// Write default site.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write the starter palette unless one exists. Returns whether it was written.
pub fn write_palette(root: &Path) -> Result<bool> {
    let path = root.join(PALETTE_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, PALETTE_TEMPLATE)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(true)
}
