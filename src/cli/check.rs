//! `check` command: report on the loaded config.

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;

/// Report on a loaded config.
///
/// Invalid configs never get here: loading fails with the full diagnostics.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    crate::debug!("check"; "root {}", config.get_root().display());

    let warnings = config.diagnostics().warnings().len();
    let social = config.author.social.len();
    log!(
        "check";
        "config ok: {} ({} social link{}, {} warning{})",
        config.config_path.display(),
        social,
        if social == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" }
    );
    Ok(())
}
