//! Site initialization.
//!
//! Writes a commented `site.toml` and a starter `colors.toml`. Existing
//! files are never overwritten.

mod config;

use crate::log;
use anyhow::{Result, bail};
use std::path::Path;

/// Initialize `root` with config files.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_site(root: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let config_path = root.join(crate::config::CONFIG_FILE);
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or initialize another directory.",
            config_path.display()
        );
    }

    std::fs::create_dir_all(root)?;
    config::write_config(root)?;
    if !config::write_palette(root)? {
        log!("init"; "keeping existing {}", config::PALETTE_FILE);
    }

    log!("init"; "wrote {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_site_writes_both_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("blog");

        new_site(&root, false).unwrap();
        assert!(root.join("site.toml").exists());
        assert!(root.join("colors.toml").exists());
    }

    #[test]
    fn test_existing_config_is_not_overwritten() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("site.toml"), "custom").unwrap();

        assert!(new_site(temp.path(), false).is_err());
        let content = fs::read_to_string(temp.path().join("site.toml")).unwrap();
        assert_eq!(content, "custom");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        new_site(temp.path(), true).unwrap();
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }
}
