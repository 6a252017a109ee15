//! Process-wide loaded config.
//!
//! The config moves from unloaded to loaded exactly once. After that the
//! same `Arc<SiteConfig>` is handed out to every caller; nothing can replace
//! or mutate it for the rest of the process.

use crate::config::SiteConfig;
use anyhow::Result;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Serializes the first load so concurrent callers read the file once.
static LOAD_LOCK: Mutex<()> = Mutex::new(());

/// The loaded config, or `None` before [`load_once`] succeeded.
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get().cloned()
}

#[cfg(test)]
pub fn is_loaded() -> bool {
    CONFIG.get().is_some()
}

/// Load the config from `path` on first call; later calls return the
/// already-loaded record without touching disk.
///
/// A failed load leaves the handle unloaded.
pub fn load_once(path: &Path) -> Result<Arc<SiteConfig>> {
    if let Some(config) = cfg() {
        return Ok(config);
    }

    let _guard = LOAD_LOCK.lock();
    if let Some(config) = CONFIG.get() {
        return Ok(Arc::clone(config));
    }

    let config = Arc::new(SiteConfig::load(path)?);
    crate::debug!("config"; "loaded {}", config.config_path.display());
    Ok(Arc::clone(CONFIG.get_or_init(|| config)))
}
