//! Utility functions shared across the crate.

use std::path::PathBuf;

use crate::config::CacheConfig;
use crate::error::Result;

/// Get the user's config directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

/// Get the user's cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME` if set, otherwise `$HOME/.cache`.
pub fn cache_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
}

/// Default location of the on-disk render cache.
pub fn render_cache_path() -> PathBuf {
    cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("glyphforge")
}

/// Clear the on-disk render cache.
///
/// Returns the number of entries removed; a cache that was never created
/// counts as empty.
pub fn clear_render_cache(config: &CacheConfig) -> Result<usize> {
    let path = config.disk_path.clone().unwrap_or_else(render_cache_path);
    if !path.exists() {
        return Ok(0);
    }
    crate::cache::DiskCache::open(&path)?.clear()
}
