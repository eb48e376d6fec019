//! Two-level cache for rasterized glyphs.
//!
//! Lookups go to memory first, then disk; a disk hit is promoted into
//! memory. Either layer can be disabled in [`CacheConfig`].

mod disk;
mod key;
mod memory;

pub use disk::DiskCache;
pub use key::CacheKey;
pub use memory::MemoryCache;

use tracing::{debug, warn};

use crate::config::CacheConfig;
use crate::error::Result;

pub struct RenderCache {
    memory: Option<MemoryCache>,
    disk: Option<DiskCache>,
}

impl RenderCache {
    pub fn new(config: &CacheConfig) -> Result<Self> {
        let memory = config
            .memory_enabled
            .then(|| MemoryCache::new(config.memory_max_mb, config.memory_ttl_seconds));

        let disk = if config.disk_enabled {
            let path = config
                .disk_path
                .clone()
                .unwrap_or_else(crate::util::render_cache_path);
            Some(DiskCache::open(path)?)
        } else {
            None
        };

        Ok(Self { memory, disk })
    }

    /// A cache with both layers off; every lookup misses.
    pub const fn disabled() -> Self {
        Self {
            memory: None,
            disk: None,
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let key_str = key.as_str();

        if let Some(memory) = &self.memory
            && let Some(png) = memory.get(key_str).await
        {
            debug!("Render cache hit (memory) {}", key_str);
            return Some(png);
        }

        if let Some(disk) = &self.disk
            && let Some(png) = disk.get(key_str)
        {
            debug!("Render cache hit (disk) {}", key_str);
            if let Some(memory) = &self.memory {
                memory.insert(key_str.to_string(), png.clone()).await;
            }
            return Some(png);
        }

        None
    }

    pub async fn insert(&self, key: &CacheKey, png: Vec<u8>) {
        if let Some(disk) = &self.disk
            && let Err(e) = disk.insert(key.as_str(), &png)
        {
            warn!("Failed to persist render {}: {}", key, e);
        }

        if let Some(memory) = &self.memory {
            memory.insert(key.to_string(), png).await;
        }
    }

    /// Flush the disk layer. Called once after a batch of inserts.
    pub fn flush(&self) -> Result<()> {
        self.disk.as_ref().map_or(Ok(()), DiskCache::flush)
    }

    /// Empty both layers, returning the number of disk entries removed.
    pub fn clear(&self) -> Result<usize> {
        if let Some(memory) = &self.memory {
            memory.clear();
        }
        self.disk.as_ref().map_or(Ok(0), DiskCache::clear)
    }
}
