use std::path::Path;

use sled::Db;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Persistent PNG cache backed by a sled tree.
pub struct DiskCache {
    db: Db,
}

impl DiskCache {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::CacheInit(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let db = sled::open(path).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("WouldBlock") || msg.contains("lock") {
                Error::CacheInit(format!(
                    "render cache at {} is in use by another glyphforge process \
                     (remove {}/db/LOCK if none is running)",
                    path.display(),
                    path.display()
                ))
            } else {
                Error::CacheInit(format!("cannot open {}: {e}", path.display()))
            }
        })?;

        debug!("Opened render cache at {}", path.display());
        Ok(Self { db })
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.db
            .get(key.as_bytes())
            .inspect_err(|e| warn!("Render cache read failed: {}", e))
            .ok()
            .flatten()
            .map(|v| v.to_vec())
    }

    pub fn insert(&self, key: &str, png: &[u8]) -> Result<()> {
        self.db
            .insert(key.as_bytes(), png)
            .map_err(|e| Error::CacheWrite(e.to_string()))?;
        Ok(())
    }

    /// Persist pending writes.
    pub fn flush(&self) -> Result<()> {
        self.db
            .flush()
            .map(|_| ())
            .map_err(|e| Error::CacheWrite(format!("flush failed: {e}")))
    }

    /// Remove every entry, returning how many were dropped.
    pub fn clear(&self) -> Result<usize> {
        let count = self.db.len();
        self.db.clear().map_err(|e| Error::CacheWrite(e.to_string()))?;
        self.flush()?;
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}
