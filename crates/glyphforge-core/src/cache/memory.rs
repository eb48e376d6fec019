use std::time::Duration;

use moka::future::Cache;

/// In-memory PNG cache bounded by total byte size.
pub struct MemoryCache {
    cache: Cache<String, Vec<u8>>,
}

impl MemoryCache {
    pub fn new(max_mb: u64, ttl_seconds: u64) -> Self {
        let mut builder = Cache::builder()
            .max_capacity(max_mb.saturating_mul(1024 * 1024))
            .weigher(|_key: &String, png: &Vec<u8>| -> u32 {
                png.len().try_into().unwrap_or(u32::MAX)
            });

        if ttl_seconds > 0 {
            builder = builder.time_to_live(Duration::from_secs(ttl_seconds));
        }

        Self {
            cache: builder.build(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.cache.get(key).await
    }

    pub async fn insert(&self, key: String, png: Vec<u8>) {
        self.cache.insert(key, png).await;
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
