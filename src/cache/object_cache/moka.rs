use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl Default for MokaCacheWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheWrapper {
    pub fn new() -> Self {
        let config = AppConfig::get();
        Self::with_settings(config.cache.memory.max_capacity, config.cache.default_ttl)
    }

    pub fn with_settings(max_capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(std::time::Duration::from_secs(ttl_secs))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, ttl: {}s",
            max_capacity, ttl_secs
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // Moka 使用构建时设定的全局 TTL，忽略单项 TTL
        self.inner.insert(key, value).await;
        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        assert_eq!(cache.get_raw("user:1").await, CacheResult::NotFound);

        cache.insert_raw("user:1".into(), "{}".into(), 0).await;
        assert_eq!(cache.get_raw("user:1").await, CacheResult::Found("{}".into()));

        cache.remove("user:1").await;
        assert_eq!(cache.get_raw("user:1").await, CacheResult::NotFound);
    }
}
