//! 对象缓存
//!
//! 目前仅有进程内的 moka 实现，用于缓存已认证用户（键 `user:{id}`）。

pub mod object_cache;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{Result, TutorHubError};

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
}

/// 已认证用户的缓存键
pub fn user_cache_key(user_id: i64) -> String {
    format!("user:{user_id}")
}

/// 根据配置创建缓存后端
pub fn create_object_cache() -> Result<Arc<dyn ObjectCache>> {
    let config = AppConfig::get();
    match config.cache.cache_type.as_str() {
        "moka" | "memory" => Ok(Arc::new(object_cache::moka::MokaCacheWrapper::new())),
        other => Err(TutorHubError::cache_backend_not_found(format!(
            "Unsupported cache type: {other}. Supported: moka"
        ))),
    }
}
