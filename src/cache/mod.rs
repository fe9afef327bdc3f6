//! 进程内对象缓存
//!
//! 目前用于 JWT 中间件缓存已解析的用户信息，键为 `user:<token>`。

pub mod object_cache;

use async_trait::async_trait;
use std::sync::Arc;

pub use object_cache::moka::MokaCacheWrapper;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 按全局配置创建缓存实例
pub fn create_object_cache() -> Arc<dyn ObjectCache> {
    let config = &crate::config::AppConfig::get().cache;
    Arc::new(MokaCacheWrapper::new(config))
}
