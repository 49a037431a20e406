//! Key-value storage behind the session store.
//!
//! The session store only ever needs `get`, `set` and `remove` on string
//! keys, the same surface a browser's local storage offers. Backends are
//! picked at startup from [`StorageConfig`](crate::config::StorageConfig).

mod memory;
mod file;
mod redis_store;

pub use memory::MemoryStore;
pub use file::FileStore;
pub use redis_store::RedisStore;

use std::sync::Arc;
use crate::config::{StorageBackend, StorageConfig};
use crate::errors::StorageResult;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

// Build the process-wide store described by the configuration
pub fn open(config: &StorageConfig) -> StorageResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory profile store");
            Arc::new(MemoryStore::default())
        }
        StorageBackend::File => {
            let path = config
                .path
                .clone()
                .unwrap_or_else(|| format!("state/{}.json", config.profile));
            tracing::info!("Using file profile store at {}", path);
            Arc::new(FileStore::new(path))
        }
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .unwrap_or("redis://127.0.0.1/");
            tracing::info!("Using redis profile store for profile {}", config.profile);
            Arc::new(RedisStore::open(url, &config.profile)?)
        }
    };
    Ok(store)
}
