use std::path::PathBuf;
use std::sync::Arc;

use business::domain::errors::StorageError;
use business::domain::storage::repository::KeyValueStore;

use crate::file_store::FileKeyValueStore;
use crate::memory_store::InMemoryKeyValueStore;

/// Where durable entries live.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackendConfig {
    /// One JSON file per key inside this directory.
    Directory(PathBuf),
    /// Nothing survives a restart.
    Memory,
}

/// Opens the configured backend, creating the storage directory if needed.
pub fn open_store(config: &StorageBackendConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    match config {
        StorageBackendConfig::Directory(dir) => {
            let store = FileKeyValueStore::open(dir)?;
            tracing::info!("Using file storage at {}", dir.display());
            Ok(Arc::new(store))
        }
        StorageBackendConfig::Memory => {
            tracing::warn!("Using in-memory storage; nothing will be kept across restarts");
            Ok(Arc::new(InMemoryKeyValueStore::default()))
        }
    }
}
