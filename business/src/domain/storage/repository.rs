use crate::domain::errors::StorageError;

use super::key::StorageKey;

/// Port for the synchronous local persistence medium.
///
/// Backends store opaque text payloads; encoding is the job of
/// [`DurableStore`](super::store::DurableStore).
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError>;
    fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError>;
    fn delete(&self, key: StorageKey) -> Result<(), StorageError>;
}
