use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::logger::Logger;

use super::key::StorageKey;
use super::repository::KeyValueStore;

/// JSON record store over a [`KeyValueStore`] backend.
///
/// Failures never reach the caller: reads degrade to `None` and writes to a
/// no-op, with the cause logged. In-memory state stays authoritative for the
/// session when a write is lost.
pub struct DurableStore {
    backend: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
}

impl DurableStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        Self { backend, logger }
    }

    pub fn get<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let payload = match self.backend.read(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                self.logger
                    .error(&format!("Error reading {} from storage: {}", key, err));
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(value) => Some(value),
            Err(err) => {
                self.logger
                    .warn(&format!("Ignoring malformed {} record: {}", key, err));
                None
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                self.logger
                    .error(&format!("Error serializing {} for storage: {}", key, err));
                return;
            }
        };

        if let Err(err) = self.backend.write(key, &payload) {
            self.logger
                .error(&format!("Error writing {} to storage: {}", key, err));
        }
    }

    pub fn remove(&self, key: StorageKey) {
        if let Err(err) = self.backend.delete(key) {
            self.logger
                .error(&format!("Error removing {} from storage: {}", key, err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::test_support::{MemoryBackend, mock_logger};
    use mockall::mock;

    mock! {
        pub Backend {}

        impl KeyValueStore for Backend {
            fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError>;
            fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError>;
            fn delete(&self, key: StorageKey) -> Result<(), StorageError>;
        }
    }

    #[test]
    fn should_return_none_when_key_never_written() {
        let store = DurableStore::new(Arc::new(MemoryBackend::default()), mock_logger());

        let value: Option<Vec<u32>> = store.get(StorageKey::SavedRecipes);

        assert!(value.is_none());
    }

    #[test]
    fn should_read_back_value_when_previously_set() {
        let store = DurableStore::new(Arc::new(MemoryBackend::default()), mock_logger());

        store.set(StorageKey::UserPreferences, &vec!["vegan", "gluten free"]);
        let value: Option<Vec<String>> = store.get(StorageKey::UserPreferences);

        assert_eq!(
            value,
            Some(vec!["vegan".to_string(), "gluten free".to_string()])
        );
    }

    #[test]
    fn should_return_none_when_payload_is_not_json() {
        let mut backend = MockBackend::new();
        backend
            .expect_read()
            .returning(|_| Ok(Some("{not json".to_string())));
        let store = DurableStore::new(Arc::new(backend), mock_logger());

        let value: Option<Vec<u32>> = store.get(StorageKey::SavedRecipes);

        assert!(value.is_none());
    }

    #[test]
    fn should_return_none_when_backend_read_fails() {
        let mut backend = MockBackend::new();
        backend
            .expect_read()
            .returning(|_| Err(StorageError::read_failed("disk unplugged")));
        let store = DurableStore::new(Arc::new(backend), mock_logger());

        let value: Option<Vec<u32>> = store.get(StorageKey::MealPlan);

        assert!(value.is_none());
    }

    #[test]
    fn should_swallow_error_when_write_fails() {
        let mut backend = MockBackend::new();
        backend
            .expect_write()
            .times(1)
            .returning(|_, _| Err(StorageError::write_failed("quota exceeded")));
        let store = DurableStore::new(Arc::new(backend), mock_logger());

        store.set(StorageKey::SavedRecipes, &vec![1, 2, 3]);
    }

    #[test]
    fn should_swallow_error_when_remove_fails() {
        let mut backend = MockBackend::new();
        backend
            .expect_delete()
            .times(1)
            .returning(|_| Err(StorageError::remove_failed("read-only")));
        let store = DurableStore::new(Arc::new(backend), mock_logger());

        store.remove(StorageKey::SavedRecipes);
    }

    #[test]
    fn should_forget_value_when_removed() {
        let store = DurableStore::new(Arc::new(MemoryBackend::default()), mock_logger());
        store.set(StorageKey::MealPlan, &42);

        store.remove(StorageKey::MealPlan);

        assert!(store.get::<u32>(StorageKey::MealPlan).is_none());
    }
}
