use std::collections::HashMap;
use std::sync::RwLock;

use business::domain::errors::StorageError;
use business::domain::storage::key::StorageKey;
use business::domain::storage::repository::KeyValueStore;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::read_failed("lock poisoned"))?;
        Ok(entries.get(&key).cloned())
    }

    fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::write_failed("lock poisoned"))?;
        entries.insert(key, payload.to_string());
        Ok(())
    }

    fn delete(&self, key: StorageKey) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::remove_failed("lock poisoned"))?;
        entries.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_overwrite_and_remove_entries() {
        let store = InMemoryKeyValueStore::default();

        store.write(StorageKey::MealPlan, "{}").unwrap();
        store.write(StorageKey::MealPlan, r#"{"Monday":{}}"#).unwrap();
        assert_eq!(
            store.read(StorageKey::MealPlan).unwrap().as_deref(),
            Some(r#"{"Monday":{}}"#)
        );

        store.delete(StorageKey::MealPlan).unwrap();
        assert_eq!(store.read(StorageKey::MealPlan).unwrap(), None);
    }
}
