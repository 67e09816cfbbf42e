//! Shared fixtures for unit tests across the business layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeDetails, RecipeId};
use crate::domain::recipe::services::{RecipeCatalogService, SearchResults};
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::repository::KeyValueStore;
use crate::domain::storage::store::DurableStore;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl RecipeCatalogService for Catalog {
        async fn search_recipes(
            &self,
            query: &str,
            offset: u32,
            page_size: u32,
        ) -> Result<SearchResults, RecipeError>;
        async fn get_recipe_by_id(&self, id: RecipeId) -> Result<RecipeDetails, RecipeError>;
        async fn get_random_recipes(&self, number: u32) -> Result<Vec<Recipe>, RecipeError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Backend that keeps payloads in a map, shared between clones so a test can
/// inspect what a component persisted.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<StorageKey, String>>>,
}

impl MemoryBackend {
    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.entries.lock().unwrap().get(&key).cloned()
    }

    pub fn put_raw(&self, key: StorageKey, payload: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key, payload.to_string());
    }
}

impl KeyValueStore for MemoryBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError> {
        self.put_raw(key, payload);
        Ok(())
    }

    fn delete(&self, key: StorageKey) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(&key);
        Ok(())
    }
}

pub fn durable_store(backend: &MemoryBackend) -> Arc<DurableStore> {
    Arc::new(DurableStore::new(Arc::new(backend.clone()), mock_logger()))
}

pub fn recipe(id: RecipeId, title: &str) -> Recipe {
    Recipe::new(id, title, format!("https://img.spoonacular.com/recipes/{}-312x231.jpg", id))
}
