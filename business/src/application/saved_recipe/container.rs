use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::{Recipe, RecipeId};
use crate::domain::saved_recipe::model::SavedRecipeCollection;
use crate::domain::saved_recipe::reducer::{SavedRecipeAction, reduce};
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::store::DurableStore;

use super::synchronizer::PersistenceSynchronizer;

/// Owner of the saved-recipe collection and the single source of truth for
/// "is this recipe saved".
///
/// State lives in a `watch` cell: actions are applied one at a time under the
/// cell's write lock, and only real changes notify subscribers (the
/// persistence synchronizer among them).
pub struct SavedRecipesContainer {
    state: watch::Sender<Arc<SavedRecipeCollection>>,
    synchronizer: PersistenceSynchronizer,
    logger: Arc<dyn Logger>,
}

impl SavedRecipesContainer {
    /// Creates the container, starts persistence and hydrates from `store`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(store: Arc<DurableStore>, logger: Arc<dyn Logger>) -> Self {
        let (state, _) = watch::channel(Arc::new(SavedRecipeCollection::default()));
        let synchronizer =
            PersistenceSynchronizer::spawn(state.subscribe(), store.clone(), logger.clone());

        let container = Self {
            state,
            synchronizer,
            logger,
        };
        container.hydrate(&store);
        container
    }

    fn hydrate(&self, store: &DurableStore) {
        let Some(entries) = store.get::<Vec<Value>>(StorageKey::SavedRecipes) else {
            self.logger.debug("No persisted saved recipes found");
            return;
        };

        let recipes: Vec<Recipe> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(recipe) => Some(recipe),
                Err(err) => {
                    self.logger
                        .warn(&format!("Skipping malformed saved recipe: {}", err));
                    None
                }
            })
            .collect();

        self.logger
            .info(&format!("Hydrating {} saved recipes", recipes.len()));
        self.dispatch(SavedRecipeAction::ReplaceAll(recipes));
    }

    /// Applies `action` and returns whether the collection changed.
    pub fn dispatch(&self, action: SavedRecipeAction) -> bool {
        self.state.send_if_modified(|current| {
            let next = reduce(current, action);
            if Arc::ptr_eq(current, &next) {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    /// Saves `recipe`; returns false when it was already saved.
    pub fn save(&self, recipe: Recipe) -> bool {
        let id = recipe.id;
        let added = self.dispatch(SavedRecipeAction::Add(recipe));
        if added {
            self.logger.info(&format!("Saved recipe {}", id));
        } else {
            self.logger
                .debug(&format!("Recipe {} already saved", id));
        }
        added
    }

    /// Removes the recipe; returns false when it was not saved.
    pub fn remove(&self, id: RecipeId) -> bool {
        let removed = self.dispatch(SavedRecipeAction::Remove(id));
        if removed {
            self.logger.info(&format!("Removed saved recipe {}", id));
        }
        removed
    }

    /// Flips the saved status of `recipe` and returns the new status.
    pub fn toggle(&self, recipe: Recipe) -> bool {
        let id = recipe.id;
        let mut saved = false;
        self.state.send_if_modified(|current| {
            let action = if current.contains(id) {
                SavedRecipeAction::Remove(id)
            } else {
                saved = true;
                SavedRecipeAction::Add(recipe)
            };
            *current = reduce(current, action);
            true
        });
        self.logger
            .info(&format!("Toggled recipe {} (saved: {})", id, saved));
        saved
    }

    pub fn snapshot(&self) -> Arc<SavedRecipeCollection> {
        self.state.borrow().clone()
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.state.borrow().recipes().to_vec()
    }

    /// The first `count` saved recipes, in insertion order.
    pub fn recent(&self, count: usize) -> Vec<Recipe> {
        self.state
            .borrow()
            .recipes()
            .iter()
            .take(count)
            .cloned()
            .collect()
    }

    pub fn is_saved(&self, id: RecipeId) -> bool {
        self.state.borrow().contains(id)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Receiver notified after every committed change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SavedRecipeCollection>> {
        self.state.subscribe()
    }

    /// Flushes the latest state and stops persistence.
    pub async fn shutdown(&self) {
        self.logger.info("Shutting down saved recipes container");
        self.synchronizer.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::image::FALLBACK_IMAGE_URL;
    use crate::test_support::{MemoryBackend, durable_store, mock_logger, recipe};

    fn persisted_ids(backend: &MemoryBackend) -> Vec<RecipeId> {
        let raw = backend.raw(StorageKey::SavedRecipes).unwrap();
        let recipes: Vec<Recipe> = serde_json::from_str(&raw).unwrap();
        recipes.into_iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn should_start_empty_when_nothing_persisted() {
        let backend = MemoryBackend::default();

        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        assert!(container.is_empty());
        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_hydrate_from_store_when_record_present() {
        let backend = MemoryBackend::default();
        backend.put_raw(
            StorageKey::SavedRecipes,
            r#"[{"id":3,"title":"Paella","image":"https://example.com/p.jpg"},{"id":9,"title":"Gazpacho","image":""}]"#,
        );

        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        assert_eq!(container.snapshot().ids().collect::<Vec<_>>(), vec![3, 9]);
        assert!(container.is_saved(9));
        assert_eq!(
            container.snapshot().get(9).unwrap().image,
            FALLBACK_IMAGE_URL
        );
        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_stay_empty_when_record_is_not_a_sequence() {
        let backend = MemoryBackend::default();
        backend.put_raw(StorageKey::SavedRecipes, r#"{"id":3}"#);

        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        assert!(container.is_empty());
        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_skip_malformed_entries_when_hydrating() {
        let backend = MemoryBackend::default();
        backend.put_raw(
            StorageKey::SavedRecipes,
            r#"[{"title":"no id"},{"id":4,"title":"Pad Thai","image":"https://example.com/t.jpg"}]"#,
        );

        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        assert_eq!(container.snapshot().ids().collect::<Vec<_>>(), vec![4]);
        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_persist_collection_when_shut_down() {
        let backend = MemoryBackend::default();
        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        container.save(recipe(1, "Ramen"));
        container.save(recipe(2, "Udon"));
        container.shutdown().await;

        assert_eq!(persisted_ids(&backend), vec![1, 2]);
    }

    #[tokio::test]
    async fn should_persist_each_change_while_running() {
        let backend = MemoryBackend::default();
        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        container.save(recipe(7, "Pho"));
        tokio::time::timeout(std::time::Duration::from_secs(5), async {
            while backend.raw(StorageKey::SavedRecipes).is_none()
                || persisted_ids(&backend) != vec![7]
            {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        container.remove(7);
        tokio::time::timeout(std::time::Duration::from_secs(5), async {
            while !persisted_ids(&backend).is_empty() {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_reproduce_collection_when_rehydrated() {
        let backend = MemoryBackend::default();
        let first = SavedRecipesContainer::start(durable_store(&backend), mock_logger());
        first.save(recipe(1, "one"));
        first.save(recipe(2, "two"));
        first.remove(1);
        first.shutdown().await;

        let second = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        assert_eq!(second.recipes(), vec![recipe(2, "two")]);
        second.shutdown().await;
    }

    #[tokio::test]
    async fn should_not_notify_subscribers_when_action_is_noop() {
        let backend = MemoryBackend::default();
        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());
        container.save(recipe(1, "one"));
        let mut changes = container.subscribe();

        assert!(!container.save(recipe(1, "one")));
        assert!(!container.remove(42));

        assert!(!changes.has_changed().unwrap());
        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_flip_status_when_toggled() {
        let backend = MemoryBackend::default();
        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        assert!(container.toggle(recipe(5, "Curry")));
        assert!(container.is_saved(5));
        assert!(!container.toggle(recipe(5, "Curry")));
        assert!(!container.is_saved(5));
        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_return_first_recipes_when_asking_for_recent() {
        let backend = MemoryBackend::default();
        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());
        for id in 1..=5 {
            container.save(recipe(id, "any"));
        }

        let recent = container.recent(3);

        assert_eq!(
            recent.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        container.shutdown().await;
    }

    #[tokio::test]
    async fn should_allow_shutdown_to_be_called_twice() {
        let backend = MemoryBackend::default();
        let container = SavedRecipesContainer::start(durable_store(&backend), mock_logger());

        container.shutdown().await;
        container.shutdown().await;

        assert_eq!(persisted_ids(&backend), Vec::<RecipeId>::new());
    }
}
