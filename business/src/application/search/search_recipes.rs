use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::search::cache::{Completion, FetchTicket, QueryChange, SearchCache};
use crate::domain::search::model::SearchSnapshot;
use crate::domain::search::use_cases::search::SearchRecipesUseCase;

/// Drives the [`SearchCache`] against the recipe catalog.
///
/// The cache lock is never held across a catalog request, so a new query can
/// replace the session while an older fetch is still on the wire; that
/// fetch's response is then discarded by generation. Each request runs in its
/// own task so its ticket is completed even when the caller goes away.
pub struct SearchRecipesUseCaseImpl {
    catalog: Arc<dyn RecipeCatalogService>,
    cache: Arc<Mutex<SearchCache>>,
    logger: Arc<dyn Logger>,
}

impl SearchRecipesUseCaseImpl {
    pub fn new(
        catalog: Arc<dyn RecipeCatalogService>,
        logger: Arc<dyn Logger>,
        page_size: u32,
        stale_after: Duration,
    ) -> Self {
        Self {
            catalog,
            cache: Arc::new(Mutex::new(SearchCache::new(page_size, stale_after))),
            logger,
        }
    }

    async fn fetch(&self, ticket: FetchTicket) -> SearchSnapshot {
        let task = tokio::spawn(fetch_page(
            self.catalog.clone(),
            self.cache.clone(),
            self.logger.clone(),
            ticket.clone(),
        ));

        match task.await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.logger.error(&format!(
                    "Recipe search task for '{}' failed: {}",
                    ticket.query, err
                ));
                let mut cache = self.cache.lock().await;
                cache.complete(&ticket, Err(RecipeError::RequestFailed));
                cache.snapshot()
            }
        }
    }
}

async fn fetch_page(
    catalog: Arc<dyn RecipeCatalogService>,
    cache: Arc<Mutex<SearchCache>>,
    logger: Arc<dyn Logger>,
    ticket: FetchTicket,
) -> SearchSnapshot {
    logger.debug(&format!(
        "Fetching '{}' at offset {} (page size {})",
        ticket.query, ticket.offset, ticket.page_size
    ));

    let result = catalog
        .search_recipes(&ticket.query, ticket.offset, ticket.page_size)
        .await;

    match &result {
        Err(RecipeError::RateLimited) => logger.warn(&format!(
            "Recipe search rate limited for '{}'",
            ticket.query
        )),
        Err(err) => logger.error(&format!(
            "Recipe search for '{}' failed: {}",
            ticket.query, err
        )),
        Ok(_) => {}
    }

    let mut cache = cache.lock().await;
    match cache.complete(&ticket, result) {
        Completion::Applied => logger.info(&format!(
            "Loaded page at offset {} for '{}'",
            ticket.offset, ticket.query
        )),
        Completion::Stale => logger.debug(&format!(
            "Discarded stale response for '{}'",
            ticket.query
        )),
        Completion::OutOfOrder => logger.warn(&format!(
            "Discarded out-of-order page at offset {} for '{}'",
            ticket.offset, ticket.query
        )),
        Completion::Failed => {}
    }
    cache.snapshot()
}

#[async_trait]
impl SearchRecipesUseCase for SearchRecipesUseCaseImpl {
    async fn search(&self, query: &str) -> SearchSnapshot {
        let ticket = {
            let mut cache = self.cache.lock().await;
            match cache.query(query, Utc::now()) {
                QueryChange::Disabled => return SearchSnapshot::disabled(),
                QueryChange::Started => self
                    .logger
                    .info(&format!("Starting search for '{}'", query.trim())),
                QueryChange::Resumed => {}
            }
            match cache.begin_first_page() {
                Some(ticket) => ticket,
                None => return cache.snapshot(),
            }
        };

        self.fetch(ticket).await
    }

    async fn load_more(&self) -> SearchSnapshot {
        let ticket = {
            let mut cache = self.cache.lock().await;
            match cache.begin_load_more() {
                Some(ticket) => ticket,
                None => return cache.snapshot(),
            }
        };

        self.fetch(ticket).await
    }

    async fn current(&self) -> SearchSnapshot {
        self.cache.lock().await.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::{Recipe, RecipeDetails, RecipeId};
    use crate::domain::recipe::services::SearchResults;
    use crate::domain::search::model::DEFAULT_PAGE_SIZE;
    use crate::test_support::{MockCatalog, mock_logger, recipe};
    use tokio::sync::Notify;

    fn page(ids: std::ops::Range<u64>, total: Option<u32>) -> SearchResults {
        SearchResults {
            results: ids.map(|id| recipe(id, "any")).collect(),
            total_results: total,
        }
    }

    fn use_case(catalog: impl RecipeCatalogService + 'static) -> SearchRecipesUseCaseImpl {
        SearchRecipesUseCaseImpl::new(
            Arc::new(catalog),
            mock_logger(),
            DEFAULT_PAGE_SIZE,
            Duration::minutes(5),
        )
    }

    #[tokio::test]
    async fn should_not_call_catalog_when_query_blank() {
        let mut catalog = MockCatalog::new();
        catalog.expect_search_recipes().never();

        let snapshot = use_case(catalog).search("  ").await;

        assert_eq!(snapshot, SearchSnapshot::disabled());
    }

    #[tokio::test]
    async fn should_return_first_page_when_searching() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search_recipes()
            .withf(|query, offset, size| query == "pasta" && *offset == 0 && *size == 12)
            .times(1)
            .returning(|_, _, _| Ok(page(0..12, Some(30))));

        let snapshot = use_case(catalog).search("pasta").await;

        assert_eq!(snapshot.query.as_deref(), Some("pasta"));
        assert_eq!(snapshot.results.len(), 12);
        assert!(snapshot.has_more);
        assert_eq!(snapshot.next_cursor, 12);
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn should_serve_cached_pages_when_query_repeated() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search_recipes()
            .times(1)
            .returning(|_, _, _| Ok(page(0..12, Some(30))));
        let use_case = use_case(catalog);

        use_case.search("pasta").await;
        let snapshot = use_case.search("pasta").await;

        assert_eq!(snapshot.results.len(), 12);
    }

    #[tokio::test]
    async fn should_append_next_page_when_loading_more() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search_recipes()
            .withf(|_, offset, _| *offset == 0)
            .returning(|_, _, _| Ok(page(0..12, Some(30))));
        catalog
            .expect_search_recipes()
            .withf(|_, offset, _| *offset == 12)
            .returning(|_, _, _| Ok(page(12..24, Some(30))));
        let use_case = use_case(catalog);

        use_case.search("pasta").await;
        let snapshot = use_case.load_more().await;

        assert_eq!(snapshot.results.len(), 24);
        assert_eq!(snapshot.next_cursor, 24);
        assert!(snapshot.has_more);
    }

    #[tokio::test]
    async fn should_not_fetch_when_no_more_pages() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search_recipes()
            .times(1)
            .returning(|_, _, _| Ok(page(0..5, None)));
        let use_case = use_case(catalog);

        use_case.search("pasta").await;
        let snapshot = use_case.load_more().await;

        assert_eq!(snapshot.results.len(), 5);
        assert!(!snapshot.has_more);
    }

    #[tokio::test]
    async fn should_surface_error_and_keep_results_when_load_more_fails() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search_recipes()
            .withf(|_, offset, _| *offset == 0)
            .returning(|_, _, _| Ok(page(0..12, Some(30))));
        catalog
            .expect_search_recipes()
            .withf(|_, offset, _| *offset == 12)
            .returning(|_, _, _| Err(RecipeError::RequestFailed));
        let use_case = use_case(catalog);

        use_case.search("pasta").await;
        let snapshot = use_case.load_more().await;

        assert_eq!(snapshot.error, Some(RecipeError::RequestFailed));
        assert_eq!(snapshot.results.len(), 12);
        assert_eq!(snapshot.next_cursor, 12);
    }

    /// Catalog that holds "pasta" responses until released.
    struct GatedCatalog {
        pasta_started: Notify,
        release_pasta: Notify,
    }

    #[async_trait]
    impl RecipeCatalogService for GatedCatalog {
        async fn search_recipes(
            &self,
            query: &str,
            _offset: u32,
            _page_size: u32,
        ) -> Result<SearchResults, RecipeError> {
            if query == "pasta" {
                self.pasta_started.notify_one();
                self.release_pasta.notified().await;
                Ok(page(100..112, Some(12)))
            } else {
                Ok(page(200..212, Some(12)))
            }
        }

        async fn get_recipe_by_id(&self, _id: RecipeId) -> Result<RecipeDetails, RecipeError> {
            Err(RecipeError::NotFound)
        }

        async fn get_random_recipes(&self, _number: u32) -> Result<Vec<Recipe>, RecipeError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn should_ignore_stale_response_when_query_changes_mid_flight() {
        let catalog = Arc::new(GatedCatalog {
            pasta_started: Notify::new(),
            release_pasta: Notify::new(),
        });
        let use_case = Arc::new(SearchRecipesUseCaseImpl::new(
            catalog.clone(),
            mock_logger(),
            DEFAULT_PAGE_SIZE,
            Duration::minutes(5),
        ));

        let pasta = {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.search("pasta").await })
        };
        catalog.pasta_started.notified().await;

        let pizza = use_case.search("pizza").await;
        catalog.release_pasta.notify_one();
        let late_pasta = pasta.await.unwrap();
        let current = use_case.current().await;

        let pizza_ids: Vec<_> = (200..212).collect();
        assert_eq!(
            pizza.results.iter().map(|r| r.id).collect::<Vec<_>>(),
            pizza_ids
        );
        assert_eq!(late_pasta.query.as_deref(), Some("pizza"));
        assert_eq!(
            current.results.iter().map(|r| r.id).collect::<Vec<_>>(),
            pizza_ids
        );
    }

    /// Catalog whose first request waits for a release signal.
    struct HeldFirstCatalog {
        started: Notify,
        release: Notify,
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl RecipeCatalogService for HeldFirstCatalog {
        async fn search_recipes(
            &self,
            _query: &str,
            _offset: u32,
            _page_size: u32,
        ) -> Result<SearchResults, RecipeError> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call == 0 {
                self.started.notify_one();
                self.release.notified().await;
            }
            Ok(page(0..12, Some(12)))
        }

        async fn get_recipe_by_id(&self, _id: RecipeId) -> Result<RecipeDetails, RecipeError> {
            Err(RecipeError::NotFound)
        }

        async fn get_random_recipes(&self, _number: u32) -> Result<Vec<Recipe>, RecipeError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn should_finish_fetch_when_caller_is_dropped() {
        let catalog = Arc::new(HeldFirstCatalog {
            started: Notify::new(),
            release: Notify::new(),
            calls: std::sync::atomic::AtomicUsize::new(0),
        });
        let use_case = Arc::new(SearchRecipesUseCaseImpl::new(
            catalog.clone(),
            mock_logger(),
            DEFAULT_PAGE_SIZE,
            Duration::minutes(5),
        ));

        let abandoned = {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.search("pasta").await })
        };
        catalog.started.notified().await;
        abandoned.abort();
        assert!(abandoned.await.unwrap_err().is_cancelled());

        catalog.release.notify_one();
        tokio::time::timeout(std::time::Duration::from_secs(5), async {
            while use_case.current().await.is_loading {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();

        let snapshot = use_case.search("pasta").await;

        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.results.len(), 12);
        assert_eq!(snapshot.error, None);
    }
}
