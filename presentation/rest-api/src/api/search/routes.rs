use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::application::saved_recipe::container::SavedRecipesContainer;
use business::domain::search::use_cases::search::SearchRecipesUseCase;

use crate::api::search::dto::SearchResponse;
use crate::api::tags::ApiTags;

pub struct SearchApi {
    search_use_case: Arc<dyn SearchRecipesUseCase>,
    saved: Arc<SavedRecipesContainer>,
}

impl SearchApi {
    pub fn new(
        search_use_case: Arc<dyn SearchRecipesUseCase>,
        saved: Arc<SavedRecipesContainer>,
    ) -> Self {
        Self {
            search_use_case,
            saved,
        }
    }
}

/// Paginated recipe search
///
/// Pages already fetched for a query are served from cache; switching to a
/// different query starts a new session.
#[OpenApi]
impl SearchApi {
    /// Search recipes
    ///
    /// Fetches the first page when the query is new. A missing or blank query
    /// disables searching and returns an empty result.
    #[oai(path = "/search", method = "get", tag = "ApiTags::Search")]
    async fn search(&self, query: Query<Option<String>>) -> Json<SearchResponse> {
        let snapshot = self
            .search_use_case
            .search(query.0.as_deref().unwrap_or_default())
            .await;
        Json(SearchResponse::new(snapshot, &self.saved))
    }

    /// Load the next page
    ///
    /// Appends the next page of the current query when more results exist.
    #[oai(path = "/search/more", method = "post", tag = "ApiTags::Search")]
    async fn load_more(&self) -> Json<SearchResponse> {
        let snapshot = self.search_use_case.load_more().await;
        Json(SearchResponse::new(snapshot, &self.saved))
    }
}
