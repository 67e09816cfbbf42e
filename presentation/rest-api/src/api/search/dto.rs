use poem_openapi::Object;

use business::application::saved_recipe::container::SavedRecipesContainer;
use business::domain::search::model::SearchSnapshot;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::RecipeResponse;

/// Accumulated results of the current search session
#[derive(Debug, Clone, Object)]
pub struct SearchResponse {
    /// Active query, absent when searching is disabled
    #[oai(skip_serializing_if_is_none)]
    pub query: Option<String>,
    /// Every loaded page, in page order
    pub results: Vec<RecipeResponse>,
    pub is_loading: bool,
    /// Failure of the most recent fetch; earlier pages are kept
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<ErrorResponse>,
    pub has_more: bool,
    /// Offset the next page will be requested at
    pub next_cursor: u32,
    #[oai(skip_serializing_if_is_none)]
    pub total_results: Option<u32>,
}

impl SearchResponse {
    pub fn new(snapshot: SearchSnapshot, saved: &SavedRecipesContainer) -> Self {
        Self {
            query: snapshot.query,
            results: RecipeResponse::list(snapshot.results, saved),
            is_loading: snapshot.is_loading,
            error: snapshot.error.map(|err| {
                let (_status, json) = err.into_error_response();
                json.0
            }),
            has_more: snapshot.has_more,
            next_cursor: snapshot.next_cursor,
            total_results: snapshot.total_results,
        }
    }
}
