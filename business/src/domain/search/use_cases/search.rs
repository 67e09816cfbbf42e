use async_trait::async_trait;

use crate::domain::search::model::SearchSnapshot;

#[async_trait]
pub trait SearchRecipesUseCase: Send + Sync {
    /// Begins or resumes the search for `query`, fetching the first page
    /// when the session has none.
    async fn search(&self, query: &str) -> SearchSnapshot;

    /// Fetches the next page of the current session, if there is one.
    async fn load_more(&self) -> SearchSnapshot;

    /// Current state without issuing any fetch.
    async fn current(&self) -> SearchSnapshot;
}
