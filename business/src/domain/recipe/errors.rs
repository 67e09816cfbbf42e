/// Failures talking to the remote recipe catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.rate_limited")]
    RateLimited,
    #[error("recipe.request_failed")]
    RequestFailed,
    #[error("recipe.malformed_response")]
    MalformedResponse,
}
