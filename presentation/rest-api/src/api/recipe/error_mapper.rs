use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecipeError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "recipe.not_found"),
            RecipeError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RateLimited",
                "recipe.rate_limited",
            ),
            RecipeError::RequestFailed => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "recipe.request_failed",
            ),
            RecipeError::MalformedResponse => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "recipe.malformed_response",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
