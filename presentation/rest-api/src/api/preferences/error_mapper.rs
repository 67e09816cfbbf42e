use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::preferences::errors::PreferencesError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PreferencesError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            PreferencesError::InvalidServingSize => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "ValidationError",
                    "preferences.invalid_serving_size",
                )),
            ),
        }
    }
}
