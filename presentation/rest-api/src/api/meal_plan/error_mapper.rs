use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::meal_plan::errors::MealPlanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MealPlanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            MealPlanError::InvalidDay => "meal_plan.invalid_day",
            MealPlanError::InvalidMealType => "meal_plan.invalid_meal_type",
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("ValidationError", message)),
        )
    }
}
