use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::preferences::use_cases::get::GetPreferencesUseCase;
use business::domain::preferences::use_cases::update::UpdatePreferencesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::preferences::dto::{PreferencesResponse, UpdatePreferencesRequest};
use crate::api::tags::ApiTags;

pub struct PreferencesApi {
    get_use_case: Arc<dyn GetPreferencesUseCase>,
    update_use_case: Arc<dyn UpdatePreferencesUseCase>,
}

impl PreferencesApi {
    pub fn new(
        get_use_case: Arc<dyn GetPreferencesUseCase>,
        update_use_case: Arc<dyn UpdatePreferencesUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
        }
    }
}

/// User preferences API
#[OpenApi]
impl PreferencesApi {
    /// Get preferences
    ///
    /// Returns defaults (no restrictions, 2 servings) until preferences are saved.
    #[oai(path = "/preferences", method = "get", tag = "ApiTags::Preferences")]
    async fn get(&self) -> Json<PreferencesResponse> {
        Json(self.get_use_case.execute().await.into())
    }

    /// Update preferences
    ///
    /// Replaces all preferences. Blank and repeated entries are dropped.
    #[oai(path = "/preferences", method = "put", tag = "ApiTags::Preferences")]
    async fn update(&self, body: Json<UpdatePreferencesRequest>) -> UpdatePreferencesResponse {
        match self.update_use_case.execute(body.0.into()).await {
            Ok(prefs) => UpdatePreferencesResponse::Ok(Json(prefs.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdatePreferencesResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePreferencesResponse {
    #[oai(status = 200)]
    Ok(Json<PreferencesResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
