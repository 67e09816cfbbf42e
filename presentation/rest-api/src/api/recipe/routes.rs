use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::application::saved_recipe::container::SavedRecipesContainer;
use business::domain::recipe::use_cases::get_details::{
    GetRecipeDetailsParams, GetRecipeDetailsUseCase,
};
use business::domain::recipe::use_cases::get_random::{
    DEFAULT_RANDOM_COUNT, GetRandomRecipesParams, GetRandomRecipesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{RecipeDetailsResponse, RecipeResponse};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    get_details_use_case: Arc<dyn GetRecipeDetailsUseCase>,
    get_random_use_case: Arc<dyn GetRandomRecipesUseCase>,
    saved: Arc<SavedRecipesContainer>,
}

impl RecipeApi {
    pub fn new(
        get_details_use_case: Arc<dyn GetRecipeDetailsUseCase>,
        get_random_use_case: Arc<dyn GetRandomRecipesUseCase>,
        saved: Arc<SavedRecipesContainer>,
    ) -> Self {
        Self {
            get_details_use_case,
            get_random_use_case,
            saved,
        }
    }
}

/// Recipe catalog API
#[OpenApi]
impl RecipeApi {
    /// Random recipes
    ///
    /// Picks `number` random recipes from the catalog (default 10) for the home page.
    #[oai(path = "/recipes/random", method = "get", tag = "ApiTags::Recipes")]
    async fn get_random(&self, number: Query<Option<u32>>) -> GetRandomRecipesResponse {
        let params = GetRandomRecipesParams {
            number: number.0.unwrap_or(DEFAULT_RANDOM_COUNT),
        };

        match self.get_random_use_case.execute(params).await {
            Ok(recipes) => {
                GetRandomRecipesResponse::Ok(Json(RecipeResponse::list(recipes, &self.saved)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    429 => GetRandomRecipesResponse::TooManyRequests(json),
                    _ => GetRandomRecipesResponse::BadGateway(json),
                }
            }
        }
    }

    /// Recipe details
    ///
    /// Ingredients, instructions and nutrition for a single recipe.
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_details(&self, id: Path<u64>) -> GetRecipeDetailsResponse {
        match self
            .get_details_use_case
            .execute(GetRecipeDetailsParams { id: id.0 })
            .await
        {
            Ok(details) => {
                let saved = self.saved.is_saved(details.recipe.id);
                GetRecipeDetailsResponse::Ok(Json(RecipeDetailsResponse::new(details, saved)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeDetailsResponse::NotFound(json),
                    429 => GetRecipeDetailsResponse::TooManyRequests(json),
                    _ => GetRecipeDetailsResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRandomRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeDetailsResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeDetailsResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
