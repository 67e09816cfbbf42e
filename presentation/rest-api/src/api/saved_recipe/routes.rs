use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::application::saved_recipe::container::SavedRecipesContainer;
use business::domain::recipe::model::Recipe;

use crate::api::error::ErrorResponse;
use crate::api::recipe::dto::{RecipeRequest, RecipeResponse};
use crate::api::saved_recipe::dto::SavedStatusResponse;
use crate::api::tags::ApiTags;

pub struct SavedRecipeApi {
    container: Arc<SavedRecipesContainer>,
}

impl SavedRecipeApi {
    pub fn new(container: Arc<SavedRecipesContainer>) -> Self {
        Self { container }
    }

    fn all(&self) -> Vec<RecipeResponse> {
        self.container
            .recipes()
            .into_iter()
            .map(|recipe| RecipeResponse::new(recipe, true))
            .collect()
    }
}

/// Saved recipes API
///
/// The bookmark collection, kept in memory and mirrored to local storage.
#[OpenApi]
impl SavedRecipeApi {
    /// List saved recipes
    ///
    /// Returns recipes in the order they were saved. `limit` keeps only the first entries.
    #[oai(path = "/saved-recipes", method = "get", tag = "ApiTags::SavedRecipes")]
    async fn get_all(&self, limit: Query<Option<u32>>) -> Json<Vec<RecipeResponse>> {
        let recipes = match limit.0 {
            Some(count) => self.container.recent(count as usize),
            None => self.container.recipes(),
        };
        Json(
            recipes
                .into_iter()
                .map(|recipe| RecipeResponse::new(recipe, true))
                .collect(),
        )
    }

    /// Saved status of a recipe
    #[oai(path = "/saved-recipes/:id", method = "get", tag = "ApiTags::SavedRecipes")]
    async fn get_status(&self, id: Path<u64>) -> Json<SavedStatusResponse> {
        Json(SavedStatusResponse {
            id: id.0,
            saved: self.container.is_saved(id.0),
        })
    }

    /// Save a recipe
    ///
    /// Adds the recipe to the end of the collection. Saving an already saved
    /// recipe leaves the collection unchanged.
    #[oai(path = "/saved-recipes", method = "post", tag = "ApiTags::SavedRecipes")]
    async fn save(&self, body: Json<RecipeRequest>) -> SaveRecipeResponse {
        if self.container.save(Recipe::from(body.0)) {
            SaveRecipeResponse::Created(Json(self.all()))
        } else {
            SaveRecipeResponse::Ok(Json(self.all()))
        }
    }

    /// Toggle saved status
    ///
    /// Saves the recipe when it is not saved yet, removes it otherwise.
    #[oai(
        path = "/saved-recipes/toggle",
        method = "post",
        tag = "ApiTags::SavedRecipes"
    )]
    async fn toggle(&self, body: Json<RecipeRequest>) -> Json<SavedStatusResponse> {
        let id = body.0.id;
        let saved = self.container.toggle(Recipe::from(body.0));
        Json(SavedStatusResponse { id, saved })
    }

    /// Remove a saved recipe
    #[oai(
        path = "/saved-recipes/:id",
        method = "delete",
        tag = "ApiTags::SavedRecipes"
    )]
    async fn remove(&self, id: Path<u64>) -> RemoveSavedRecipeResponse {
        if self.container.remove(id.0) {
            RemoveSavedRecipeResponse::NoContent
        } else {
            RemoveSavedRecipeResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "saved_recipe.not_found",
            )))
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveRecipeResponse {
    /// The recipe was added
    #[oai(status = 201)]
    Created(Json<Vec<RecipeResponse>>),
    /// The recipe was already saved
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveSavedRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
