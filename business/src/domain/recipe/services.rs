use async_trait::async_trait;

use super::errors::RecipeError;
use super::model::{Recipe, RecipeDetails, RecipeId};

/// One page of results as reported by the catalog.
///
/// `total_results` is `None` when upstream omits it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub results: Vec<Recipe>,
    pub total_results: Option<u32>,
}

/// Service port for the remote recipe catalog.
#[async_trait]
pub trait RecipeCatalogService: Send + Sync {
    async fn search_recipes(
        &self,
        query: &str,
        offset: u32,
        page_size: u32,
    ) -> Result<SearchResults, RecipeError>;

    async fn get_recipe_by_id(&self, id: RecipeId) -> Result<RecipeDetails, RecipeError>;

    async fn get_random_recipes(&self, number: u32) -> Result<Vec<Recipe>, RecipeError>;
}
