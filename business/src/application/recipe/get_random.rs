use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::get_random::{
    GetRandomRecipesParams, GetRandomRecipesUseCase,
};

const MAX_RANDOM_COUNT: u32 = 100;

pub struct GetRandomRecipesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRandomRecipesUseCase for GetRandomRecipesUseCaseImpl {
    async fn execute(&self, params: GetRandomRecipesParams) -> Result<Vec<Recipe>, RecipeError> {
        let number = params.number.clamp(1, MAX_RANDOM_COUNT);
        self.logger
            .info(&format!("Fetching {} random recipes", number));

        let recipes = self.catalog.get_random_recipes(number).await?;

        self.logger
            .info(&format!("Received {} random recipes", recipes.len()));
        Ok(recipes.into_iter().map(Recipe::sanitized).collect())
    }
}
