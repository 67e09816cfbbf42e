use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::get_details::{
    GetRecipeDetailsParams, GetRecipeDetailsUseCase,
};

pub struct GetRecipeDetailsUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeDetailsUseCase for GetRecipeDetailsUseCaseImpl {
    async fn execute(&self, params: GetRecipeDetailsParams) -> Result<RecipeDetails, RecipeError> {
        self.logger
            .info(&format!("Fetching recipe details for id: {}", params.id));

        match self.catalog.get_recipe_by_id(params.id).await {
            Ok(details) => Ok(details.sanitized()),
            Err(err) => {
                self.logger.error(&format!(
                    "Failed to load recipe details for id {}: {}",
                    params.id, err
                ));
                Err(err)
            }
        }
    }
}
