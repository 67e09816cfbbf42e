use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub const DEFAULT_RANDOM_COUNT: u32 = 10;

pub struct GetRandomRecipesParams {
    pub number: u32,
}

impl Default for GetRandomRecipesParams {
    fn default() -> Self {
        Self {
            number: DEFAULT_RANDOM_COUNT,
        }
    }
}

#[async_trait]
pub trait GetRandomRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GetRandomRecipesParams) -> Result<Vec<Recipe>, RecipeError>;
}
