use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{RecipeDetails, RecipeId};

pub struct GetRecipeDetailsParams {
    pub id: RecipeId,
}

#[async_trait]
pub trait GetRecipeDetailsUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeDetailsParams) -> Result<RecipeDetails, RecipeError>;
}
