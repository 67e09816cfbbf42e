use async_trait::async_trait;

use crate::domain::preferences::errors::PreferencesError;
use crate::domain::preferences::model::UserPreferences;

pub struct UpdatePreferencesParams {
    pub dietary_restrictions: Vec<String>,
    pub excluded_ingredients: Vec<String>,
    pub serving_size: u32,
}

#[async_trait]
pub trait UpdatePreferencesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdatePreferencesParams,
    ) -> Result<UserPreferences, PreferencesError>;
}
