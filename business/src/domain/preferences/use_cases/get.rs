use async_trait::async_trait;

use crate::domain::preferences::model::UserPreferences;

#[async_trait]
pub trait GetPreferencesUseCase: Send + Sync {
    async fn execute(&self) -> UserPreferences;
}
