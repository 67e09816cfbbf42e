use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::preferences::errors::PreferencesError;
use crate::domain::preferences::model::UserPreferences;
use crate::domain::preferences::use_cases::update::{
    UpdatePreferencesParams, UpdatePreferencesUseCase,
};
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::store::DurableStore;

pub struct UpdatePreferencesUseCaseImpl {
    pub store: Arc<DurableStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePreferencesUseCase for UpdatePreferencesUseCaseImpl {
    async fn execute(
        &self,
        params: UpdatePreferencesParams,
    ) -> Result<UserPreferences, PreferencesError> {
        let prefs = UserPreferences::new(
            params.dietary_restrictions,
            params.excluded_ingredients,
            params.serving_size,
        )
        .inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected preferences update: {}", e))
        })?;

        self.store.set(StorageKey::UserPreferences, &prefs);
        self.logger.info("User preferences updated");
        Ok(prefs)
    }
}
