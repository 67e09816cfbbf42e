use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::preferences::model::UserPreferences;
use crate::domain::preferences::use_cases::get::GetPreferencesUseCase;
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::store::DurableStore;

pub struct GetPreferencesUseCaseImpl {
    pub store: Arc<DurableStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPreferencesUseCase for GetPreferencesUseCaseImpl {
    async fn execute(&self) -> UserPreferences {
        self.logger.debug("Loading user preferences");
        self.store
            .get(StorageKey::UserPreferences)
            .unwrap_or_default()
    }
}
