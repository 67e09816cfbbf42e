use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::use_cases::get::GetMealPlanUseCase;
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::store::DurableStore;

pub struct GetMealPlanUseCaseImpl {
    pub store: Arc<DurableStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMealPlanUseCase for GetMealPlanUseCaseImpl {
    async fn execute(&self) -> MealPlan {
        self.logger.debug("Loading meal plan");
        self.store.get(StorageKey::MealPlan).unwrap_or_default()
    }
}
