use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::use_cases::assign::{AssignMealParams, AssignMealUseCase};
use crate::domain::recipe::model::Recipe;
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::store::DurableStore;

pub struct AssignMealUseCaseImpl {
    pub store: Arc<DurableStore>,
    /// Shared with the other plan writers so read-modify-write cycles don't interleave.
    pub write_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AssignMealUseCase for AssignMealUseCaseImpl {
    async fn execute(&self, params: AssignMealParams) -> MealPlan {
        let _guard = self.write_lock.lock().await;
        self.logger.info(&format!(
            "Assigning recipe {} to {} {}",
            params.recipe.id, params.day, params.meal_type
        ));

        let mut plan: MealPlan = self.store.get(StorageKey::MealPlan).unwrap_or_default();
        plan.assign(params.day, params.meal_type, Recipe::sanitized(params.recipe));
        self.store.set(StorageKey::MealPlan, &plan);

        plan
    }
}
