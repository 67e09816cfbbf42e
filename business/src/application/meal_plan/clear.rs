use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::use_cases::clear::{ClearMealParams, ClearMealUseCase};
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::store::DurableStore;

pub struct ClearMealUseCaseImpl {
    pub store: Arc<DurableStore>,
    pub write_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearMealUseCase for ClearMealUseCaseImpl {
    async fn execute(&self, params: ClearMealParams) -> MealPlan {
        let _guard = self.write_lock.lock().await;

        let mut plan: MealPlan = self.store.get(StorageKey::MealPlan).unwrap_or_default();
        if plan.clear(params.day, params.meal_type).is_none() {
            self.logger.debug(&format!(
                "No meal planned for {} {}",
                params.day, params.meal_type
            ));
            return plan;
        }

        self.logger
            .info(&format!("Cleared {} {}", params.day, params.meal_type));
        self.store.set(StorageKey::MealPlan, &plan);
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::model::{Day, MealType};
    use crate::test_support::{MemoryBackend, durable_store, mock_logger, recipe};

    fn use_case(backend: &MemoryBackend) -> ClearMealUseCaseImpl {
        ClearMealUseCaseImpl {
            store: durable_store(backend),
            write_lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_remove_meal_and_persist() {
        let backend = MemoryBackend::default();
        let mut plan = MealPlan::default();
        plan.assign(Day::Monday, MealType::Lunch, recipe(1, "Soup"));
        plan.assign(Day::Monday, MealType::Dinner, recipe(2, "Stew"));
        backend.put_raw(StorageKey::MealPlan, &serde_json::to_string(&plan).unwrap());

        let plan = use_case(&backend)
            .execute(ClearMealParams {
                day: Day::Monday,
                meal_type: MealType::Lunch,
            })
            .await;

        assert!(plan.meal(Day::Monday, MealType::Lunch).is_none());
        assert_eq!(plan.meal(Day::Monday, MealType::Dinner).unwrap().id, 2);
        let stored: MealPlan =
            serde_json::from_str(&backend.raw(StorageKey::MealPlan).unwrap()).unwrap();
        assert_eq!(stored, plan);
    }

    #[tokio::test]
    async fn should_not_write_when_slot_already_empty() {
        let backend = MemoryBackend::default();

        let plan = use_case(&backend)
            .execute(ClearMealParams {
                day: Day::Tuesday,
                meal_type: MealType::Breakfast,
            })
            .await;

        assert!(plan.is_empty());
        assert!(backend.raw(StorageKey::MealPlan).is_none());
    }
}
