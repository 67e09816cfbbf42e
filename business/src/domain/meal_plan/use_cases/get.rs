use async_trait::async_trait;

use crate::domain::meal_plan::model::MealPlan;

#[async_trait]
pub trait GetMealPlanUseCase: Send + Sync {
    async fn execute(&self) -> MealPlan;
}
