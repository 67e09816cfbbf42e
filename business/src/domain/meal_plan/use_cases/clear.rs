use async_trait::async_trait;

use crate::domain::meal_plan::model::{Day, MealPlan, MealType};

pub struct ClearMealParams {
    pub day: Day,
    pub meal_type: MealType,
}

#[async_trait]
pub trait ClearMealUseCase: Send + Sync {
    async fn execute(&self, params: ClearMealParams) -> MealPlan;
}
