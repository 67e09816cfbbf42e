use async_trait::async_trait;

use crate::domain::meal_plan::model::{Day, MealPlan, MealType};
use crate::domain::recipe::model::Recipe;

pub struct AssignMealParams {
    pub day: Day,
    pub meal_type: MealType,
    pub recipe: Recipe,
}

#[async_trait]
pub trait AssignMealUseCase: Send + Sync {
    async fn execute(&self, params: AssignMealParams) -> MealPlan;
}
