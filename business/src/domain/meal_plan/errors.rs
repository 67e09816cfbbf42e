#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MealPlanError {
    #[error("meal_plan.invalid_day")]
    InvalidDay,
    #[error("meal_plan.invalid_meal_type")]
    InvalidMealType,
}
