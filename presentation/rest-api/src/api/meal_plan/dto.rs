use poem_openapi::Object;

use business::application::saved_recipe::container::SavedRecipesContainer;
use business::domain::meal_plan::model::{Day, MealPlan, MealType};
use business::domain::recipe::model::Recipe;

use crate::api::recipe::dto::RecipeResponse;

#[derive(Debug, Clone, Object)]
pub struct DayPlanResponse {
    /// Day name, Monday through Sunday
    pub day: String,
    #[oai(skip_serializing_if_is_none)]
    pub breakfast: Option<RecipeResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub lunch: Option<RecipeResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub dinner: Option<RecipeResponse>,
}

/// The week's plan, one entry per day in calendar order
#[derive(Debug, Clone, Object)]
pub struct MealPlanResponse {
    pub days: Vec<DayPlanResponse>,
}

impl MealPlanResponse {
    pub fn new(plan: &MealPlan, saved: &SavedRecipesContainer) -> Self {
        let meal = |day: Day, meal_type: MealType| {
            plan.meal(day, meal_type)
                .cloned()
                .map(|recipe: Recipe| {
                    let is_saved = saved.is_saved(recipe.id);
                    RecipeResponse::new(recipe, is_saved)
                })
        };

        Self {
            days: Day::ALL
                .into_iter()
                .map(|day| DayPlanResponse {
                    day: day.to_string(),
                    breakfast: meal(day, MealType::Breakfast),
                    lunch: meal(day, MealType::Lunch),
                    dinner: meal(day, MealType::Dinner),
                })
                .collect(),
        }
    }
}
