use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::application::saved_recipe::container::SavedRecipesContainer;
use business::domain::meal_plan::errors::MealPlanError;
use business::domain::meal_plan::model::{Day, MealType};
use business::domain::meal_plan::use_cases::assign::{AssignMealParams, AssignMealUseCase};
use business::domain::meal_plan::use_cases::clear::{ClearMealParams, ClearMealUseCase};
use business::domain::meal_plan::use_cases::get::GetMealPlanUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::meal_plan::dto::MealPlanResponse;
use crate::api::recipe::dto::RecipeRequest;
use crate::api::tags::ApiTags;

pub struct MealPlanApi {
    get_use_case: Arc<dyn GetMealPlanUseCase>,
    assign_use_case: Arc<dyn AssignMealUseCase>,
    clear_use_case: Arc<dyn ClearMealUseCase>,
    saved: Arc<SavedRecipesContainer>,
}

impl MealPlanApi {
    pub fn new(
        get_use_case: Arc<dyn GetMealPlanUseCase>,
        assign_use_case: Arc<dyn AssignMealUseCase>,
        clear_use_case: Arc<dyn ClearMealUseCase>,
        saved: Arc<SavedRecipesContainer>,
    ) -> Self {
        Self {
            get_use_case,
            assign_use_case,
            clear_use_case,
            saved,
        }
    }
}

fn parse_slot(day: &str, meal: &str) -> Result<(Day, MealType), MealPlanError> {
    Ok((day.parse()?, meal.parse()?))
}

/// Weekly meal planner API
#[OpenApi]
impl MealPlanApi {
    /// Get the meal plan
    #[oai(path = "/meal-plan", method = "get", tag = "ApiTags::MealPlan")]
    async fn get(&self) -> Json<MealPlanResponse> {
        let plan = self.get_use_case.execute().await;
        Json(MealPlanResponse::new(&plan, &self.saved))
    }

    /// Plan a meal
    ///
    /// Puts the recipe in the given day and meal slot, replacing whatever was there.
    /// Days are `monday`..`sunday`, meals are `breakfast`, `lunch` or `dinner`.
    #[oai(path = "/meal-plan/:day/:meal", method = "put", tag = "ApiTags::MealPlan")]
    async fn assign(
        &self,
        day: Path<String>,
        meal: Path<String>,
        body: Json<RecipeRequest>,
    ) -> UpdateMealPlanResponse {
        let (day, meal_type) = match parse_slot(&day.0, &meal.0) {
            Ok(slot) => slot,
            Err(err) => return UpdateMealPlanResponse::BadRequest(err.into_error_response().1),
        };

        let plan = self
            .assign_use_case
            .execute(AssignMealParams {
                day,
                meal_type,
                recipe: body.0.into(),
            })
            .await;
        UpdateMealPlanResponse::Ok(Json(MealPlanResponse::new(&plan, &self.saved)))
    }

    /// Clear a meal
    #[oai(
        path = "/meal-plan/:day/:meal",
        method = "delete",
        tag = "ApiTags::MealPlan"
    )]
    async fn clear(&self, day: Path<String>, meal: Path<String>) -> UpdateMealPlanResponse {
        let (day, meal_type) = match parse_slot(&day.0, &meal.0) {
            Ok(slot) => slot,
            Err(err) => return UpdateMealPlanResponse::BadRequest(err.into_error_response().1),
        };

        let plan = self
            .clear_use_case
            .execute(ClearMealParams { day, meal_type })
            .await;
        UpdateMealPlanResponse::Ok(Json(MealPlanResponse::new(&plan, &self.saved)))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateMealPlanResponse {
    #[oai(status = 200)]
    Ok(Json<MealPlanResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
