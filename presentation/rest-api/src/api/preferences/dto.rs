use poem_openapi::Object;

use business::domain::preferences::model::UserPreferences;
use business::domain::preferences::use_cases::update::UpdatePreferencesParams;

#[derive(Debug, Clone, Object)]
pub struct PreferencesResponse {
    pub dietary_restrictions: Vec<String>,
    pub excluded_ingredients: Vec<String>,
    pub serving_size: u32,
}

impl From<UserPreferences> for PreferencesResponse {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            dietary_restrictions: prefs.dietary_restrictions,
            excluded_ingredients: prefs.excluded_ingredients,
            serving_size: prefs.serving_size,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePreferencesRequest {
    #[oai(default)]
    pub dietary_restrictions: Vec<String>,
    #[oai(default)]
    pub excluded_ingredients: Vec<String>,
    /// Servings per recipe, 1 to 20
    pub serving_size: u32,
}

impl From<UpdatePreferencesRequest> for UpdatePreferencesParams {
    fn from(request: UpdatePreferencesRequest) -> Self {
        Self {
            dietary_restrictions: request.dietary_restrictions,
            excluded_ingredients: request.excluded_ingredients,
            serving_size: request.serving_size,
        }
    }
}
