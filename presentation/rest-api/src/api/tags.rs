use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Recipes,
    SavedRecipes,
    Search,
    MealPlan,
    Preferences,
}
