use poem_openapi::Object;

use business::application::saved_recipe::container::SavedRecipesContainer;
use business::domain::recipe::model::{Ingredient, NutritionInfo, Recipe, RecipeDetails};

/// Recipe summary as shown on cards and lists
#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Catalog identifier
    pub id: u64,
    pub title: String,
    /// Image URL, never empty
    pub image: String,
    #[oai(skip_serializing_if_is_none)]
    pub ready_in_minutes: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub servings: Option<u32>,
    pub diets: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub summary: Option<String>,
    /// Whether the recipe is in the saved collection
    pub saved: bool,
}

impl RecipeResponse {
    pub fn new(recipe: Recipe, saved: bool) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            ready_in_minutes: recipe.ready_in_minutes,
            servings: recipe.servings,
            diets: recipe.diets,
            summary: recipe.summary,
            saved,
        }
    }

    /// Annotates each recipe with its saved status.
    pub fn list(recipes: Vec<Recipe>, saved: &SavedRecipesContainer) -> Vec<Self> {
        let collection = saved.snapshot();
        recipes
            .into_iter()
            .map(|recipe| {
                let is_saved = collection.contains(recipe.id);
                Self::new(recipe, is_saved)
            })
            .collect()
    }
}

/// Recipe payload sent by the client when saving or planning a recipe
#[derive(Debug, Clone, Object)]
pub struct RecipeRequest {
    pub id: u64,
    pub title: String,
    /// Image URL; replaced by a placeholder when missing or invalid
    #[oai(default)]
    pub image: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    #[oai(default)]
    pub diets: Vec<String>,
    pub summary: Option<String>,
}

impl From<RecipeRequest> for Recipe {
    fn from(request: RecipeRequest) -> Self {
        Recipe {
            id: request.id,
            title: request.title,
            image: request.image,
            ready_in_minutes: request.ready_in_minutes,
            servings: request.servings,
            diets: request.diets,
            summary: request.summary,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<u64>,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    /// Ingredient line as written in the recipe
    pub original: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            amount: ingredient.amount,
            unit: ingredient.unit,
            original: ingredient.original,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct NutritionResponse {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl From<NutritionInfo> for NutritionResponse {
    fn from(info: NutritionInfo) -> Self {
        Self {
            calories: info.calories,
            protein: info.protein,
            carbs: info.carbs,
            fat: info.fat,
        }
    }
}

/// Full recipe with ingredients and instructions
#[derive(Debug, Clone, Object)]
pub struct RecipeDetailsResponse {
    #[oai(flatten)]
    pub recipe: RecipeResponse,
    pub instructions: String,
    pub extended_ingredients: Vec<IngredientResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub nutrition: Option<NutritionResponse>,
}

impl RecipeDetailsResponse {
    pub fn new(details: RecipeDetails, saved: bool) -> Self {
        Self {
            recipe: RecipeResponse::new(details.recipe, saved),
            instructions: details.instructions,
            extended_ingredients: details
                .extended_ingredients
                .into_iter()
                .map(Into::into)
                .collect(),
            nutrition: details.nutrition.map(Into::into),
        }
    }
}
