//! Wire shapes of the Spoonacular responses the catalog reads.

use serde::Deserialize;

use business::domain::recipe::model::{Ingredient, NutritionInfo, Recipe, RecipeDetails};

const MISSING_NUTRIENT: &str = "n/a";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexSearchResponse {
    #[serde(default)]
    pub results: Vec<RecipeDto>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RandomRecipesResponse {
    #[serde(default)]
    pub recipes: Vec<RecipeDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl RecipeDto {
    pub fn into_domain(self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            image: self.image.unwrap_or_default(),
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            diets: self.diets,
            summary: self.summary,
        }
        .sanitized()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformationDto {
    #[serde(flatten)]
    pub recipe: RecipeDto,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<IngredientDto>,
    #[serde(default)]
    pub nutrition: Option<NutritionDto>,
}

impl RecipeInformationDto {
    pub fn into_domain(self) -> RecipeDetails {
        RecipeDetails {
            recipe: self.recipe.into_domain(),
            instructions: self.instructions.unwrap_or_default(),
            extended_ingredients: self
                .extended_ingredients
                .into_iter()
                .map(IngredientDto::into_domain)
                .collect(),
            nutrition: self.nutrition.and_then(NutritionDto::into_domain),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IngredientDto {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub original: String,
}

impl IngredientDto {
    fn into_domain(self) -> Ingredient {
        Ingredient {
            id: self.id,
            name: self.name,
            amount: self.amount,
            unit: self.unit,
            original: self.original,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NutritionDto {
    #[serde(default)]
    pub nutrients: Vec<NutrientDto>,
}

#[derive(Debug, Deserialize)]
pub struct NutrientDto {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

impl NutritionDto {
    /// `None` when none of the four headline nutrients are reported.
    fn into_domain(self) -> Option<NutritionInfo> {
        let find = |name: &str| {
            self.nutrients
                .iter()
                .find(|n| n.name.eq_ignore_ascii_case(name))
                .map(|n| format!("{:.0} {}", n.amount, n.unit).trim_end().to_string())
        };

        let calories = find("Calories");
        let protein = find("Protein");
        let carbs = find("Carbohydrates");
        let fat = find("Fat");

        if calories.is_none() && protein.is_none() && carbs.is_none() && fat.is_none() {
            return None;
        }

        let or_missing = |value: Option<String>| value.unwrap_or_else(|| MISSING_NUTRIENT.into());
        Some(NutritionInfo {
            calories: or_missing(calories),
            protein: or_missing(protein),
            carbs: or_missing(carbs),
            fat: or_missing(fat),
        })
    }
}
