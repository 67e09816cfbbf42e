use serde::{Deserialize, Serialize};

use super::image::sanitize_image;

/// Catalog identity of a recipe.
pub type RecipeId = u64;

/// Summary form of a recipe, as listed by search and kept in the saved
/// collection. Field names follow the upstream catalog so persisted records
/// stay readable by the browser client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Recipe {
    pub fn new(id: RecipeId, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: image.into(),
            ready_in_minutes: None,
            servings: None,
            diets: Vec::new(),
            summary: None,
        }
    }

    /// Returns the record with a renderable image reference, substituting
    /// the fallback placeholder when needed. Idempotent.
    pub fn sanitized(mut self) -> Self {
        self.image = sanitize_image(&self.image);
        self
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    /// Display line as written by the recipe author.
    #[serde(default)]
    pub original: String,
}

/// Nutrition facts kept as display strings; upstream formats them
/// inconsistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionInfo>,
}

impl RecipeDetails {
    pub fn sanitized(mut self) -> Self {
        self.recipe = self.recipe.sanitized();
        self
    }

    pub fn summary(&self) -> Recipe {
        self.recipe.clone()
    }
}
