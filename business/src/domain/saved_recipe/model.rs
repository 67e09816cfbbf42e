use std::collections::HashSet;

use serde::Serialize;

use crate::domain::recipe::model::{Recipe, RecipeId};

/// Ordered set of saved recipes keyed by id.
///
/// Insertion order is kept for display; no two elements share an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SavedRecipeCollection {
    recipes: Vec<Recipe>,
}

impl SavedRecipeCollection {
    /// Builds a collection, keeping the first occurrence of each id.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut seen = HashSet::with_capacity(recipes.len());
        let recipes = recipes
            .into_iter()
            .filter(|recipe| seen.insert(recipe.id))
            .collect();
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == id)
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.recipes.iter().map(|recipe| recipe.id)
    }

    pub(crate) fn appended(&self, recipe: Recipe) -> Self {
        let mut recipes = Vec::with_capacity(self.recipes.len() + 1);
        recipes.extend_from_slice(&self.recipes);
        recipes.push(recipe);
        Self { recipes }
    }

    pub(crate) fn without(&self, id: RecipeId) -> Self {
        Self {
            recipes: self
                .recipes
                .iter()
                .filter(|recipe| recipe.id != id)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::recipe;

    #[test]
    fn should_keep_first_occurrence_when_ids_repeat() {
        let collection = SavedRecipeCollection::from_recipes(vec![
            recipe(1, "first"),
            recipe(2, "second"),
            recipe(1, "duplicate"),
        ]);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).unwrap().title, "first");
        assert_eq!(collection.ids().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn should_serialize_as_plain_array() {
        let collection = SavedRecipeCollection::from_recipes(vec![recipe(5, "Tacos")]);

        let value = serde_json::to_value(&collection).unwrap();

        assert!(value.is_array());
        assert_eq!(value[0]["id"], 5);
    }
}
