use std::sync::Arc;

use crate::domain::recipe::model::{Recipe, RecipeId};

use super::model::SavedRecipeCollection;

/// The only ways the saved collection can change.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedRecipeAction {
    /// Append a recipe unless its id is already saved.
    Add(Recipe),
    /// Drop the recipe with this id, if any.
    Remove(RecipeId),
    /// Install a whole collection; used when hydrating from storage.
    ReplaceAll(Vec<Recipe>),
}

/// Pure transition from `state` under `action`.
///
/// A transition that changes nothing hands back the same `Arc`, so callers
/// can tell a no-op apart with `Arc::ptr_eq`. Incoming records are given a
/// renderable image before they enter the collection.
pub fn reduce(
    state: &Arc<SavedRecipeCollection>,
    action: SavedRecipeAction,
) -> Arc<SavedRecipeCollection> {
    match action {
        SavedRecipeAction::Add(recipe) => {
            if state.contains(recipe.id) {
                Arc::clone(state)
            } else {
                Arc::new(state.appended(recipe.sanitized()))
            }
        }
        SavedRecipeAction::Remove(id) => {
            if state.contains(id) {
                Arc::new(state.without(id))
            } else {
                Arc::clone(state)
            }
        }
        SavedRecipeAction::ReplaceAll(recipes) => Arc::new(SavedRecipeCollection::from_recipes(
            recipes.into_iter().map(Recipe::sanitized).collect(),
        )),
    }
}
