/// Logical keys understood by the durable store.
///
/// Each key is read and written by exactly one feature; there are no
/// cross-key transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    SavedRecipes,
    MealPlan,
    UserPreferences,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::SavedRecipes,
        StorageKey::MealPlan,
        StorageKey::UserPreferences,
    ];

    /// Name of the record in the underlying medium.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::SavedRecipes => "savedRecipes",
            StorageKey::MealPlan => "mealPlan",
            StorageKey::UserPreferences => "userPreferences",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKey::SavedRecipes => write!(f, "SAVED_RECIPES"),
            StorageKey::MealPlan => write!(f, "MEAL_PLAN"),
            StorageKey::UserPreferences => write!(f, "USER_PREFERENCES"),
        }
    }
}

impl std::str::FromStr for StorageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StorageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s || key.to_string() == s)
            .ok_or_else(|| format!("Invalid storage key: {}", s))
    }
}
