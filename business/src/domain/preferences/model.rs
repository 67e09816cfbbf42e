use serde::{Deserialize, Serialize};

use crate::domain::preferences::errors::PreferencesError;

pub const DEFAULT_SERVING_SIZE: u32 = 2;
pub const MAX_SERVING_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
    #[serde(default = "default_serving_size")]
    pub serving_size: u32,
}

fn default_serving_size() -> u32 {
    DEFAULT_SERVING_SIZE
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dietary_restrictions: Vec::new(),
            excluded_ingredients: Vec::new(),
            serving_size: DEFAULT_SERVING_SIZE,
        }
    }
}

impl UserPreferences {
    pub fn new(
        dietary_restrictions: Vec<String>,
        excluded_ingredients: Vec<String>,
        serving_size: u32,
    ) -> Result<Self, PreferencesError> {
        if !(1..=MAX_SERVING_SIZE).contains(&serving_size) {
            return Err(PreferencesError::InvalidServingSize);
        }

        Ok(Self {
            dietary_restrictions: normalize(dietary_restrictions),
            excluded_ingredients: normalize(excluded_ingredients),
            serving_size,
        })
    }
}

/// Trims entries, drops blanks and repeats while keeping first-seen order.
fn normalize(entries: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.trim();
        if !entry.is_empty() && !seen.iter().any(|s: &String| s.eq_ignore_ascii_case(entry)) {
            seen.push(entry.to_string());
        }
    }
    seen
}
