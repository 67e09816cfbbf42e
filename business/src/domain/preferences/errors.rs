#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferencesError {
    #[error("preferences.invalid_serving_size")]
    InvalidServingSize,
}
