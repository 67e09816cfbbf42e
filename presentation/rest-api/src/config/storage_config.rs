use std::path::PathBuf;

use persistence::backend::StorageBackendConfig;

const DEFAULT_STORAGE_DIR: &str = ".meal-planner";

/// Where saved recipes, the meal plan and preferences are kept.
pub struct StorageConfig {
    pub backend: StorageBackendConfig,
}

impl StorageConfig {
    /// Environment variables:
    /// - STORAGE_DIR: directory for the JSON files (default ".meal-planner");
    ///   set it to an empty string to keep everything in memory
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("STORAGE_DIR").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let backend = match value {
            Some(dir) if dir.trim().is_empty() => StorageBackendConfig::Memory,
            Some(dir) => StorageBackendConfig::Directory(PathBuf::from(dir)),
            None => StorageBackendConfig::Directory(PathBuf::from(DEFAULT_STORAGE_DIR)),
        };
        Self { backend }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_directory_when_unset() {
        let config = StorageConfig::from_value(None);

        assert_eq!(
            config.backend,
            StorageBackendConfig::Directory(PathBuf::from(".meal-planner"))
        );
    }

    #[test]
    fn should_use_memory_when_blank() {
        let config = StorageConfig::from_value(Some("  ".to_string()));

        assert_eq!(config.backend, StorageBackendConfig::Memory);
    }
}
