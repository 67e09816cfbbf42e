use super::{
    cors_config, search_config::SearchConfig, server_config::ServerConfig,
    spoonacular_config::SpoonacularConfig, storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub spoonacular: SpoonacularConfig,
    pub storage: StorageConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Fails only when a required variable is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            spoonacular: SpoonacularConfig::from_env()?,
            storage: StorageConfig::from_env(),
            search: SearchConfig::from_env(),
        })
    }
}
