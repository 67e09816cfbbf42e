use std::time::Duration;

use anyhow::Context;
use spoonacular::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SpoonacularClient};

use super::env_parse;

/// Configuration for Spoonacular API access.
pub struct SpoonacularConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl SpoonacularConfig {
    /// Environment variables:
    /// - SPOONACULAR_API_KEY: API key (required)
    /// - SPOONACULAR_BASE_URL: default "https://api.spoonacular.com"
    /// - SPOONACULAR_TIMEOUT_SECS: request timeout, default 30
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("SPOONACULAR_API_KEY environment variable must be set")?;
        let base_url =
            std::env::var("SPOONACULAR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = Duration::from_secs(env_parse(
            "SPOONACULAR_TIMEOUT_SECS",
            DEFAULT_TIMEOUT.as_secs(),
        ));

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    pub fn client(&self) -> anyhow::Result<SpoonacularClient> {
        SpoonacularClient::with_base_url(self.api_key.clone(), self.base_url.clone(), self.timeout)
            .context("Failed to build Spoonacular HTTP client")
    }
}
