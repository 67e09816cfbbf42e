use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared Spoonacular HTTP client configuration.
pub struct SpoonacularClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl SpoonacularClient {
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), DEFAULT_TIMEOUT)
    }

    pub fn with_base_url(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn complex_search_url(&self) -> String {
        format!("{}/recipes/complexSearch", self.base_url)
    }

    pub fn information_url(&self, id: u64) -> String {
        format!("{}/recipes/{}/information", self.base_url, id)
    }

    pub fn random_url(&self) -> String {
        format!("{}/recipes/random", self.base_url)
    }
}
