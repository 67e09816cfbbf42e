pub mod app_config;
pub mod cors_config;
pub mod search_config;
pub mod server_config;
pub mod spoonacular_config;
pub mod storage_config;

/// Reads `key` from the environment, falling back to `default` when unset or unparsable.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
