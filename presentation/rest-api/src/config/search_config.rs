use chrono::Duration;

use business::domain::search::model::DEFAULT_PAGE_SIZE;

use super::env_parse;

const DEFAULT_STALE_SECS: i64 = 300;
const MAX_PAGE_SIZE: u32 = 100;

/// Paging and caching knobs for recipe search.
pub struct SearchConfig {
    pub page_size: u32,
    pub stale_after: Duration,
}

impl SearchConfig {
    /// Environment variables:
    /// - SEARCH_PAGE_SIZE: results per page, 1..=100 (default 12)
    /// - SEARCH_STALE_SECS: seconds before a cached search is refetched (default 300)
    pub fn from_env() -> Self {
        Self::new(
            env_parse("SEARCH_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            env_parse("SEARCH_STALE_SECS", DEFAULT_STALE_SECS),
        )
    }

    fn new(page_size: u32, stale_secs: i64) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            stale_after: Duration::seconds(stale_secs.max(0)),
        }
    }
}
