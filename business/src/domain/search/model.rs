use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// One fetched page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub results: Vec<Recipe>,
    pub offset: u32,
    pub page_size: u32,
    /// Total reported upstream when the page was fetched, if any.
    pub total_results: Option<u32>,
}

impl SearchPage {
    pub fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.page_size)
    }

    /// An unknown total counts as "no more pages".
    pub fn has_more(&self) -> bool {
        match self.total_results {
            Some(total) => self.next_offset() < total,
            None => false,
        }
    }
}

/// Pages fetched so far for one query, in strictly increasing offset order.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    pages: Vec<SearchPage>,
    started_at: DateTime<Utc>,
}

impl SearchSession {
    pub fn new(query: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            query: query.into(),
            pages: Vec::new(),
            started_at,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pages(&self) -> &[SearchPage] {
        &self.pages
    }

    pub fn is_stale(&self, now: DateTime<Utc>, stale_after: Duration) -> bool {
        !self.pages.is_empty() && now - self.started_at >= stale_after
    }

    /// True when a page at `offset` may still be fetched for this session.
    pub fn accepts_offset(&self, offset: u32) -> bool {
        self.pages.last().is_none_or(|last| offset > last.offset)
    }

    /// Appends `page` if it keeps offsets strictly increasing.
    pub fn push(&mut self, page: SearchPage) -> bool {
        if !self.accepts_offset(page.offset) {
            return false;
        }
        self.pages.push(page);
        true
    }

    /// All fetched results in offset order, each recipe id listed once.
    pub fn flatten_results(&self) -> Vec<Recipe> {
        let mut seen = HashSet::new();
        self.pages
            .iter()
            .flat_map(|page| page.results.iter())
            .filter(|recipe| seen.insert(recipe.id))
            .cloned()
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.pages.last().is_some_and(SearchPage::has_more)
    }

    pub fn next_cursor(&self) -> u32 {
        self.pages.last().map_or(0, SearchPage::next_offset)
    }

    pub fn total_results(&self) -> Option<u32> {
        self.pages.last().and_then(|page| page.total_results)
    }
}

/// What the presentation layer renders for the current search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    /// `None` while searching is disabled (blank query).
    pub query: Option<String>,
    pub results: Vec<Recipe>,
    pub is_loading: bool,
    pub error: Option<RecipeError>,
    pub has_more: bool,
    pub next_cursor: u32,
    pub total_results: Option<u32>,
}

impl SearchSnapshot {
    pub fn disabled() -> Self {
        Self {
            query: None,
            results: Vec::new(),
            is_loading: false,
            error: None,
            has_more: false,
            next_cursor: 0,
            total_results: None,
        }
    }
}
