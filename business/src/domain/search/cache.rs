use chrono::{DateTime, Duration, Utc};

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::SearchResults;

use super::model::{SearchPage, SearchSession, SearchSnapshot};

/// Query generation a fetch was issued under. Bumped whenever the current
/// session is replaced or search is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Proof that a fetch was started; hand it back with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: Generation,
    pub query: String,
    pub offset: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryChange {
    /// Blank query: nothing to fetch, nothing to show.
    Disabled,
    /// A fresh session was started.
    Started,
    /// The current session continues.
    Resumed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// Issued for a query that is no longer current; ignored.
    Stale,
    /// Offset no longer fits the session; ignored.
    OutOfOrder,
}

/// Incrementally loaded search results for the current query.
///
/// Holds one session at a time and allows one outstanding fetch. The cache
/// does no I/O: callers take a [`FetchTicket`], perform the request, and
/// report back through [`SearchCache::complete`].
pub struct SearchCache {
    generation: u64,
    session: Option<SearchSession>,
    in_flight: Option<FetchTicket>,
    error: Option<RecipeError>,
    page_size: u32,
    stale_after: Duration,
}

impl SearchCache {
    pub fn new(page_size: u32, stale_after: Duration) -> Self {
        Self {
            generation: 0,
            session: None,
            in_flight: None,
            error: None,
            page_size: page_size.max(1),
            stale_after,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    /// Begins or resumes the session for `text`.
    pub fn query(&mut self, text: &str, now: DateTime<Utc>) -> QueryChange {
        let text = text.trim();
        if text.is_empty() {
            if self.session.is_some() || self.in_flight.is_some() {
                self.reset();
            }
            return QueryChange::Disabled;
        }

        if let Some(session) = &self.session {
            if session.query() == text && !session.is_stale(now, self.stale_after) {
                return QueryChange::Resumed;
            }
        }

        self.reset();
        self.session = Some(SearchSession::new(text, now));
        QueryChange::Started
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.session = None;
        self.in_flight = None;
        self.error = None;
    }

    /// Starts a fetch at `cursor`, unless search is disabled, a fetch is
    /// already outstanding, or the offset was already passed.
    pub fn begin_fetch(&mut self, cursor: u32) -> Option<FetchTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        let session = self.session.as_ref()?;
        if !session.accepts_offset(cursor) {
            return None;
        }

        let ticket = FetchTicket {
            generation: Generation(self.generation),
            query: session.query().to_string(),
            offset: cursor,
            page_size: self.page_size,
        };
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    /// Starts the first page of the session if it has none yet.
    pub fn begin_first_page(&mut self) -> Option<FetchTicket> {
        match &self.session {
            Some(session) if session.pages().is_empty() => self.begin_fetch(0),
            _ => None,
        }
    }

    /// Starts the page after the last one, when more are available.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        let session = self.session.as_ref()?;
        if session.pages().is_empty() || !session.has_more() {
            return None;
        }
        let cursor = session.next_cursor();
        self.begin_fetch(cursor)
    }

    /// Records the outcome of the fetch behind `ticket`.
    ///
    /// Responses for an earlier generation are dropped without touching the
    /// current session. Failures keep previously fetched pages.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<SearchResults, RecipeError>,
    ) -> Completion {
        if ticket.generation != Generation(self.generation) {
            return Completion::Stale;
        }
        if self.in_flight.as_ref() == Some(ticket) {
            self.in_flight = None;
        }
        let Some(session) = self.session.as_mut() else {
            return Completion::Stale;
        };

        match result {
            Ok(results) => {
                let page = SearchPage {
                    results: results
                        .results
                        .into_iter()
                        .map(Recipe::sanitized)
                        .collect(),
                    offset: ticket.offset,
                    page_size: ticket.page_size,
                    total_results: results.total_results,
                };
                if session.push(page) {
                    self.error = None;
                    Completion::Applied
                } else {
                    Completion::OutOfOrder
                }
            }
            Err(err) => {
                self.error = Some(err);
                Completion::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn flatten_results(&self) -> Vec<Recipe> {
        self.session
            .as_ref()
            .map(SearchSession::flatten_results)
            .unwrap_or_default()
    }

    pub fn has_more(&self) -> bool {
        self.session.as_ref().is_some_and(SearchSession::has_more)
    }

    pub fn next_cursor(&self) -> u32 {
        self.session.as_ref().map_or(0, SearchSession::next_cursor)
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        let Some(session) = &self.session else {
            return SearchSnapshot::disabled();
        };

        SearchSnapshot {
            query: Some(session.query().to_string()),
            results: session.flatten_results(),
            is_loading: self.is_loading(),
            error: self.error.clone(),
            has_more: session.has_more(),
            next_cursor: session.next_cursor(),
            total_results: session.total_results(),
        }
    }
}
