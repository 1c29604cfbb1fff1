//! Request history tracking
//!
//! This module provides:
//! - RequestHistory: a sliding window over the most recent queries
//! - An O(1) counter of queries that produced no results
//!
//! The window holds one entry per tracked request, newest at the front,
//! capped at [`REQUEST_WINDOW_SIZE`]. The tracker does not own the engine;
//! every `add_find_request*` call takes it as a parameter, so the caller can
//! keep mutating the corpus between queries.

use crate::document::{Document, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::filter::DocumentFilter;
use std::collections::VecDeque;

/// Number of requests the history window holds: one per minute of a day.
pub const REQUEST_WINDOW_SIZE: usize = 1440;

/// One tracked request
#[derive(Debug, Clone, Copy)]
struct RequestRecord {
    no_results: bool,
}

/// Sliding window over the most recent search requests
///
/// Successful queries are recorded (newest first) and the oldest entries are
/// evicted once the window exceeds [`REQUEST_WINDOW_SIZE`]. Queries that fail
/// validation are NOT recorded; the error propagates to the caller.
///
/// # Example
///
/// ```
/// use lexidb::{DocumentStatus, RequestHistory, SearchEngine};
///
/// let mut engine = SearchEngine::default();
/// engine.add_document(1, "fluffy cat", DocumentStatus::Actual, &[]).unwrap();
///
/// let mut history = RequestHistory::new();
/// history.add_find_request(&engine, "cat").unwrap();
/// history.add_find_request(&engine, "dog").unwrap();
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.no_result_requests(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RequestHistory {
    requests: VecDeque<RequestRecord>,
    no_result_count: usize,
}

impl RequestHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a query with the default filter (status Actual) and track it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQueryWord`] for malformed query tokens; the
    /// failed request is not tracked.
    ///
    /// [`Error::InvalidQueryWord`]: crate::Error::InvalidQueryWord
    pub fn add_find_request(
        &mut self,
        engine: &SearchEngine,
        raw_query: &str,
    ) -> Result<Vec<Document>> {
        self.add_find_request_with_status(engine, raw_query, DocumentStatus::Actual)
    }

    /// Run a query keeping one status only, and track it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQueryWord`] for malformed query tokens; the
    /// failed request is not tracked.
    ///
    /// [`Error::InvalidQueryWord`]: crate::Error::InvalidQueryWord
    pub fn add_find_request_with_status(
        &mut self,
        engine: &SearchEngine,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let results = engine.find_top_documents_with_status(raw_query, status)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Run a query with an arbitrary filter and track it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQueryWord`] for malformed query tokens; the
    /// failed request is not tracked.
    ///
    /// [`Error::InvalidQueryWord`]: crate::Error::InvalidQueryWord
    pub fn add_find_request_with<F>(
        &mut self,
        engine: &SearchEngine,
        raw_query: &str,
        filter: F,
    ) -> Result<Vec<Document>>
    where
        F: DocumentFilter,
    {
        let results = engine.find_top_documents_with(raw_query, filter)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Number of tracked requests currently in the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the window holds no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Number of tracked requests that produced no results.
    ///
    /// Maintained incrementally; this is O(1), not a window scan.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    fn record(&mut self, no_results: bool) {
        self.requests.push_front(RequestRecord { no_results });
        if no_results {
            self.no_result_count += 1;
        }
        while self.requests.len() > REQUEST_WINDOW_SIZE {
            if let Some(evicted) = self.requests.pop_back() {
                if evicted.no_results {
                    self.no_result_count -= 1;
                }
            }
        }
    }
}
