//! Core document types for the search engine
//!
//! This module defines the foundational types used throughout the crate:
//! - DocumentId: Integer identifier supplied by the caller
//! - DocumentStatus: Lifecycle status a document is indexed under
//! - Document: Ranked search result (id, relevance, rating)

use serde::{Deserialize, Serialize};

/// Caller-supplied document identifier
///
/// Ids are accepted as signed integers so the API can reject negative values
/// explicitly instead of silently coercing them (see [`Error::InvalidId`]).
///
/// [`Error::InvalidId`]: crate::Error::InvalidId
pub type DocumentId = i32;

// ============================================================================
// DocumentStatus
// ============================================================================

/// Lifecycle status a document is indexed under
///
/// Every indexed document carries exactly one status. The status never changes
/// after [`add_document`]; filtering by status happens at query time.
///
/// [`add_document`]: crate::SearchEngine::add_document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    /// Live document, matched by the default query filter
    #[default]
    Actual,
    /// Indexed but no longer relevant
    Irrelevant,
    /// Administratively excluded
    Banned,
    /// Marked for removal
    Removed,
}

// ============================================================================
// Document
// ============================================================================

/// A ranked search result
///
/// Produced by the ranking pipeline; never constructed by the index itself.
///
/// # Invariant
///
/// Within one result list, entries are ordered by descending `relevance`,
/// with ties closer than [`RELEVANCE_EPSILON`] broken by descending `rating`.
///
/// [`RELEVANCE_EPSILON`]: crate::RELEVANCE_EPSILON
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Document {
    /// Id the document was added under
    pub id: DocumentId,
    /// Accumulated TF-IDF relevance for the query
    pub relevance: f64,
    /// Average rating computed at add time
    pub rating: i32,
}

impl Document {
    /// Create a new result record
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

/// Integer mean of the submitted ratings, truncated toward zero
///
/// Returns 0 for an empty rating list. The sum is accumulated in `i64` so
/// large rating lists cannot overflow before the division.
pub(crate) fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
