//! Result filtering
//!
//! This module provides:
//! - DocumentFilter trait for pluggable result predicates
//! - StatusFilter: keep documents carrying one status (the default path)
//! - AllDocuments: keep everything
//! - A blanket impl so plain closures work as filters

use crate::document::{DocumentId, DocumentStatus};

// ============================================================================
// DocumentFilter Trait
// ============================================================================

/// Pluggable result predicate
///
/// The ranking pipeline consults the filter once per candidate posting,
/// BEFORE relevance accumulation: a rejected document contributes nothing and
/// never reaches the result list. Minus-word vetoes apply independently of
/// the filter and cannot be overridden by it.
///
/// Closures with the matching signature implement this trait automatically:
///
/// ```
/// use lexidb::{DocumentFilter, DocumentStatus};
///
/// let even_ids = |id: i32, _status: DocumentStatus, _rating: i32| id % 2 == 0;
/// assert!(even_ids.matches(4, DocumentStatus::Actual, 0));
/// assert!(!even_ids.matches(3, DocumentStatus::Actual, 0));
/// ```
pub trait DocumentFilter {
    /// Decide whether a document may appear in results.
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentFilter for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool,
{
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(id, status, rating)
    }
}

// ============================================================================
// Built-in Filters
// ============================================================================

/// Keep documents indexed under one status
///
/// `StatusFilter::default()` keeps [`DocumentStatus::Actual`] documents,
/// which is also what the plain `find_top_documents` entry point uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFilter(
    /// Status a document must carry to pass the filter
    pub DocumentStatus,
);

impl DocumentFilter for StatusFilter {
    fn matches(&self, _id: DocumentId, status: DocumentStatus, _rating: i32) -> bool {
        status == self.0
    }
}

/// Keep every document regardless of id, status or rating
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDocuments;

impl DocumentFilter for AllDocuments {
    fn matches(&self, _id: DocumentId, _status: DocumentStatus, _rating: i32) -> bool {
        true
    }
}
