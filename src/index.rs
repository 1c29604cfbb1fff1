//! Inverted index storage
//!
//! This module provides:
//! - Term -> (document id -> term frequency) posting maps
//! - A per-document term frequency view (backs word lookups and dedup)
//! - Document metadata (rating, status) keyed by id
//! - IDF computation over the whole corpus
//!
//! All maps are ordered (`BTreeMap`/`BTreeSet` keys): iteration order is an
//! observable output property of the engine (result materialization, matched
//! word order, roster order), so the storage layer keeps everything sorted
//! instead of sorting at the edges.

use crate::document::{DocumentId, DocumentStatus};
use std::collections::BTreeMap;

/// Shared empty view returned for absent document ids.
static EMPTY_FREQUENCIES: BTreeMap<String, f64> = BTreeMap::new();

/// Per-document metadata captured at add time
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentMeta {
    /// Average rating, truncated toward zero
    pub rating: i32,
    /// Status the document was added under
    pub status: DocumentStatus,
}

/// Inverted index over an explicitly added corpus
///
/// Documents enter through [`insert`] fully tokenized; the index never sees
/// raw text. The ascending key order of `metadata` doubles as the id roster.
///
/// [`insert`]: InvertedIndex::insert
#[derive(Debug, Default)]
pub(crate) struct InvertedIndex {
    /// Term -> (document id -> term frequency)
    postings: BTreeMap<String, BTreeMap<DocumentId, f64>>,

    /// Document id -> (term -> term frequency), for per-document lookups
    /// and O(vocabulary) removal
    document_terms: BTreeMap<DocumentId, BTreeMap<String, f64>>,

    /// Document id -> metadata; key order is the roster
    metadata: BTreeMap<DocumentId, DocumentMeta>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Insert a tokenized document.
    ///
    /// The caller has already validated the id and the tokens; `term_freqs`
    /// may be empty (a document whose every word was a stop word still counts
    /// toward the corpus size and the IDF denominator).
    pub(crate) fn insert(
        &mut self,
        id: DocumentId,
        term_freqs: BTreeMap<String, f64>,
        meta: DocumentMeta,
    ) {
        for (term, tf) in &term_freqs {
            self.postings.entry(term.clone()).or_default().insert(id, *tf);
        }
        self.document_terms.insert(id, term_freqs);
        self.metadata.insert(id, meta);
    }

    /// Remove a document, purging every posting it appears in.
    ///
    /// Term entries whose posting map becomes empty are dropped entirely.
    /// Returns false (and changes nothing) when the id is absent.
    pub(crate) fn remove(&mut self, id: DocumentId) -> bool {
        let Some(terms) = self.document_terms.remove(&id) else {
            return false;
        };

        for term in terms.keys() {
            if let Some(posting) = self.postings.get_mut(term) {
                posting.remove(&id);
                if posting.is_empty() {
                    self.postings.remove(term);
                }
            }
        }

        self.metadata.remove(&id);
        true
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Whether a document id is indexed.
    pub(crate) fn contains(&self, id: DocumentId) -> bool {
        self.metadata.contains_key(&id)
    }

    /// Number of indexed documents.
    pub(crate) fn len(&self) -> usize {
        self.metadata.len()
    }

    /// Whether the index holds no documents.
    pub(crate) fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Number of distinct indexed terms.
    pub(crate) fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Ascending iterator over indexed document ids.
    pub(crate) fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.metadata.keys().copied()
    }

    /// Metadata for a document id.
    pub(crate) fn meta(&self, id: DocumentId) -> Option<DocumentMeta> {
        self.metadata.get(&id).copied()
    }

    /// Term -> frequency view of one document; the shared empty map for
    /// absent ids.
    pub(crate) fn term_frequencies(&self, id: DocumentId) -> &BTreeMap<String, f64> {
        self.document_terms.get(&id).unwrap_or(&EMPTY_FREQUENCIES)
    }

    /// Posting map for a term, if any document contains it.
    pub(crate) fn postings(&self, term: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.postings.get(term)
    }

    /// Inverse document frequency of a term: `ln(corpus size / document
    /// frequency)`, or `None` for terms absent from the corpus.
    pub(crate) fn idf(&self, term: &str) -> Option<f64> {
        let df = self.postings.get(term)?.len();
        Some((self.len() as f64 / df as f64).ln())
    }
}
