//! Search engine public API
//!
//! This module provides:
//! - SearchEngine: stop words + inverted index behind one handle
//! - Document ingestion and removal with full validation
//! - Roster access (count, ascending ids, positional lookup)
//! - Per-document word frequency views and query matching
//! - The find_top_documents entry points over the ranking pipeline
//!
//! The engine is single-threaded by contract: methods take `&self`/`&mut self`
//! and there is no interior locking. Wrap it in a lock if it must be shared.

use crate::config::SearchConfig;
use crate::document::{average_rating, Document, DocumentId, DocumentStatus};
use crate::error::{Error, Result};
use crate::filter::{DocumentFilter, StatusFilter};
use crate::index::{DocumentMeta, InvertedIndex};
use crate::query::Query;
use crate::ranking;
use crate::tokenizer::{is_valid_word, split_words, StopWords};
use std::collections::BTreeMap;

/// In-process full-text search engine over an explicitly added corpus
///
/// Documents are plain strings with an id, a status and a rating list.
/// Queries are plain strings with optional `-minus` terms. Results are ranked
/// by TF-IDF, capped at [`MAX_RESULT_DOCUMENT_COUNT`].
///
/// # Example
///
/// ```
/// use lexidb::{DocumentStatus, SearchEngine};
///
/// let mut engine = SearchEngine::from_stop_words_text("and in on").unwrap();
/// engine
///     .add_document(1, "fluffy cat and fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
///     .unwrap();
///
/// let results = engine.find_top_documents("fluffy cat").unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id, 1);
/// ```
///
/// [`MAX_RESULT_DOCUMENT_COUNT`]: crate::MAX_RESULT_DOCUMENT_COUNT
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchEngine {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an engine from an already-built stop-word set.
    pub fn new(stop_words: StopWords) -> Self {
        SearchEngine {
            stop_words,
            index: InvertedIndex::new(),
        }
    }

    /// Create an engine from a collection of stop words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStopWord`] when a candidate contains a control
    /// character.
    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(StopWords::new(words)?))
    }

    /// Create an engine from a space-separated stop-word string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStopWord`] when a candidate contains a control
    /// character.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self::new(StopWords::parse(text)?))
    }

    /// Create an engine from a loaded [`SearchConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStopWord`] when the configured list contains a
    /// word with a control character.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        Self::with_stop_words(&config.stop_words)
    }

    /// The stop-word set this engine was built with.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    // ========================================================================
    // Corpus Updates
    // ========================================================================

    /// Add a document to the index.
    ///
    /// Term frequencies are computed over the token sequence AFTER stop-word
    /// removal; the per-document frequencies always sum to 1.0 (within float
    /// error). A document whose every word is a stop word is still indexed
    /// (it counts toward the corpus size) with an empty vocabulary. The
    /// rating stored is the integer mean of `ratings`, truncated toward zero,
    /// 0 for an empty list.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidId`] for a negative id
    /// - [`Error::DuplicateId`] when the id is already indexed
    /// - [`Error::InvalidDocumentWord`] when any token carries a control
    ///   character
    ///
    /// A failed call leaves the engine unchanged.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::InvalidId(id));
        }
        if self.index.contains(id) {
            return Err(Error::DuplicateId(id));
        }

        // Tokenization validates every word; the index is only touched once
        // the whole document is known to be good.
        let words = self.split_into_words_no_stop(text)?;

        let mut term_freqs: BTreeMap<String, f64> = BTreeMap::new();
        if !words.is_empty() {
            let tf_step = 1.0 / words.len() as f64;
            for word in &words {
                *term_freqs.entry((*word).to_string()).or_insert(0.0) += tf_step;
            }
        }

        let terms = term_freqs.len();
        self.index.insert(
            id,
            term_freqs,
            DocumentMeta {
                rating: average_rating(ratings),
                status,
            },
        );

        tracing::debug!(
            target: "lexidb::engine",
            id,
            terms,
            total_docs = self.index.len(),
            "document added"
        );
        Ok(())
    }

    /// Remove a document and every posting that mentions it.
    ///
    /// Removing an id that was never added is a silent no-op.
    pub fn remove_document(&mut self, id: DocumentId) {
        if self.index.remove(id) {
            tracing::debug!(
                target: "lexidb::engine",
                id,
                total_docs = self.index.len(),
                "document removed"
            );
        }
    }

    // ========================================================================
    // Roster Access
    // ========================================================================

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.index.len()
    }

    /// Iterate indexed document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.index.ids()
    }

    /// Id at a roster position (the roster is ordered ascending).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for positions outside `[0, count)`.
    pub fn document_id_at(&self, index: usize) -> Result<DocumentId> {
        self.index.ids().nth(index).ok_or(Error::OutOfRange {
            index,
            count: self.index.len(),
        })
    }

    /// Term -> frequency view of one document.
    ///
    /// Absent ids yield a shared empty map, not an error.
    pub fn word_frequencies(&self, id: DocumentId) -> &BTreeMap<String, f64> {
        self.index.term_frequencies(id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Match a query against one document.
    ///
    /// Returns the plus terms the document contains, in lexicographic order,
    /// together with the document's status. If the document contains ANY
    /// minus term the matched list is empty.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidQueryWord`] for malformed query tokens; query
    ///   validation runs before the id lookup
    /// - [`Error::DocumentNotFound`] when the id is not indexed
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let meta = self.index.meta(id).ok_or(Error::DocumentNotFound(id))?;
        let frequencies = self.index.term_frequencies(id);

        for term in &query.minus_terms {
            if frequencies.contains_key(term) {
                return Ok((Vec::new(), meta.status));
            }
        }

        let matched = query
            .plus_terms
            .iter()
            .filter(|term| frequencies.contains_key(*term))
            .cloned()
            .collect();
        Ok((matched, meta.status))
    }

    /// Rank documents for a query with the default filter (status Actual).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQueryWord`] for malformed query tokens.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Rank documents for a query, keeping one status only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQueryWord`] for malformed query tokens.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, StatusFilter(status))
    }

    /// Rank documents for a query with an arbitrary filter.
    ///
    /// The result holds at most [`MAX_RESULT_DOCUMENT_COUNT`] documents,
    /// ordered by descending relevance with rating tie-breaks (see
    /// [`RELEVANCE_EPSILON`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQueryWord`] for malformed query tokens.
    ///
    /// [`MAX_RESULT_DOCUMENT_COUNT`]: crate::MAX_RESULT_DOCUMENT_COUNT
    /// [`RELEVANCE_EPSILON`]: crate::RELEVANCE_EPSILON
    pub fn find_top_documents_with<F>(&self, raw_query: &str, filter: F) -> Result<Vec<Document>>
    where
        F: DocumentFilter,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let mut documents = ranking::find_all_documents(&self.index, &query, &filter);
        ranking::sort_and_truncate(&mut documents);

        tracing::debug!(
            target: "lexidb::engine",
            query = raw_query,
            results = documents.len(),
            "query ranked"
        );
        Ok(documents)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Tokenize document text, dropping stop words.
    ///
    /// Validity is checked on every token BEFORE stop-word membership, so an
    /// invalid token fails the call even when it would have been dropped as a
    /// stop word.
    fn split_into_words_no_stop<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let mut words = Vec::new();
        for word in split_words(text) {
            if !is_valid_word(word) {
                return Err(Error::InvalidDocumentWord(word.to_string()));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}
