//! TF-IDF ranking
//!
//! This module provides:
//! - Relevance accumulation over plus-term postings, gated by a filter
//! - The minus-term veto
//! - The deterministic result comparator (relevance, then rating within
//!   epsilon, then ascending id via stable sort)
//! - Top-K truncation

use crate::document::Document;
use crate::filter::DocumentFilter;
use crate::index::InvertedIndex;
use crate::query::Query;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Maximum number of documents a query returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance difference below which two results count as tied.
///
/// Tied results are ordered by descending rating; see [`Document`].
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Score every candidate document for a parsed query.
///
/// For each plus term present in the corpus, `idf * tf` is accumulated into
/// the candidate's relevance, skipping documents the filter rejects. Every
/// document containing any minus term is then dropped outright, filter or
/// not. Results come back in ascending id order (the accumulator is a
/// `BTreeMap`), unsorted by relevance.
pub(crate) fn find_all_documents<F>(
    index: &InvertedIndex,
    query: &Query,
    filter: &F,
) -> Vec<Document>
where
    F: DocumentFilter,
{
    let mut relevance: BTreeMap<crate::document::DocumentId, f64> = BTreeMap::new();

    for term in &query.plus_terms {
        let Some(postings) = index.postings(term) else {
            continue;
        };
        let idf = index.idf(term).unwrap_or(0.0);

        for (&id, &tf) in postings {
            let Some(meta) = index.meta(id) else {
                continue;
            };
            if filter.matches(id, meta.status, meta.rating) {
                *relevance.entry(id).or_insert(0.0) += idf * tf;
            }
        }
    }

    for term in &query.minus_terms {
        let Some(postings) = index.postings(term) else {
            continue;
        };
        for &id in postings.keys() {
            relevance.remove(&id);
        }
    }

    relevance
        .into_iter()
        .map(|(id, relevance)| {
            let rating = index.meta(id).map(|m| m.rating).unwrap_or(0);
            Document::new(id, relevance, rating)
        })
        .collect()
}

/// Order results: descending relevance, descending rating within
/// [`RELEVANCE_EPSILON`], ascending id for full ties (via stable sort over
/// the ascending-id input).
pub(crate) fn compare_documents(lhs: &Document, rhs: &Document) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.relevance
            .partial_cmp(&lhs.relevance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Sort candidates with [`compare_documents`] and keep the best
/// [`MAX_RESULT_DOCUMENT_COUNT`].
pub(crate) fn sort_and_truncate(documents: &mut Vec<Document>) {
    documents.sort_by(compare_documents);
    documents.truncate(MAX_RESULT_DOCUMENT_COUNT);
}
