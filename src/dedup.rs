//! Exact-duplicate removal over an indexed corpus

use crate::document::DocumentId;
use crate::engine::SearchEngine;
use std::collections::HashSet;

/// Remove documents whose vocabulary duplicates an earlier document's.
///
/// Two documents are duplicates when their vocabulary SETS are equal; term
/// frequencies and word order play no part. The roster is scanned in
/// ascending id order, so the smallest id of each duplicate group survives.
/// Removal goes through [`SearchEngine::remove_document`], purging postings
/// and metadata alike. Returns the removed ids in ascending order.
///
/// # Example
///
/// ```
/// use lexidb::{remove_duplicates, DocumentStatus, SearchEngine};
///
/// let mut engine = SearchEngine::default();
/// engine.add_document(1, "a b", DocumentStatus::Actual, &[]).unwrap();
/// engine.add_document(2, "b a", DocumentStatus::Actual, &[]).unwrap();
/// engine.add_document(3, "a b c", DocumentStatus::Actual, &[]).unwrap();
///
/// assert_eq!(remove_duplicates(&mut engine), vec![2]);
/// assert_eq!(engine.document_count(), 2);
/// ```
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocumentId> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut duplicates = Vec::new();

    for id in engine.document_ids() {
        // Word-frequency keys are already sorted, so equal vocabularies
        // produce equal keys.
        let vocabulary: Vec<String> = engine.word_frequencies(id).keys().cloned().collect();
        if !seen.insert(vocabulary) {
            tracing::info!(target: "lexidb::dedup", id, "found duplicate document");
            duplicates.push(id);
        }
    }

    for &id in &duplicates {
        engine.remove_document(id);
    }
    duplicates
}
