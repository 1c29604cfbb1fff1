//! Request History Window Tests
//!
//! Validates the sliding-window tracker: counting, eviction at capacity,
//! error handling, and the per-call engine parameter.

use lexidb::{
    DocumentId, DocumentStatus, Error, RequestHistory, SearchEngine, REQUEST_WINDOW_SIZE,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn test_engine() -> SearchEngine {
    let mut engine = SearchEngine::from_stop_words_text("and in on").unwrap();
    engine
        .add_document(1, "curly hedgehog and red collar", DocumentStatus::Actual, &[7])
        .unwrap();
    engine
        .add_document(2, "curly dog fashionable collar", DocumentStatus::Actual, &[2])
        .unwrap();
    engine
        .add_document(3, "big cat expressive eyes", DocumentStatus::Actual, &[5])
        .unwrap();
    engine
}

// ============================================================================
// Counting
// ============================================================================

/// Empty- and non-empty-result queries are tallied separately
#[test]
fn test_counts_empty_results_only() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    history.add_find_request(&engine, "curly dog").unwrap();
    history.add_find_request(&engine, "sparrow").unwrap();
    history.add_find_request(&engine, "big collar").unwrap();
    history.add_find_request(&engine, "wombat").unwrap();

    assert_eq!(history.len(), 4);
    assert_eq!(history.no_result_requests(), 2);
}

/// Tracked results equal a direct engine call with the same arguments
#[test]
fn test_tracked_results_match_direct_call() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    let tracked = history.add_find_request(&engine, "curly collar").unwrap();
    let direct = engine.find_top_documents("curly collar").unwrap();
    assert_eq!(tracked, direct);
}

/// The status and predicate variants feed the window the same way
#[test]
fn test_all_variants_record() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    history
        .add_find_request_with_status(&engine, "curly", DocumentStatus::Banned)
        .unwrap();
    history
        .add_find_request_with(
            &engine,
            "curly",
            |id: DocumentId, _status: DocumentStatus, _rating: i32| id > 100,
        )
        .unwrap();
    history.add_find_request(&engine, "curly").unwrap();

    assert_eq!(history.len(), 3);
    // The Banned-status and id>100 queries matched nothing.
    assert_eq!(history.no_result_requests(), 2);
}

/// A fresh history reports zero everywhere
#[test]
fn test_new_history_is_empty() {
    let history = RequestHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert_eq!(history.no_result_requests(), 0);
}

// ============================================================================
// Eviction
// ============================================================================

/// The reference scenario: 1440 empties then 3 hits leaves 1437 empties
#[test]
fn test_full_window_then_three_hits() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    for i in 0..REQUEST_WINDOW_SIZE {
        history
            .add_find_request(&engine, &format!("absent{i}"))
            .unwrap();
    }
    assert_eq!(history.no_result_requests(), REQUEST_WINDOW_SIZE);

    history.add_find_request(&engine, "curly").unwrap();
    history.add_find_request(&engine, "big").unwrap();
    history.add_find_request(&engine, "collar").unwrap();

    assert_eq!(history.len(), REQUEST_WINDOW_SIZE);
    assert_eq!(history.no_result_requests(), 1437);
}

/// Eviction only decrements the counter when the evicted entry was empty
#[test]
fn test_eviction_of_non_empty_entries_keeps_counter() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    // Oldest entries are all hits; the window then fills with misses.
    for _ in 0..3 {
        history.add_find_request(&engine, "curly").unwrap();
    }
    for i in 0..REQUEST_WINDOW_SIZE {
        history
            .add_find_request(&engine, &format!("absent{i}"))
            .unwrap();
    }

    // The three hits were evicted; every remaining entry is a miss.
    assert_eq!(history.len(), REQUEST_WINDOW_SIZE);
    assert_eq!(history.no_result_requests(), REQUEST_WINDOW_SIZE);
}

/// The window length never exceeds its capacity
#[test]
fn test_window_never_exceeds_capacity() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    for i in 0..(REQUEST_WINDOW_SIZE + 100) {
        history
            .add_find_request(&engine, &format!("absent{i}"))
            .unwrap();
        assert!(history.len() <= REQUEST_WINDOW_SIZE);
    }
    assert_eq!(history.no_result_requests(), REQUEST_WINDOW_SIZE);
}

// ============================================================================
// Errors and Mutation
// ============================================================================

/// A query that fails validation is not tracked at all
#[test]
fn test_invalid_queries_are_not_tracked() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    let err = history.add_find_request(&engine, "curly --dog").unwrap_err();
    assert!(matches!(err, Error::InvalidQueryWord(_)));
    assert!(history.is_empty());
    assert_eq!(history.no_result_requests(), 0);
}

/// The window reflects the current window, not all-time history
#[test]
fn test_counter_reflects_window_not_all_time() {
    let engine = test_engine();
    let mut history = RequestHistory::new();

    history.add_find_request(&engine, "absent").unwrap();
    for _ in 0..REQUEST_WINDOW_SIZE {
        history.add_find_request(&engine, "curly").unwrap();
    }

    // The single miss slid out of the window.
    assert_eq!(history.no_result_requests(), 0);
}

/// The engine may be mutated between tracked requests
#[test]
fn test_engine_mutation_between_requests() {
    let mut engine = SearchEngine::default();
    let mut history = RequestHistory::new();

    history.add_find_request(&engine, "wombat").unwrap();
    engine
        .add_document(10, "wombat burrow", DocumentStatus::Actual, &[])
        .unwrap();
    let results = history.add_find_request(&engine, "wombat").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 10);
    assert_eq!(history.no_result_requests(), 1);
}
