//! Query parsing for the search engine
//!
//! This module turns a raw query string into disjoint plus/minus term sets:
//! - Each token is validated (no control characters), independent of
//!   stop-word membership
//! - A single leading `-` marks a minus term and is stripped
//! - Stop words are discarded from both polarities
//! - A term appearing both ways ends up minus only (the veto always wins)

use crate::error::{Error, Result};
use crate::tokenizer::{is_valid_word, split_words, StopWords};
use std::collections::BTreeSet;

/// A parsed query: disjoint plus/minus term sets
///
/// Term sets are ordered lexicographically, which is also the order matched
/// words are reported in by [`match_document`].
///
/// [`match_document`]: crate::SearchEngine::match_document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Terms a document must be scored on
    pub plus_terms: BTreeSet<String>,
    /// Terms that veto a document outright
    pub minus_terms: BTreeSet<String>,
}

/// One classified query token (internal to parsing)
struct QueryWord {
    text: String,
    is_minus: bool,
    is_stop: bool,
}

impl Query {
    /// Parse a raw query against a stop-word set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQueryWord`] naming the offending raw token when
    /// a token contains a control character, is a bare `-`, or starts with
    /// `--` after the minus marker.
    ///
    /// # Example
    ///
    /// ```
    /// use lexidb::{Query, StopWords};
    ///
    /// let stop = StopWords::parse("the").unwrap();
    /// let query = Query::parse("fluffy the cat -collar", &stop).unwrap();
    /// assert!(query.plus_terms.contains("fluffy"));
    /// assert!(query.minus_terms.contains("collar"));
    /// assert!(!query.plus_terms.contains("the"));
    /// ```
    pub fn parse(text: &str, stop_words: &StopWords) -> Result<Self> {
        let mut query = Query::default();

        for token in split_words(text) {
            let word = parse_query_word(token, stop_words)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_terms.insert(word.text);
            } else {
                query.plus_terms.insert(word.text);
            }
        }

        // A term listed both ways acts as minus only.
        let minus = &query.minus_terms;
        query.plus_terms.retain(|term| !minus.contains(term));

        Ok(query)
    }

    /// Whether the query carries no terms at all.
    pub fn is_empty(&self) -> bool {
        self.plus_terms.is_empty() && self.minus_terms.is_empty()
    }
}

/// Classify one raw token.
///
/// Validation order matters: the minus marker is stripped first, then the
/// remainder must be non-empty, must not start with another `-`, and must
/// contain no control characters. Stop-word membership is checked last and
/// never masks a validation error.
fn parse_query_word(token: &str, stop_words: &StopWords) -> Result<QueryWord> {
    let (word, is_minus) = match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    if word.is_empty() || word.starts_with('-') || !is_valid_word(word) {
        return Err(Error::InvalidQueryWord(token.to_string()));
    }

    Ok(QueryWord {
        text: word.to_string(),
        is_minus,
        is_stop: stop_words.contains(word),
    })
}
