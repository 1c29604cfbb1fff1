//! Text tokenizer for the search engine
//!
//! Pipeline: split on single ASCII spaces → validate (no control characters)
//!           → remove stop words
//!
//! Splitting is deliberately minimal: the engine treats any run of non-space
//! characters as one token and leaves case, punctuation and non-ASCII text
//! untouched. Validation and stop-word removal happen at the call sites that
//! need them (document ingestion and query parsing).

use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// Split text on single ASCII spaces.
///
/// Consecutive spaces produce no empty tokens; leading and trailing spaces
/// are ignored. The result is a materialized, ordered token list.
///
/// # Example
///
/// ```
/// use lexidb::tokenizer::split_words;
///
/// assert_eq!(split_words("  white cat   and collar "), vec!["white", "cat", "and", "collar"]);
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Check that a token contains no control characters.
///
/// A token is valid iff none of its code points lie below U+0020. Everything
/// else, including punctuation and non-ASCII text, is allowed.
///
/// # Example
///
/// ```
/// use lexidb::tokenizer::is_valid_word;
///
/// assert!(is_valid_word("cat"));
/// assert!(is_valid_word("пёс"));
/// assert!(!is_valid_word("ca\u{1}t"));
/// ```
#[inline]
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| (c as u32) < 0x20)
}

// ============================================================================
// StopWords
// ============================================================================

/// Per-engine stop-word set
///
/// Built once at engine construction from a caller-supplied source. Stop words
/// are removed from document text before term frequencies are computed and
/// from queries before term sets are built, so they never reach the index.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Build a stop-word set from a collection of words.
    ///
    /// Empty candidates are skipped silently; a candidate containing a
    /// control character fails the whole construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStopWord`] naming the offending candidate.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(Error::InvalidStopWord(word.to_string()));
            }
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(StopWords { words: set })
    }

    /// Build a stop-word set from a space-separated string.
    ///
    /// # Example
    ///
    /// ```
    /// use lexidb::StopWords;
    ///
    /// let stop = StopWords::parse("and in on").unwrap();
    /// assert!(stop.contains("in"));
    /// assert!(!stop.contains("cat"));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(split_words(text))
    }

    /// Check stop-word membership.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the stop words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
