//! lexidb - embedded in-process full-text search engine
//!
//! lexidb indexes a corpus of short text documents, accepts free-text queries
//! with `-minus` exclusion terms, and returns the top documents ranked by
//! TF-IDF relevance with a rating-based tie-break.
//!
//! # Quick Start
//!
//! ```
//! use lexidb::{DocumentStatus, SearchEngine};
//!
//! let mut engine = SearchEngine::from_stop_words_text("and in on").unwrap();
//!
//! engine
//!     .add_document(0, "white cat and fashionable collar", DocumentStatus::Actual, &[8, -3])
//!     .unwrap();
//! engine
//!     .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
//!     .unwrap();
//!
//! let results = engine.find_top_documents("fluffy cat").unwrap();
//! assert_eq!(results[0].id, 1);
//! ```
//!
//! # Architecture
//!
//! All state lives in a single [`SearchEngine`] (stop words + inverted index);
//! queries go through [`SearchEngine::find_top_documents`] and friends.
//! [`RequestHistory`] wraps those entry points with a sliding-window tracker,
//! [`remove_duplicates`] prunes documents with identical vocabularies, and
//! [`paginate`] chunks result lists for display layers.
//!
//! The engine is single-threaded by contract; wrap it in a lock if it must be
//! shared across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dedup;
pub mod document;
pub mod engine;
pub mod error;
pub mod filter;
pub mod history;
mod index;
pub mod paginate;
pub mod query;
mod ranking;
pub mod tokenizer;

pub use config::{SearchConfig, CONFIG_FILE_NAME};
pub use dedup::remove_duplicates;
pub use document::{Document, DocumentId, DocumentStatus};
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use filter::{AllDocuments, DocumentFilter, StatusFilter};
pub use history::{RequestHistory, REQUEST_WINDOW_SIZE};
pub use paginate::paginate;
pub use query::Query;
pub use ranking::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
pub use tokenizer::StopWords;
