//! In-process full-text search with TF-IDF ranking.
//!
//! Documents are short texts with an id, a [`DocumentStatus`] and a list of
//! ratings. Queries are space-separated words; a `-` prefix excludes every
//! document containing that word.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│  query.rs    │────▶│  scoring/    │
//! │ (split,     │     │ (plus/minus  │     │ (tf-idf,     │
//! │  validate)  │     │  words)      │     │  ranking)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        ▲
//!        ▼                                        │
//! ┌─────────────┐     ┌──────────────┐            │
//! │  store.rs   │◀────│  server.rs   │────────────┘
//! │ (metadata,  │     │ (add, find,  │
//! │  order)     │     │  match, rm)  │────▶ inverted.rs (forward + inverted maps)
//! └─────────────┘     └──────────────┘
//! ```
//!
//! Removal, matching and ranking take an [`ExecutionPolicy`]; sequential and
//! parallel runs return the same results.
//!
//! # Usage
//!
//! ```
//! use sift::{DocumentStatus, SearchServer};
//!
//! let mut server = SearchServer::new(["the", "a"]).unwrap();
//! server.add_document(0, "the cat sat", DocumentStatus::Actual, &[5]).unwrap();
//! server.add_document(1, "the dog sat on a mat", DocumentStatus::Actual, &[3]).unwrap();
//!
//! let top = server.find_top_documents("cat -dog").unwrap();
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].id, 0);
//! ```

pub mod config;
pub mod contracts;
mod error;
pub mod execution;
pub mod inverted;
pub mod query;
pub mod scoring;
mod server;
mod stop_words;
mod store;
mod types;
mod utils;

pub use config::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
pub use error::{Result, SearchError};
pub use execution::ExecutionPolicy;
pub use inverted::{InvertedIndex, Postings, Term, TermFrequencies};
pub use query::{parse_canonical_query, parse_query, Query, QueryWord};
pub use server::SearchServer;
pub use stop_words::StopWords;
pub use store::DocumentStore;
pub use types::{Document, DocumentData, DocumentId, DocumentStatus, MatchResult};
pub use utils::{compute_average_rating, is_valid_word, split_words};
