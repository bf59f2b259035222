// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by the search server.
//!
//! Ingestion and query parsing fail the whole call: nothing is half-indexed.
//! Lookups that tolerate unknown ids (`word_frequencies`, `remove_document`)
//! never produce an error; lookups that require the document to exist
//! (`match_document`) return [`SearchError::UnknownDocument`].

use crate::types::DocumentId;

/// Result type for fallible search operations.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;

/// Everything that can go wrong when talking to a [`SearchServer`](crate::SearchServer).
///
/// This is a non-exhaustive enum: match against `_` as well as the variants you care about.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The id is negative or already taken.
    #[error("invalid document id {id}: {reason}")]
    InvalidDocumentId { id: DocumentId, reason: &'static str },

    /// A stored or queried word contains a control character.
    #[error("word {word:?} contains control characters")]
    InvalidWord { word: String },

    /// Empty token, bare `-` or double minus in a query.
    #[error("query word {token:?} is invalid")]
    InvalidQuerySyntax { token: String },

    /// The operation requires a document that was never added or was removed.
    #[error("document {id} not found")]
    UnknownDocument { id: DocumentId },

    /// A [`SearchConfig`](crate::SearchConfig) failed validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl SearchError {
    pub(crate) fn negative_id(id: DocumentId) -> Self {
        SearchError::InvalidDocumentId {
            id,
            reason: "ids must be non-negative",
        }
    }

    pub(crate) fn duplicate_id(id: DocumentId) -> Self {
        SearchError::InvalidDocumentId {
            id,
            reason: "id already present",
        }
    }
}
