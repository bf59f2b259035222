// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search server.
//!
//! Documents go in as `(id, text, status, ratings)` and come back out of a
//! query as [`Document`] triples of `(id, relevance, rating)`. Everything the
//! server remembers about a document between those two points lives in
//! [`DocumentData`].
//!
//! # Invariants
//!
//! - **DocumentId**: non-negative and unique among live documents. The type is
//!   signed so that a negative id can be rejected instead of silently wrapping.
//! - **DocumentData**: immutable after insertion. A document is never edited,
//!   only removed and re-added.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document identifier as supplied by the caller.
///
/// Signed on purpose: `add_document(-1, ..)` is an error, not `u32::MAX`.
pub type DocumentId = i32;

/// Lifecycle status a caller attaches to a document.
///
/// Queries filter on it; the default query keeps only [`DocumentStatus::Actual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "ACTUAL",
            DocumentStatus::Irrelevant => "IRRELEVANT",
            DocumentStatus::Banned => "BANNED",
            DocumentStatus::Removed => "REMOVED",
        };
        f.write_str(name)
    }
}

/// Stored metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentData {
    /// Raw text exactly as it was added.
    pub text: String,
    /// Truncating mean of the ratings supplied at insertion.
    pub rating: i32,
    pub status: DocumentStatus,
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    /// Sum over plus-words of TF × IDF.
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Self {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Outcome of matching a query against a single document.
///
/// `words` is sorted and duplicate-free. It is empty when the document
/// contains any minus-word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'q> {
    pub words: Vec<&'q str>,
    pub status: DocumentStatus,
}
