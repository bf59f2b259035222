// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! ```text
//! idf(word)       = ln(total_documents / documents_containing(word))
//! relevance(doc)  = Σ over plus-words in doc of tf(word, doc) × idf(word)
//! ```
//!
//! A document containing any minus-word is dropped outright, whatever
//! relevance it had already collected.
//!
//! # Determinism
//!
//! Each plus-word's contributions are computed independently (in parallel
//! under [`ExecutionPolicy::Parallel`]) but summed in plus-word order, so the
//! floating-point totals are bit-identical across policies.

use crate::execution::ExecutionPolicy;
use crate::inverted::InvertedIndex;
use crate::query::Query;
use crate::types::DocumentId;
use std::collections::BTreeMap;

/// Natural-log inverse document frequency.
///
/// Only meaningful for `document_frequency > 0`; an unseen word never gets here.
#[inline]
pub fn inverse_document_frequency(total_documents: usize, document_frequency: usize) -> f64 {
    (total_documents as f64 / document_frequency as f64).ln()
}

/// Relevance of every document that contains a plus-word and no minus-word.
///
/// `query` should be canonical (sorted, deduplicated); a repeated plus-word
/// would otherwise be counted twice.
pub fn compute_relevance(
    policy: ExecutionPolicy,
    index: &InvertedIndex,
    total_documents: usize,
    query: &Query<'_>,
) -> BTreeMap<DocumentId, f64> {
    let contributions: Vec<Vec<(DocumentId, f64)>> = policy.map(&query.plus_words, |word| {
        let Some(postings) = index.postings(word) else {
            return Vec::new();
        };
        let idf = inverse_document_frequency(total_documents, postings.len());
        postings.iter().map(|(&id, &tf)| (id, tf * idf)).collect()
    });

    let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
    for (id, score) in contributions.into_iter().flatten() {
        *relevance.entry(id).or_insert(0.0) += score;
    }

    for word in &query.minus_words {
        if let Some(postings) = index.postings(word) {
            for id in postings.keys() {
                relevance.remove(id);
            }
        }
    }

    relevance
}
