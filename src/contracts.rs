// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode checks for the index invariants.
//!
//! Checks only run with `debug_assertions` on. Release builds skip them; tests
//! panic the moment an invariant breaks.
//!
//! | Contract                         | Invariant                               |
//! |----------------------------------|-----------------------------------------|
//! | `check_document_indexed`         | forward and inverted agree for one doc  |
//! | `check_document_purged`          | no bucket mentions a removed doc        |
//! | `check_frequencies_partition`    | a document's tf values sum to 1.0       |

use crate::inverted::{InvertedIndex, TermFrequencies};
use crate::types::DocumentId;

/// Tolerance for floating-point sums of term frequencies.
pub const FREQUENCY_SUM_TOLERANCE: f64 = 1e-9;

/// Every forward entry of `id` appears in the inverted map with the same value.
#[inline]
pub fn check_document_indexed(index: &InvertedIndex, id: DocumentId) {
    if cfg!(debug_assertions) {
        let Some(freqs) = index.term_frequencies(id) else {
            panic!("Contract violation: document {} not indexed", id);
        };
        for (term, &freq) in freqs {
            let stored = index.postings(term).and_then(|p| p.get(&id)).copied();
            debug_assert!(
                stored == Some(freq),
                "Contract violation: MAPS_AGREE - ({}, {:?}) forward {} inverted {:?}",
                id,
                term,
                freq,
                stored
            );
        }
        check_frequencies_partition(freqs);
    }
}

/// After removal, `id` is gone from both sides.
#[inline]
pub fn check_document_purged(index: &InvertedIndex, id: DocumentId) {
    if cfg!(debug_assertions) {
        debug_assert!(
            index.term_frequencies(id).is_none(),
            "Contract violation: forward entry for {} survived removal",
            id
        );
        for (term, postings) in index.terms() {
            debug_assert!(
                !postings.contains_key(&id),
                "Contract violation: bucket {:?} still holds removed document {}",
                term,
                id
            );
            debug_assert!(
                !postings.is_empty(),
                "Contract violation: NO_EMPTY_BUCKETS - {:?}",
                term
            );
        }
    }
}

/// Frequencies of a non-empty document sum to 1.0.
#[inline]
pub fn check_frequencies_partition(freqs: &TermFrequencies) {
    if freqs.is_empty() {
        return;
    }
    let sum: f64 = freqs.values().sum();
    debug_assert!(
        (sum - 1.0).abs() < FREQUENCY_SUM_TOLERANCE,
        "Contract violation: TF_PARTITION - frequencies sum to {}",
        sum
    );
}
