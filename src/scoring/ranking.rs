// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search hits get sorted.
//!
//! Sort order:
//! 1. **Relevance** descending, compared on an epsilon grid so floating-point
//!    noise does not decide the order
//! 2. **Rating** descending
//! 3. **Document id** ascending, for absolute determinism
//!
//! Quantizing to the grid (rather than comparing `|a - b| < epsilon`) keeps
//! the comparator a total order, which `sort_by` requires.

use crate::types::Document;
use std::cmp::Ordering;

/// Relevance snapped to the nearest multiple of `epsilon`.
#[inline]
fn relevance_bucket(relevance: f64, epsilon: f64) -> f64 {
    if epsilon > 0.0 {
        (relevance / epsilon).round()
    } else {
        relevance
    }
}

/// Compare two hits for ranking. `Ordering::Less` means `a` ranks first.
pub fn compare_documents(a: &Document, b: &Document, epsilon: f64) -> Ordering {
    let a_bucket = relevance_bucket(a.relevance, epsilon);
    let b_bucket = relevance_bucket(b.relevance, epsilon);
    b_bucket
        .total_cmp(&a_bucket)
        .then_with(|| b.rating.cmp(&a.rating))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort `documents` best-first and keep at most `limit`.
pub fn select_top(mut documents: Vec<Document>, limit: usize, epsilon: f64) -> Vec<Document> {
    documents.sort_by(|a, b| compare_documents(a, b, epsilon));
    documents.truncate(limit);
    documents
}
