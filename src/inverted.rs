// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The forward/inverted map pair.
//!
//! Every (document, term, frequency) fact is stored twice:
//!
//! ```text
//! forward:  document -> { term -> tf }     removal, word_frequencies
//! inverted: term -> { document -> tf }     ranking, idf, matching
//! ```
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **MAPS_AGREE**: `(doc, term, tf)` is in forward iff it is in inverted.
//! 2. **TF_PARTITION**: a non-empty document's frequencies sum to 1.0.
//! 3. **NO_EMPTY_BUCKETS**: every inverted term has at least one document,
//!    so `document_frequency(term) > 0` for every stored term.
//!
//! Terms are interned as `Arc<str>`: both maps and every document containing
//! a word share one allocation, and a bucket key can never outlive its text.

use crate::execution::ExecutionPolicy;
use crate::types::DocumentId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// An interned, indexed word.
pub type Term = Arc<str>;

/// Documents containing one term, with that term's frequency in each.
pub type Postings = BTreeMap<DocumentId, f64>;

/// Terms of one document with their frequencies, sorted by term.
pub type TermFrequencies = BTreeMap<Term, f64>;

/// Term frequencies for a word list: occurrences over total word count.
///
/// `words` must already be stop-word filtered. An empty list gives an empty map.
pub fn compute_term_frequencies<'a>(words: &[&'a str]) -> BTreeMap<&'a str, f64> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &word in words {
        *counts.entry(word).or_insert(0) += 1;
    }
    let total = words.len() as f64;
    counts
        .into_iter()
        .map(|(word, count)| (word, count as f64 / total))
        .collect()
}

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<Term, Postings>,
    document_to_word_freqs: HashMap<DocumentId, TermFrequencies>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse the stored allocation for `word` if it is already indexed.
    fn intern(&self, word: &str) -> Term {
        match self.word_to_document_freqs.get_key_value(word) {
            Some((term, _)) => Arc::clone(term),
            None => Arc::from(word),
        }
    }

    /// Record `id`'s term frequencies on both sides.
    ///
    /// The caller guarantees `id` is not already indexed.
    pub fn add_terms<'a, I>(&mut self, id: DocumentId, term_frequencies: I)
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        debug_assert!(
            !self.document_to_word_freqs.contains_key(&id),
            "document {} indexed twice",
            id
        );

        let mut forward = TermFrequencies::new();
        for (word, freq) in term_frequencies {
            let term = self.intern(word);
            self.word_to_document_freqs
                .entry(Arc::clone(&term))
                .or_default()
                .insert(id, freq);
            forward.insert(term, freq);
        }
        self.document_to_word_freqs.insert(id, forward);
    }

    /// Purge `id` from both maps. Returns false if it was not indexed.
    ///
    /// Two phases: first the forward entry is taken whole, which snapshots the
    /// document's term list, and the affected buckets are lifted out of the
    /// inverted map. Then each bucket drops `id` under `policy`. Buckets are
    /// disjoint, so parallel tasks never touch the same entry.
    pub fn remove(&mut self, policy: ExecutionPolicy, id: DocumentId) -> bool {
        let Some(terms) = self.document_to_word_freqs.remove(&id) else {
            return false;
        };

        let mut buckets: Vec<(Term, Postings)> = terms
            .keys()
            .filter_map(|term| self.word_to_document_freqs.remove_entry(term))
            .collect();

        policy.for_each_mut(&mut buckets, |(_, postings)| {
            postings.remove(&id);
        });

        for (term, postings) in buckets {
            if !postings.is_empty() {
                self.word_to_document_freqs.insert(term, postings);
            }
        }
        true
    }

    /// Number of documents containing `word`; zero for unseen words.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.word_to_document_freqs
            .get(word)
            .map_or(0, BTreeMap::len)
    }

    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.word_to_document_freqs.get(word)
    }

    /// True if `word` occurs in document `id`.
    pub fn contains(&self, word: &str, id: DocumentId) -> bool {
        self.word_to_document_freqs
            .get(word)
            .is_some_and(|postings| postings.contains_key(&id))
    }

    /// Borrowed view of `id`'s frequencies.
    pub fn term_frequencies(&self, id: DocumentId) -> Option<&TermFrequencies> {
        self.document_to_word_freqs.get(&id)
    }

    /// Owned copy of `id`'s frequencies; empty for unknown ids.
    pub fn word_frequencies(&self, id: DocumentId) -> TermFrequencies {
        self.document_to_word_freqs
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.word_to_document_freqs.len()
    }

    pub fn document_count(&self) -> usize {
        self.document_to_word_freqs.len()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Term, &Postings)> {
        self.word_to_document_freqs.iter()
    }
}
