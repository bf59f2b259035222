// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search server: ingestion, ranked queries, matching and removal.
//!
//! [`SearchServer`] owns the document store and the forward/inverted map pair
//! and is the only thing that mutates them. Every mutation either completes
//! on both structures or leaves both untouched.
//!
//! # Concurrency
//!
//! No internal locking. `&self` methods may be shared freely; `&mut self`
//! methods need exclusive access, which the borrow checker already enforces.
//! The `_with` variants take an [`ExecutionPolicy`] and may fan their own
//! sub-steps out to rayon, but nothing escapes the call.

use crate::config::SearchConfig;
use crate::contracts;
use crate::error::{Result, SearchError};
use crate::execution::ExecutionPolicy;
use crate::inverted::{compute_term_frequencies, InvertedIndex, TermFrequencies};
use crate::query::{parse_canonical_query, Query};
use crate::scoring::{compute_relevance, ranking::select_top};
use crate::stop_words::StopWords;
use crate::store::DocumentStore;
use crate::types::{Document, DocumentData, DocumentId, DocumentStatus, MatchResult};
use crate::utils::{is_valid_word, split_words};
use std::iter::Copied;
use std::slice;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    store: DocumentStore,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    /// Build a server with the given stop words and default ranking settings.
    ///
    /// ```
    /// use sift::SearchServer;
    ///
    /// let server = SearchServer::new(["and", "in", "on"]).unwrap();
    /// assert_eq!(server.document_count(), 0);
    /// ```
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, SearchConfig::default())
    }

    /// Stop words given as one space-separated string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::new(split_words(text))
    }

    pub fn with_config<I, S>(stop_words: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        Ok(Self {
            stop_words: StopWords::new(stop_words)?,
            store: DocumentStore::new(),
            index: InvertedIndex::new(),
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    // =========================================================================
    // INGESTION
    // =========================================================================

    /// Words of `text` minus stop words. Any word with control characters
    /// fails the whole text.
    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_words(text) {
            if !is_valid_word(word) {
                return Err(SearchError::InvalidWord {
                    word: word.to_string(),
                });
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }

    /// Index a document.
    ///
    /// Fails on a negative or duplicate id, or on a word with control
    /// characters. On failure nothing is stored.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.store.check_available(id)?;
        let words = self.split_into_words_no_stop(text)?;

        self.store.insert(id, text, status, ratings)?;
        self.index.add_terms(id, compute_term_frequencies(&words));

        contracts::check_document_indexed(&self.index, id);
        debug!(id, words = words.len(), %status, "added document");
        Ok(())
    }

    // =========================================================================
    // RANKED QUERIES
    // =========================================================================

    /// Top hits among [`DocumentStatus::Actual`] documents.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    /// Top hits among documents with exactly `status`.
    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top hits among documents accepted by `predicate(id, status, rating)`.
    pub fn find_top_documents_by<F>(
        &self,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_documents_with(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Ranked query under an explicit policy.
    ///
    /// The predicate may run on several threads at once, so it must be pure.
    pub fn find_top_documents_with<F>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = parse_canonical_query(raw_query, &self.stop_words)?;
        let matched = self.find_all_documents(policy, &query, &predicate);
        Ok(select_top(
            matched,
            self.config.max_result_document_count,
            self.config.relevance_epsilon,
        ))
    }

    fn find_all_documents<F>(
        &self,
        policy: ExecutionPolicy,
        query: &Query<'_>,
        predicate: &F,
    ) -> Vec<Document>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let relevance = compute_relevance(policy, &self.index, self.document_count(), query);
        let candidates: Vec<(Document, DocumentStatus)> = relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                let data = self.store.get(id)?;
                Some((Document::new(id, relevance, data.rating), data.status))
            })
            .collect();

        let matched: Vec<Document> = policy
            .filter(&candidates, |(doc, status)| predicate(doc.id, *status, doc.rating))
            .into_iter()
            .map(|(doc, _)| doc)
            .collect();
        trace!(
            candidates = candidates.len(),
            matched = matched.len(),
            "ranked query"
        );
        matched
    }

    /// Answer a batch of queries (default `ACTUAL` filter), one list per query.
    pub fn process_queries<S>(
        &self,
        policy: ExecutionPolicy,
        queries: &[S],
    ) -> Result<Vec<Vec<Document>>>
    where
        S: AsRef<str> + Sync,
    {
        policy
            .map(queries, |raw| self.find_top_documents(raw.as_ref()))
            .into_iter()
            .collect()
    }

    /// Like [`process_queries`](Self::process_queries), flattened in query order.
    pub fn process_queries_joined<S>(
        &self,
        policy: ExecutionPolicy,
        queries: &[S],
    ) -> Result<Vec<Document>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self
            .process_queries(policy, queries)?
            .into_iter()
            .flatten()
            .collect())
    }

    // =========================================================================
    // MATCHING
    // =========================================================================

    /// Plus-words of `raw_query` present in document `id`, with its status.
    ///
    /// Empty if the document contains any minus-word. Unknown ids are an error.
    pub fn match_document<'q>(
        &self,
        raw_query: &'q str,
        id: DocumentId,
    ) -> Result<MatchResult<'q>> {
        self.match_document_with(ExecutionPolicy::Sequential, raw_query, id)
    }

    pub fn match_document_with<'q>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &'q str,
        id: DocumentId,
    ) -> Result<MatchResult<'q>> {
        let query = parse_canonical_query(raw_query, &self.stop_words)?;
        let status = self
            .store
            .get(id)
            .map(|data| data.status)
            .ok_or(SearchError::UnknownDocument { id })?;

        let index = &self.index;
        if policy.any(&query.minus_words, |word| index.contains(word, id)) {
            return Ok(MatchResult {
                words: Vec::new(),
                status,
            });
        }

        // plus_words is sorted and unique; filter keeps order.
        let words = policy.filter(&query.plus_words, |word| index.contains(word, id));
        Ok(MatchResult { words, status })
    }

    // =========================================================================
    // REMOVAL
    // =========================================================================

    /// Remove a document and every index entry derived from it.
    /// Unknown ids are ignored.
    pub fn remove_document(&mut self, id: DocumentId) {
        self.remove_document_with(ExecutionPolicy::Sequential, id);
    }

    pub fn remove_document_with(&mut self, policy: ExecutionPolicy, id: DocumentId) {
        if !self.store.contains(id) {
            return;
        }
        // Index entries go first; the stored text outlives them.
        self.index.remove(policy, id);
        self.store.remove(id);

        contracts::check_document_purged(&self.index, id);
        debug!(id, ?policy, "removed document");
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Metadata for `id`, if present.
    pub fn document(&self, id: DocumentId) -> Option<&DocumentData> {
        self.store.get(id)
    }

    /// Live document ids in insertion order.
    pub fn document_ids(&self) -> Copied<slice::Iter<'_, DocumentId>> {
        self.store.ids().copied()
    }

    /// Term frequencies of `id`. Empty for unknown ids.
    pub fn word_frequencies(&self, id: DocumentId) -> TermFrequencies {
        self.index.word_frequencies(id)
    }

    /// Number of documents containing `word`.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.index.document_frequency(word)
    }

    /// Read-only view of the forward/inverted maps.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocumentId;
    type IntoIter = Copied<slice::Iter<'a, DocumentId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids()
    }
}
