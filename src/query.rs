// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: raw text to plus-words and minus-words.
//!
//! A query is space-separated words. A leading `-` turns a word into a
//! minus-word, which excludes every document containing it. Stop words are
//! dropped from both sides.
//!
//! ```text
//! "fluffy cat -collar"  =>  plus: [fluffy, cat]   minus: [collar]
//! "-"                   =>  InvalidQuerySyntax
//! "--cat"               =>  InvalidQuerySyntax
//! ```
//!
//! Words borrow from the raw query, so a [`Query`] lives no longer than the
//! text it was parsed from.

use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use crate::utils::{is_valid_word, split_words};
use tracing::{trace, warn};

/// One classified query token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWord<'q> {
    /// The word without its minus prefix.
    pub data: &'q str,
    pub is_minus: bool,
    pub is_stop: bool,
}

/// Plus-words and minus-words of a parsed query.
///
/// A word may appear on both sides when the raw text lists it both ways
/// (`"cat -cat"`); exclusion wins during ranking and matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'q> {
    pub plus_words: Vec<&'q str>,
    pub minus_words: Vec<&'q str>,
}

impl<'q> Query<'q> {
    /// Sort both word lists and drop duplicates.
    pub fn canonicalize(mut self) -> Self {
        self.plus_words.sort_unstable();
        self.plus_words.dedup();
        self.minus_words.sort_unstable();
        self.minus_words.dedup();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

fn invalid_token(token: &str) -> SearchError {
    warn!(token, "rejected query word");
    SearchError::InvalidQuerySyntax {
        token: token.to_string(),
    }
}

/// Classify a single token.
///
/// An empty token, a bare `-` or a double minus is a syntax error; control
/// characters make the word invalid.
pub fn parse_query_word<'q>(token: &'q str, stop_words: &StopWords) -> Result<QueryWord<'q>> {
    if token.is_empty() {
        return Err(invalid_token(token));
    }

    let (data, is_minus) = match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    if data.is_empty() || data.starts_with('-') {
        return Err(invalid_token(token));
    }
    if !is_valid_word(data) {
        warn!(token, "query word contains control characters");
        return Err(SearchError::InvalidWord {
            word: data.to_string(),
        });
    }

    Ok(QueryWord {
        data,
        is_minus,
        is_stop: stop_words.contains(data),
    })
}

/// Parse `raw` keeping words in query order, duplicates included.
pub fn parse_query<'q>(raw: &'q str, stop_words: &StopWords) -> Result<Query<'q>> {
    let mut query = Query::default();
    for token in split_words(raw) {
        let word = parse_query_word(token, stop_words)?;
        if word.is_stop {
            continue;
        }
        if word.is_minus {
            query.minus_words.push(word.data);
        } else {
            query.plus_words.push(word.data);
        }
    }
    trace!(
        plus = query.plus_words.len(),
        minus = query.minus_words.len(),
        "parsed query"
    );
    Ok(query)
}

/// Parse `raw` into sorted, duplicate-free word lists.
///
/// Ranking and matching only ever use this form, so their iteration order
/// does not depend on how the query was written.
pub fn parse_canonical_query<'q>(raw: &'q str, stop_words: &StopWords) -> Result<Query<'q>> {
    parse_query(raw, stop_words).map(Query::canonicalize)
}
