// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word splitting and validation shared by ingestion and query parsing.
//!
//! Both paths use the same rules so a word that can be stored can also be
//! queried, and vice versa.

/// Split text into words on the space character, dropping empty pieces.
///
/// Only `' '` separates words. Tabs, newlines and other control characters
/// stay inside the word so [`is_valid_word`] can reject them instead of
/// quietly treating them as separators.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// A word is valid when it holds no ASCII control character (below `0x20`).
///
/// The empty string is valid: emptiness is the caller's business.
#[inline]
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < b' ')
}

/// Integer mean of `ratings`, truncated toward zero. Zero for no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
