// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `relevance` turns a parsed query into a relevance per document (TF-IDF summed
//! over plus-words, minus-word documents dropped). `ranking` orders those
//! documents and cuts the list to size.

mod relevance;
pub mod ranking;

pub use relevance::*;
