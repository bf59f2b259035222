// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking knobs.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Default number of hits returned by a top-N query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this rank as equal and fall back to rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_result_document_count: usize,
    pub relevance_epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_result_document_count: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_result_document_count == 0 {
            return Err(SearchError::InvalidConfig {
                reason: "max_result_document_count must be at least 1".to_string(),
            });
        }
        if !(self.relevance_epsilon >= 0.0 && self.relevance_epsilon.is_finite()) {
            return Err(SearchError::InvalidConfig {
                reason: format!(
                    "relevance_epsilon must be finite and non-negative, got {}",
                    self.relevance_epsilon
                ),
            });
        }
        Ok(())
    }
}
