// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document metadata and insertion order.

use crate::error::{Result, SearchError};
use crate::types::{DocumentData, DocumentId, DocumentStatus};
use crate::utils::compute_average_rating;
use std::collections::HashMap;

/// Owns the raw text, status and rating of every live document.
///
/// Ids are kept in a separate vector so enumeration follows insertion order
/// rather than hash order.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    documents: HashMap<DocumentId, DocumentData>,
    order: Vec<DocumentId>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails if `id` is negative or already stored.
    pub fn check_available(&self, id: DocumentId) -> Result<()> {
        if id < 0 {
            return Err(SearchError::negative_id(id));
        }
        if self.documents.contains_key(&id) {
            return Err(SearchError::duplicate_id(id));
        }
        Ok(())
    }

    pub fn insert(
        &mut self,
        id: DocumentId,
        text: impl Into<String>,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<&DocumentData> {
        self.check_available(id)?;
        self.order.push(id);
        let data: &DocumentData = self.documents.entry(id).or_insert(DocumentData {
            text: text.into(),
            rating: compute_average_rating(ratings),
            status,
        });
        Ok(data)
    }

    pub fn get(&self, id: DocumentId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Drop `id` and its metadata. Absent ids are ignored.
    pub fn remove(&mut self, id: DocumentId) -> Option<DocumentData> {
        let data = self.documents.remove(&id)?;
        if let Some(pos) = self.order.iter().position(|&stored| stored == id) {
            self.order.remove(pos);
        }
        Some(data)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Live ids in insertion order.
    pub fn ids(&self) -> std::slice::Iter<'_, DocumentId> {
        self.order.iter()
    }
}
