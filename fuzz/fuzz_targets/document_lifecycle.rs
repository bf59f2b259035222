// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for add/remove sequences.
//!
//! Arbitrary interleavings of inserts and removals under both policies must
//! keep the forward and inverted maps in agreement.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{DocumentStatus, ExecutionPolicy, SearchServer};

#[derive(Debug, Arbitrary)]
enum Op {
    Add { id: i8, text: String, ratings: Vec<i16> },
    Remove { id: i8, parallel: bool },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut server = SearchServer::new(["the"]).expect("stop words");
    for op in ops.into_iter().take(64) {
        match op {
            Op::Add { id, text, ratings } => {
                let ratings: Vec<i32> = ratings.into_iter().map(i32::from).collect();
                let before = server.document_count();
                let result =
                    server.add_document(i32::from(id), &text, DocumentStatus::Actual, &ratings);
                match result {
                    Ok(()) => assert_eq!(server.document_count(), before + 1),
                    Err(_) => assert_eq!(server.document_count(), before),
                }
            }
            Op::Remove { id, parallel } => {
                let policy = if parallel {
                    ExecutionPolicy::Parallel
                } else {
                    ExecutionPolicy::Sequential
                };
                server.remove_document_with(policy, i32::from(id));
                assert!(server.document(i32::from(id)).is_none());
            }
        }
    }

    let index = server.index();
    for id in &server {
        for (term, freq) in index.term_frequencies(id).into_iter().flatten() {
            assert_eq!(index.postings(term).and_then(|p| p.get(&id)), Some(freq));
        }
    }
    for (_, postings) in index.terms() {
        assert!(!postings.is_empty());
        for id in postings.keys() {
            assert!(server.document(*id).is_some());
        }
    }
});
