// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary bytes at the query parser and at ranked search. Parsing
//! either succeeds with clean word lists or fails with a typed error; it
//! never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{DocumentStatus, SearchError, SearchServer, MAX_RESULT_DOCUMENT_COUNT};

fuzz_target!(|query: &[u8]| {
    static SERVER: std::sync::OnceLock<SearchServer> = std::sync::OnceLock::new();
    let server = SERVER.get_or_init(|| {
        let mut server = SearchServer::new(["the", "a", "in"]).expect("stop words");
        let texts = [
            "the cat sat on a mat",
            "white cat and fashionable collar",
            "fluffy cat fluffy tail",
            "groomed dog expressive eyes",
        ];
        for (id, text) in texts.iter().enumerate() {
            server
                .add_document(id as i32, text, DocumentStatus::Actual, &[id as i32])
                .expect("seed document");
        }
        server
    });

    // Cap query length to avoid timeouts
    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();
    let query = query.as_str();

    match sift::parse_canonical_query(query, server.stop_words()) {
        Ok(parsed) => {
            for word in parsed.plus_words.iter().chain(&parsed.minus_words) {
                assert!(!word.is_empty());
                assert!(!word.starts_with('-'));
                assert!(sift::is_valid_word(word));
            }
            let top = server.find_top_documents(query).expect("parsed query must rank");
            assert!(top.len() <= MAX_RESULT_DOCUMENT_COUNT);
        }
        Err(SearchError::InvalidQuerySyntax { .. } | SearchError::InvalidWord { .. }) => {
            assert!(server.find_top_documents(query).is_err());
        }
        Err(other) => panic!("unexpected error kind: {:?}", other),
    }
});
