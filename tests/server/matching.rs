//! Matching a query against one document.

use super::common::{cat_dog_server, pet_server, POLICIES};
use sift::{DocumentStatus, SearchError};

#[test]
fn test_match_returns_present_plus_words_sorted() {
    let server = pet_server();
    for policy in POLICIES {
        let matched = server
            .match_document_with(policy, "tail fluffy owl cat fluffy", 2)
            .unwrap();
        assert_eq!(matched.words, vec!["cat", "fluffy", "tail"]);
        assert_eq!(matched.status, DocumentStatus::Actual);
    }
}

#[test]
fn test_match_reports_status() {
    let server = pet_server();
    let matched = server.match_document("groomed eugene", 4).unwrap();
    assert_eq!(matched.words, vec!["eugene", "groomed"]);
    assert_eq!(matched.status, DocumentStatus::Banned);
}

#[test]
fn test_minus_word_empties_match() {
    let server = cat_dog_server();
    for policy in POLICIES {
        let matched = server.match_document_with(policy, "sat mat -dog", 1).unwrap();
        assert!(matched.words.is_empty());
        assert_eq!(matched.status, DocumentStatus::Actual);

        let matched = server.match_document_with(policy, "sat mat -dog", 0).unwrap();
        assert_eq!(matched.words, vec!["sat"]);
    }
}

#[test]
fn test_same_word_plus_and_minus_empties_match() {
    let server = cat_dog_server();
    let matched = server.match_document("cat -cat", 0).unwrap();
    assert!(matched.words.is_empty());
}

#[test]
fn test_stop_words_never_match() {
    let server = cat_dog_server();
    let matched = server.match_document("the cat a", 0).unwrap();
    assert_eq!(matched.words, vec!["cat"]);
}

#[test]
fn test_unknown_and_removed_documents_fail() {
    let mut server = cat_dog_server();
    for policy in POLICIES {
        assert_eq!(
            server.match_document_with(policy, "cat", 5).unwrap_err(),
            SearchError::UnknownDocument { id: 5 }
        );
    }
    server.remove_document(0);
    assert_eq!(
        server.match_document("cat", 0).unwrap_err(),
        SearchError::UnknownDocument { id: 0 }
    );
}

#[test]
fn test_invalid_query_fails_before_lookup() {
    let server = cat_dog_server();
    for policy in POLICIES {
        assert!(matches!(
            server.match_document_with(policy, "cat --dog", 0),
            Err(SearchError::InvalidQuerySyntax { .. })
        ));
    }
}
