//! Ranked query properties.

use super::common::server_from_texts;
use proptest::prelude::*;
use sift::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["ant", "bee", "cat", "dog", "eel", "fox", "gnu"])
        .prop_map(str::to_string)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(word_strategy(), 1..8).prop_map(|words| words.join(" ")),
        1..20,
    )
}

/// Query of one to four words, each possibly negated.
fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((word_strategy(), prop::bool::weighted(0.25)), 1..5).prop_map(
        |words| {
            words
                .into_iter()
                .map(|(word, minus)| if minus { format!("-{}", word) } else { word })
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: never more than the limit, always best-first.
    #[test]
    fn prop_limit_and_order(corpus in corpus_strategy(), query in query_strategy()) {
        let server = server_from_texts("", &corpus);
        let top = server.find_top_documents(&query).unwrap();
        prop_assert!(top.len() <= MAX_RESULT_DOCUMENT_COUNT);
        for pair in top.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let relevance_desc = a.relevance >= b.relevance - RELEVANCE_EPSILON;
            let rating_breaks_ties = (a.relevance - b.relevance).abs() >= RELEVANCE_EPSILON
                || a.rating >= b.rating;
            prop_assert!(relevance_desc && rating_breaks_ties, "{} before {}", a, b);
        }
    }

    /// Property: a document with any minus-word never shows up, in ranking
    /// or in matching.
    #[test]
    fn prop_minus_words_exclude(corpus in corpus_strategy(), query in query_strategy()) {
        let server = server_from_texts("", &corpus);
        let minus: Vec<&str> = query
            .split(' ')
            .filter_map(|token| token.strip_prefix('-'))
            .collect();

        let top = server.find_top_documents_by(&query, |_, _, _| true).unwrap();
        for doc in &top {
            let text = &server.document(doc.id).unwrap().text;
            for word in &minus {
                prop_assert!(
                    !text.split(' ').any(|w| w == *word),
                    "doc {} contains minus-word {}", doc.id, word
                );
            }
        }

        for id in &server {
            let text = server.document(id).unwrap().text.clone();
            if minus.iter().any(|m| text.split(' ').any(|w| w == *m)) {
                prop_assert!(server.match_document(&query, id).unwrap().words.is_empty());
            }
        }
    }

    /// Property: every returned hit contains at least one plus-word.
    #[test]
    fn prop_hits_contain_plus_word(corpus in corpus_strategy(), query in query_strategy()) {
        let server = server_from_texts("", &corpus);
        for doc in server.find_top_documents(&query).unwrap() {
            prop_assert!(!server.match_document(&query, doc.id).unwrap().words.is_empty());
        }
    }
}
