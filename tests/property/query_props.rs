//! Query parser properties.

use proptest::prelude::*;
use sift::{parse_canonical_query, parse_query, SearchError, StopWords};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the canonical form is sorted, duplicate-free and holds the
    /// same words as the raw parse.
    #[test]
    fn prop_canonical_is_sorted_set(raw in "(-?[a-d]{1,2} ){0,8}") {
        let stop = StopWords::from_text("a").unwrap();
        let plain = parse_query(&raw, &stop).unwrap();
        let canonical = parse_canonical_query(&raw, &stop).unwrap();

        prop_assert!(canonical.plus_words.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(canonical.minus_words.windows(2).all(|w| w[0] < w[1]));
        for word in &plain.plus_words {
            prop_assert!(canonical.plus_words.contains(word));
        }
        for word in &plain.minus_words {
            prop_assert!(canonical.minus_words.contains(word));
        }
        prop_assert!(!canonical.plus_words.contains(&"a"));
        prop_assert!(!canonical.minus_words.contains(&"a"));
    }

    /// Property: any token starting with a double minus fails the query.
    #[test]
    fn prop_double_minus_rejected(prefix in "([a-d]{1,3} ){0,3}", word in "[a-d]{0,3}") {
        let stop = StopWords::default();
        let raw = format!("{}--{}", prefix, word);
        let is_syntax_error = matches!(
            parse_query(&raw, &stop),
            Err(SearchError::InvalidQuerySyntax { .. })
        );
        prop_assert!(is_syntax_error);
    }
}
