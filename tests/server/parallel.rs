//! Sequential and parallel execution give the same answers.

use super::common::{assert_index_consistent, pet_server};
use sift::{DocumentStatus, ExecutionPolicy, SearchServer};

fn corpus() -> SearchServer {
    let words = [
        "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    ];
    let mut server = SearchServer::new(["eta"]).unwrap();
    for id in 0..200 {
        let text: Vec<&str> = (0..12)
            .map(|k| words[(id as usize * 7 + k * k * 3) % words.len()])
            .collect();
        let status = if id % 5 == 0 {
            DocumentStatus::Banned
        } else {
            DocumentStatus::Actual
        };
        server
            .add_document(id, &text.join(" "), status, &[id % 11, -(id % 3)])
            .unwrap();
    }
    server
}

#[test]
fn test_parallel_remove_matches_sequential() {
    let mut seq = corpus();
    let mut par = corpus();
    for id in (0..200).step_by(3) {
        seq.remove_document_with(ExecutionPolicy::Sequential, id);
        par.remove_document_with(ExecutionPolicy::Parallel, id);
    }

    assert_eq!(
        seq.document_ids().collect::<Vec<_>>(),
        par.document_ids().collect::<Vec<_>>()
    );
    for id in &seq {
        assert_eq!(seq.word_frequencies(id), par.word_frequencies(id));
    }
    assert_eq!(seq.index().term_count(), par.index().term_count());
    for (term, postings) in seq.index().terms() {
        assert_eq!(Some(postings), par.index().postings(term));
    }
    assert_index_consistent(&seq);
    assert_index_consistent(&par);
}

#[test]
fn test_parallel_match_matches_sequential() {
    let server = corpus();
    let queries = [
        "alpha beta -gamma",
        "kappa iota theta zeta",
        "delta -epsilon -alpha",
        "eta alpha",
    ];
    for raw in queries {
        for id in 0..200 {
            let seq = server
                .match_document_with(ExecutionPolicy::Sequential, raw, id)
                .unwrap();
            let par = server
                .match_document_with(ExecutionPolicy::Parallel, raw, id)
                .unwrap();
            assert_eq!(seq, par, "query {:?} doc {}", raw, id);
        }
    }
}

#[test]
fn test_parallel_find_top_matches_sequential() {
    let server = corpus();
    for raw in ["alpha beta", "gamma -delta", "kappa zeta theta -iota"] {
        let seq = server
            .find_top_documents_with(ExecutionPolicy::Sequential, raw, |_, status, _| {
                status == DocumentStatus::Actual
            })
            .unwrap();
        let par = server
            .find_top_documents_with(ExecutionPolicy::Parallel, raw, |_, status, _| {
                status == DocumentStatus::Actual
            })
            .unwrap();
        assert_eq!(seq, par, "query {:?}", raw);
    }
}

#[test]
fn test_process_queries_keeps_query_order() {
    let server = pet_server();
    let queries = ["white cat", "fluffy", "groomed dog", "nobody"];
    for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
        let batches = server.process_queries(policy, &queries).unwrap();
        assert_eq!(batches.len(), queries.len());
        for (raw, batch) in queries.iter().zip(&batches) {
            assert_eq!(batch, &server.find_top_documents(raw).unwrap());
        }
        assert!(batches[3].is_empty());

        let joined = server.process_queries_joined(policy, &queries).unwrap();
        let flat: Vec<_> = batches.into_iter().flatten().collect();
        assert_eq!(joined, flat);
    }
}

#[test]
fn test_process_queries_fails_on_bad_query() {
    let server = pet_server();
    assert!(server
        .process_queries(ExecutionPolicy::Parallel, &["cat", "--dog"])
        .is_err());
}
