//! Repeated searches return identical outcomes (timing aside).

use crate::common::directory_corpus;
use sifter::{search, SearchOptions, SearchOutcome};

fn same_outcome(a: &SearchOutcome, b: &SearchOutcome) {
    assert_eq!(a.results, b.results);
    assert_eq!(a.total_matched, b.total_matched);
    assert_eq!(a.counts_by_kind, b.counts_by_kind);
}

#[test]
fn test_search_deterministic_across_runs() {
    let corpus = directory_corpus(200, 100);
    let options = SearchOptions::default().with_limit(32);

    let first = search("ai video studio", &corpus, &options).unwrap();
    for run in 0..10 {
        let again = search("ai video studio", &corpus, &options).unwrap();
        assert_eq!(
            again.results.len(),
            first.results.len(),
            "Run {}: length differs",
            run
        );
        same_outcome(&first, &again);
    }
}

#[test]
fn test_search_deterministic_across_corpus_copies() {
    let corpus_a = directory_corpus(120, 80);
    let corpus_b = corpus_a.clone();
    let options = SearchOptions::default().with_limit(50);

    let a = search("code agent music", &corpus_a, &options).unwrap();
    let b = search("code agent music", &corpus_b, &options).unwrap();
    same_outcome(&a, &b);
}

#[test]
fn test_concurrent_searches_agree() {
    let corpus = std::sync::Arc::new(directory_corpus(150, 150));
    let options = SearchOptions::default().with_limit(20);
    let expected = search("design research", &corpus, &options).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let corpus = std::sync::Arc::clone(&corpus);
            std::thread::spawn(move || search("design research", &corpus, &options).unwrap())
        })
        .collect();

    for handle in handles {
        same_outcome(&expected, &handle.join().unwrap());
    }
}
