//! The reference scenarios, one test each.

use crate::common::{ids, make_item, playground_corpus};
use sifter::{search, SearchError, SearchOptions};

#[test]
fn test_both_tokens_match_playground() {
    let corpus = playground_corpus();
    let outcome = search("AI playground", &corpus, &SearchOptions::default()).unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].item.id, "1");
    assert_eq!(outcome.results[0].score, 2);
    assert_eq!(outcome.total_matched, 1);
    // The item comes back untouched.
    assert_eq!(outcome.results[0].item, corpus[0]);
}

#[test]
fn test_unrelated_query_returns_nothing() {
    let outcome = search("video editing", &playground_corpus(), &SearchOptions::default()).unwrap();

    assert!(outcome.results.is_empty());
    assert_eq!(outcome.total_matched, 0);
    assert!(outcome.counts_by_kind.is_empty());
}

#[test]
fn test_higher_score_first_ties_in_corpus_order() {
    let corpus = vec![
        make_item("once-a", "tool", "AI helper", "does chores"),
        make_item("once-b", "article", "Chat", "with ai inside"),
        make_item("twice", "tool", "AI", "writing assistant"),
    ];
    let outcome = search("ai writing", &corpus, &SearchOptions::default()).unwrap();

    assert_eq!(ids(&outcome.results), vec!["twice", "once-a", "once-b"]);
    let scores: Vec<u32> = outcome.results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![2, 1, 1]);
}

#[test]
fn test_limit_one_keeps_best() {
    let corpus = vec![
        make_item("a", "tool", "AI", ""),
        make_item("b", "tool", "AI video", ""),
        make_item("c", "tool", "AI", "video voice"),
    ];
    let outcome = search(
        "ai video voice",
        &corpus,
        &SearchOptions::default().with_limit(1),
    )
    .unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].item.id, "c");
    assert_eq!(outcome.results[0].score, 3);
    assert_eq!(outcome.total_matched, 3);
}

#[test]
fn test_empty_query_is_not_match_everything() {
    let outcome = search("", &playground_corpus(), &SearchOptions::default()).unwrap();

    assert!(outcome.results.is_empty());
    assert_eq!(outcome.total_matched, 0);
}

#[test]
fn test_empty_corpus_raises() {
    let err = search("anything", &[], &SearchOptions::default()).unwrap_err();

    assert_eq!(err, SearchError::EmptyCorpus);
    assert!(err.is_recoverable());
}
