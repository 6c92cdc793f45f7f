//! Ranking, filtering and per-kind counting over mixed corpora.

use crate::common::{assert_well_ranked, directory_corpus, ids, make_item, sample_corpus};
use sifter::{rank, search, tokenize, SearchMode, SearchOptions};

#[test]
fn test_mixed_corpus_counts_by_kind() {
    let corpus = sample_corpus();
    let outcome = search("video", &corpus, &SearchOptions::default()).unwrap();

    // "clipforge" (tool) and "video-ai" (article) mention video.
    assert_eq!(ids(&outcome.results), vec!["clipforge", "video-ai"]);
    assert_eq!(outcome.counts_by_kind.get("tool"), Some(&1));
    assert_eq!(outcome.counts_by_kind.get("article"), Some(&1));
    assert_well_ranked(&corpus, &outcome, 10);
}

#[test]
fn test_tags_widen_matches() {
    let corpus = sample_corpus();
    let without = search("nlp", &corpus, &SearchOptions::default()).unwrap();
    let with = search("nlp", &corpus, &SearchOptions::default().with_tags(true)).unwrap();

    assert_eq!(without.total_matched, 0);
    assert_eq!(ids(&with.results), vec!["gpt-playground"]);
}

#[test]
fn test_all_mode_is_subset_of_any_mode() {
    let corpus = directory_corpus(60, 40);
    let query = "ai video studio";
    let any = search(query, &corpus, &SearchOptions::default().with_limit(100)).unwrap();
    let all = search(
        query,
        &corpus,
        &SearchOptions::default()
            .with_limit(100)
            .with_mode(SearchMode::All),
    )
    .unwrap();

    assert!(all.total_matched <= any.total_matched);
    let any_ids = ids(&any.results);
    for id in ids(&all.results) {
        assert!(any_ids.contains(&id), "{} in all-mode but not any-mode", id);
    }
    for r in &all.results {
        assert_eq!(r.score, 3);
    }
}

#[test]
fn test_all_mode_orders_by_corpus_position() {
    let corpus = vec![
        make_item("x", "tool", "AI video", ""),
        make_item("y", "tool", "AI", ""),
        make_item("z", "article", "Video made with AI", ""),
    ];
    let outcome = search(
        "video ai",
        &corpus,
        &SearchOptions::default().with_mode(SearchMode::All),
    )
    .unwrap();
    assert_eq!(ids(&outcome.results), vec!["x", "z"]);
}

#[test]
fn test_rank_matches_facade() {
    let corpus = directory_corpus(30, 30);
    let tokens = tokenize("code agent");
    let ranked = rank(&corpus, &tokens, 10);
    let outcome = search("code agent", &corpus, &SearchOptions::default()).unwrap();

    assert_eq!(ranked, outcome.results);
}

#[test]
fn test_large_directory_invariants() {
    let corpus = directory_corpus(300, 200);
    for query in ["ai", "video music", "seo marketing agent", "studio", "how"] {
        for limit in [1, 5, 10, 50] {
            let outcome =
                search(query, &corpus, &SearchOptions::default().with_limit(limit)).unwrap();
            assert_well_ranked(&corpus, &outcome, limit);
        }
    }
}

#[test]
fn test_extra_fields_pass_through() {
    let corpus = sample_corpus();
    let outcome = search("prompt", &corpus, &SearchOptions::default()).unwrap();

    for r in &outcome.results {
        let original = corpus.iter().find(|i| i.id == r.item.id).unwrap();
        assert_eq!(&r.item, original);
        assert!(!r.item.extra.is_empty());
    }
}
