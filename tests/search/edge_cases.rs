//! Edge cases: odd queries, odd items, odd options.

use crate::common::{ids, make_item, playground_corpus, sample_corpus};
use serde_json::json;
use sifter::{search, search_value, ContentItem, SearchError, SearchOptions, SearchRequest};

#[test]
fn test_whitespace_only_query() {
    let outcome = search(" \t\n ", &sample_corpus(), &SearchOptions::default()).unwrap();
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.total_matched, 0);
}

#[test]
fn test_case_insensitive_both_sides() {
    let corpus = vec![make_item("1", "tool", "STABLE DIFFUSION", "")];
    let outcome = search("Stable diffusion", &corpus, &SearchOptions::default()).unwrap();
    assert_eq!(outcome.results[0].score, 2);
}

#[test]
fn test_repeated_word_in_item_scores_once() {
    // "ai" in both title and body is still one matching token.
    let corpus = vec![make_item("1", "tool", "AI", "AI everywhere")];
    let outcome = search("ai", &corpus, &SearchOptions::default()).unwrap();
    assert_eq!(outcome.results[0].score, 1);
}

#[test]
fn test_repeated_query_token_counts_each_time() {
    let corpus = vec![make_item("1", "tool", "AI", "")];
    let outcome = search("ai ai", &corpus, &SearchOptions::default()).unwrap();
    assert_eq!(outcome.results[0].score, 2);
}

#[test]
fn test_punctuation_is_part_of_token() {
    let corpus = playground_corpus();
    assert_eq!(
        search("gpt-5", &corpus, &SearchOptions::default())
            .unwrap()
            .total_matched,
        1
    );
    assert_eq!(
        search("gpt5", &corpus, &SearchOptions::default())
            .unwrap()
            .total_matched,
        0
    );
}

#[test]
fn test_items_with_empty_text() {
    let corpus = vec![
        ContentItem::new("blank", "tool", "", ""),
        make_item("real", "tool", "AI tutor", ""),
    ];
    let outcome = search("ai", &corpus, &SearchOptions::default()).unwrap();
    assert_eq!(ids(&outcome.results), vec!["real"]);
}

#[test]
fn test_zero_limit_uses_default() {
    let corpus: Vec<ContentItem> = (0..15)
        .map(|i| make_item(&format!("t{}", i), "tool", "AI", ""))
        .collect();
    let outcome = search("ai", &corpus, &SearchOptions::default().with_limit(0)).unwrap();
    assert_eq!(outcome.results.len(), sifter::DEFAULT_LIMIT);
    assert_eq!(outcome.total_matched, 15);
}

#[test]
fn test_unicode_query() {
    let corpus = vec![make_item("1", "article", "Über KI-Werkzeuge", "Café-Gespräche")];
    let outcome = search("über café", &corpus, &SearchOptions::default()).unwrap();
    assert_eq!(outcome.results[0].score, 2);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_fold_diacritics_matches_plain_ascii() {
    let corpus = vec![make_item("1", "article", "Café culture", "naïve prompts")];
    let plain = SearchOptions::default();
    let folded = SearchOptions::default().with_fold_diacritics(true);

    assert_eq!(search("cafe naive", &corpus, &plain).unwrap().total_matched, 0);
    assert_eq!(
        search("cafe naive", &corpus, &folded).unwrap().results[0].score,
        2
    );
}

#[test]
fn test_json_request_round() {
    let corpus = sample_corpus();
    let request: SearchRequest =
        serde_json::from_value(json!({"query": "video", "limit": 1, "searchTags": true}))
            .unwrap();
    let outcome = request.execute(&corpus, &SearchOptions::default()).unwrap();
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.total_matched, 2);
}

#[test]
fn test_json_query_must_be_string() {
    let corpus = sample_corpus();
    assert_eq!(
        search_value(&json!(3.5), &corpus, &SearchOptions::default()),
        Err(SearchError::InvalidQuery { found: "number" })
    );
}
