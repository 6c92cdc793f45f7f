//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sifter::{ContentItem, ScoredResult, SearchOutcome};

// Re-export canonical test utilities from sifter::testing
pub use sifter::testing::{make_article, make_item, make_tool, sample_corpus};

/// The single-item corpus from the playground scenario.
pub fn playground_corpus() -> Vec<ContentItem> {
    vec![ContentItem::new("1", "tool", "GPT-5 Playground", "Advanced AI playground")
        .with_tags(["AI", "NLP"])]
}

/// A directory-sized corpus: `tools` tools and `articles` articles, built
/// from a fixed vocabulary so every run sees the same data.
pub fn directory_corpus(tools: usize, articles: usize) -> Vec<ContentItem> {
    const WORDS: &[&str] = &[
        "ai", "video", "image", "writing", "chat", "code", "voice", "music", "design",
        "research", "marketing", "seo", "translation", "summary", "agent",
    ];

    let word = |i: usize| WORDS[i % WORDS.len()];
    let mut items = Vec::with_capacity(tools + articles);
    for i in 0..tools {
        items.push(make_tool(
            &format!("tool-{}", i),
            &format!("{} {} studio", word(i), word(i * 7 + 3)),
            &format!("Fast {} for {} teams", word(i * 3 + 1), word(i * 5 + 2)),
            &[word(i * 11 + 4)],
        ));
    }
    for i in 0..articles {
        items.push(make_article(
            &format!("article-{}", i),
            &format!("How {} changes {}", word(i * 2 + 5), word(i * 13 + 6)),
            &format!("A look at {} and {}", word(i + 8), word(i * 17 + 9)),
        ));
    }
    items
}

/// Ids in rank order.
pub fn ids(results: &[ScoredResult]) -> Vec<&str> {
    results.iter().map(|r| r.item.id.as_str()).collect()
}

/// Corpus position of an item id.
pub fn position(corpus: &[ContentItem], id: &str) -> usize {
    corpus
        .iter()
        .position(|item| item.id == id)
        .unwrap_or_else(|| panic!("id {} not in corpus", id))
}

/// Assert the ranking invariants every outcome must satisfy.
pub fn assert_well_ranked(corpus: &[ContentItem], outcome: &SearchOutcome, limit: usize) {
    assert!(outcome.results.len() <= limit, "limit exceeded");
    assert!(
        outcome.results.len() <= outcome.total_matched,
        "more results than matches"
    );
    for r in &outcome.results {
        assert!(r.score >= 1, "zero-score result {}", r.item.id);
    }
    for pair in outcome.results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "scores out of order");
        if pair[0].score == pair[1].score {
            assert!(
                position(corpus, &pair[0].item.id) < position(corpus, &pair[1].item.id),
                "tie not in corpus order: {} before {}",
                pair[0].item.id,
                pair[1].item.id
            );
        }
    }
    let counted: usize = outcome.counts_by_kind.values().sum();
    assert_eq!(counted, outcome.total_matched, "counts_by_kind mismatch");
}
