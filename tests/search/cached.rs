//! The cached searcher agrees with the uncached facade.

use crate::common::{directory_corpus, make_item, sample_corpus};
use sifter::{
    search, CachedSearcher, Corpus, LruCache, NoCache, ResultCache, SearchError, SearchOptions,
};

#[test]
fn test_cached_equals_uncached() {
    let items = directory_corpus(80, 40);
    let searcher = CachedSearcher::with_lru(Corpus::from_items(items.clone()).unwrap(), 16);

    for query in ["ai", "video voice", "seo", "ai", "video voice"] {
        let cached = searcher.search(query).unwrap();
        let direct = search(query, &items, &SearchOptions::default()).unwrap();
        assert_eq!(cached.results, direct.results, "query {}", query);
        assert_eq!(cached.total_matched, direct.total_matched);
        assert_eq!(cached.counts_by_kind, direct.counts_by_kind);
    }
    assert_eq!(searcher.cache().len(), 3);
}

#[test]
fn test_options_do_not_collide_in_cache() {
    let searcher = CachedSearcher::with_lru(Corpus::from_items(sample_corpus()).unwrap(), 8);
    let short = searcher
        .search_with("prompt", &SearchOptions::default().with_limit(1))
        .unwrap();
    let long = searcher
        .search_with("prompt", &SearchOptions::default().with_limit(10))
        .unwrap();

    assert_eq!(short.results.len(), 1);
    assert_eq!(long.results.len(), 3);
}

#[test]
fn test_eviction_bounds_cache() {
    let searcher = CachedSearcher::new(
        Corpus::from_items(sample_corpus()).unwrap(),
        LruCache::new(2),
    );
    for query in ["ai", "video", "prompt", "image"] {
        searcher.search(query).unwrap();
    }
    assert_eq!(searcher.cache().len(), 2);
}

#[test]
fn test_no_cache_still_searches() {
    let searcher = CachedSearcher::new(Corpus::from_items(sample_corpus()).unwrap(), NoCache);
    assert_eq!(searcher.search("video").unwrap().total_matched, 2);
    assert!(searcher.cache().is_empty());
}

#[test]
fn test_refresh_then_empty() {
    let mut searcher = CachedSearcher::with_lru(
        Corpus::from_items(vec![make_item("1", "tool", "AI", "")]).unwrap(),
        4,
    );
    searcher.search("ai").unwrap();
    searcher.refresh(Corpus::default());
    assert_eq!(searcher.search("ai"), Err(SearchError::EmptyCorpus));
}
