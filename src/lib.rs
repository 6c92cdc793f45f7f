//! Keyword relevance search over a directory of tools and articles.
//!
//! Given a query and a corpus of [`ContentItem`]s, `sifter` counts how many
//! query tokens each item contains, keeps the items that match, ranks them by
//! that count (ties keep corpus order), and returns the top results with the
//! total match count, per-kind counts and the measured search time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ tokenizer.rs │────▶│ scoring/core │────▶│scoring/ranking│────▶│  search/mod  │
//! │  (tokenize)  │     │   (score)    │     │    (rank)     │     │   (search)   │
//! └──────────────┘     └──────────────┘     └───────────────┘     └──────────────┘
//!                                                                        │
//!        ┌──────────────────────────┬────────────────────────────────────┤
//!        ▼                          ▼                                    ▼
//! ┌──────────────┐         ┌─────────────────┐                  ┌─────────────────┐
//! │  corpus.rs   │         │ search/cached   │                  │ search/suggest  │
//! │ (Corpus, IO) │         │ (cache.rs, LRU) │                  │ (autocomplete)  │
//! └──────────────┘         └─────────────────┘                  └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sifter::{search, ContentItem, SearchOptions};
//!
//! let corpus = vec![
//!     ContentItem::new("1", "tool", "GPT-5 Playground", "Advanced AI playground"),
//!     ContentItem::new("2", "article", "Editing video with AI", "A walkthrough"),
//! ];
//!
//! let outcome = search("ai playground", &corpus, &SearchOptions::default()).unwrap();
//! assert_eq!(outcome.ids(), vec!["1", "2"]);
//! assert_eq!(outcome.results[0].score, 2);
//! ```

// Module declarations
pub mod cache;
pub mod config;
pub mod contracts;
mod corpus;
mod error;
mod scoring;
mod search;
mod tokenizer;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use cache::{CacheKey, LruCache, NoCache, ResultCache};
pub use config::SifterConfig;
pub use corpus::Corpus;
pub use error::{ConfigError, CorpusError, SearchError};
pub use scoring::ranking::{compare_results, rank, rank_hits, rank_with, Hit, RankOptions};
pub use scoring::{haystack, haystack_with, score, score_haystack};
pub use search::{
    search, search_value, suggest, suggest_response, CachedSearcher, SearchRequest,
};
pub use tokenizer::{normalize, tokenize, tokenize_with};
pub use types::{
    ContentItem, ScoredResult, SearchFields, SearchMode, SearchOptions, SearchOutcome,
    SuggestResponse, Suggestion, BODY_FALLBACK_FIELDS, DEFAULT_LIMIT, RESERVED_SCORE_FIELD,
};
