// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search facade: query in, ranked outcome out.
//!
//! Tokenize, score every item, rank, truncate, count. Both ways a search can
//! fail (empty corpus, non-string query) are checked before any of that
//! starts, so there are never partial results.
//!
//! Three entry points share one pipeline:
//! - [`search`] - typed query, caller-owned corpus
//! - [`search_value`] / [`SearchRequest`] - untyped JSON input, where a
//!   non-string query is possible and gets rejected
//! - [`CachedSearcher`] - owns a corpus snapshot and remembers outcomes

mod cached;
mod suggest;

pub use cached::CachedSearcher;
pub use suggest::{suggest, suggest_response};

use crate::contracts::{check_counts_consistent, check_limit_respected};
use crate::error::SearchError;
use crate::scoring::ranking::{materialize, rank_hits, RankOptions};
use crate::tokenizer::tokenize_with;
use crate::types::{ContentItem, SearchMode, SearchOptions, SearchOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Instant;

/// Search `corpus` for `query`.
///
/// An empty or blank query is valid and matches nothing. An empty corpus is
/// an error, but a recoverable one: see [`SearchError::is_recoverable`].
///
/// ```
/// use sifter::{search, ContentItem, SearchOptions};
///
/// let corpus = vec![ContentItem::new("1", "tool", "GPT-5 Playground", "Advanced AI playground")];
/// let outcome = search("AI playground", &corpus, &SearchOptions::default()).unwrap();
///
/// assert_eq!(outcome.results[0].score, 2);
/// assert_eq!(outcome.total_matched, 1);
/// ```
pub fn search(
    query: &str,
    corpus: &[ContentItem],
    options: &SearchOptions,
) -> Result<SearchOutcome, SearchError> {
    let start = Instant::now();
    if corpus.is_empty() {
        return Err(SearchError::EmptyCorpus);
    }
    let tokens = tokenize_with(query, options.fold_diacritics);
    Ok(run(&tokens, corpus, options, start))
}

/// [`search`] for a query that arrived as JSON.
///
/// Anything other than a JSON string is rejected with
/// [`SearchError::InvalidQuery`] naming the type that was found.
pub fn search_value(
    query: &Value,
    corpus: &[ContentItem],
    options: &SearchOptions,
) -> Result<SearchOutcome, SearchError> {
    let query = query.as_str().ok_or(SearchError::InvalidQuery {
        found: json_type_name(query),
    })?;
    search(query, corpus, options)
}

/// A search request as a JSON API would receive it.
///
/// ```json
/// { "query": "ai video", "limit": 5, "searchTags": true, "mode": "all" }
/// ```
///
/// Unset fields fall back to the caller's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Value,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub search_tags: Option<bool>,
    #[serde(default)]
    pub mode: Option<SearchMode>,
    #[serde(default)]
    pub fold_diacritics: Option<bool>,
}

impl SearchRequest {
    /// `defaults` with this request's fields laid over it.
    pub fn options(&self, defaults: &SearchOptions) -> SearchOptions {
        SearchOptions {
            limit: self.limit.unwrap_or(defaults.limit),
            search_tags: self.search_tags.unwrap_or(defaults.search_tags),
            mode: self.mode.unwrap_or(defaults.mode),
            fold_diacritics: self.fold_diacritics.unwrap_or(defaults.fold_diacritics),
        }
    }

    pub fn execute(
        &self,
        corpus: &[ContentItem],
        defaults: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError> {
        search_value(&self.query, corpus, &self.options(defaults))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[inline]
pub(crate) fn elapsed_millis(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// The shared pipeline. `corpus` is known non-empty here.
pub(crate) fn run(
    tokens: &[String],
    corpus: &[ContentItem],
    options: &SearchOptions,
    start: Instant,
) -> SearchOutcome {
    let _span = tracing::debug_span!("search", tokens = tokens.len(), corpus = corpus.len())
        .entered();

    if tokens.is_empty() {
        tracing::debug!("query has no terms");
        return SearchOutcome::empty(elapsed_millis(start));
    }

    let rank_options = RankOptions::from(options);
    let hits = rank_hits(corpus, tokens, &rank_options);

    let mut counts_by_kind = BTreeMap::new();
    for hit in &hits {
        *counts_by_kind
            .entry(corpus[hit.index].kind.clone())
            .or_insert(0) += 1;
    }

    let outcome = SearchOutcome {
        results: materialize(corpus, &hits, rank_options.limit),
        total_matched: hits.len(),
        counts_by_kind,
        elapsed_millis: elapsed_millis(start),
    };

    check_limit_respected(&outcome, rank_options.limit);
    check_counts_consistent(&outcome);

    tracing::debug!(
        matched = outcome.total_matched,
        returned = outcome.results.len(),
        elapsed_ms = outcome.elapsed_millis,
        "search complete"
    );
    outcome
}
