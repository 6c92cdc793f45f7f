// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A searcher that owns its corpus and remembers outcomes.

use super::{elapsed_millis, run};
use crate::cache::{CacheKey, LruCache, ResultCache};
use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::tokenizer::tokenize_with;
use crate::types::{SearchOptions, SearchOutcome};
use std::time::Instant;

/// Searches one corpus snapshot, caching outcomes until the snapshot changes.
///
/// A cached outcome comes back with `elapsed_millis` set to the time the
/// lookup took, not the time the original search took.
#[derive(Debug)]
pub struct CachedSearcher<C: ResultCache = LruCache> {
    corpus: Corpus,
    cache: C,
    defaults: SearchOptions,
}

impl CachedSearcher<LruCache> {
    /// A searcher with an LRU cache of `capacity` outcomes.
    pub fn with_lru(corpus: Corpus, capacity: usize) -> Self {
        Self::new(corpus, LruCache::new(capacity))
    }
}

impl<C: ResultCache> CachedSearcher<C> {
    pub fn new(corpus: Corpus, cache: C) -> Self {
        Self {
            corpus,
            cache,
            defaults: SearchOptions::default(),
        }
    }

    /// Options used by [`search`](Self::search).
    pub fn with_defaults(mut self, defaults: SearchOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn defaults(&self) -> &SearchOptions {
        &self.defaults
    }

    /// Search with the default options.
    pub fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        self.search_with(query, &self.defaults)
    }

    pub fn search_with(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError> {
        let start = Instant::now();
        if self.corpus.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }

        let key = CacheKey::new(tokenize_with(query, options.fold_diacritics), options);
        if let Some(mut outcome) = self.cache.get(&key) {
            outcome.elapsed_millis = elapsed_millis(start);
            tracing::trace!(tokens = ?key.tokens, "cache hit");
            return Ok(outcome);
        }

        let outcome = run(&key.tokens, &self.corpus, options, start);
        self.cache.put(key, outcome.clone());
        Ok(outcome)
    }

    /// Swap in a new snapshot. Everything cached against the old one goes.
    pub fn refresh(&mut self, corpus: Corpus) {
        tracing::debug!(
            old = self.corpus.len(),
            new = corpus.len(),
            "corpus refreshed"
        );
        self.corpus = corpus;
        self.cache.clear();
    }
}
