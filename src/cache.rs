// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result caching for repeated queries.
//!
//! Search-as-you-type sends the same handful of queries over and over.
//! [`CachedSearcher`](crate::CachedSearcher) remembers finished outcomes
//! behind the [`ResultCache`] trait so the policy is swappable:
//!
//! - [`LruCache`] - bounded, evicts the least recently used entry
//! - [`NoCache`] - stores nothing
//!
//! Keys are built from normalized tokens, not raw query text, so
//! "AI  Tools" and "ai tools" share an entry.

use crate::types::{SearchMode, SearchOptions, SearchOutcome};
use parking_lot::Mutex;
use std::fmt;
use std::num::NonZeroUsize;

/// Identity of a search within one corpus snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub tokens: Vec<String>,
    pub limit: usize,
    pub search_tags: bool,
    pub mode: SearchMode,
    pub fold_diacritics: bool,
}

impl CacheKey {
    pub fn new(tokens: Vec<String>, options: &SearchOptions) -> Self {
        Self {
            tokens,
            limit: options.effective_limit(),
            search_tags: options.search_tags,
            mode: options.mode,
            fold_diacritics: options.fold_diacritics,
        }
    }
}

/// Storage for finished search outcomes.
///
/// Methods take `&self` so a searcher can be shared across threads;
/// implementations handle their own locking.
pub trait ResultCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<SearchOutcome>;
    fn put(&self, key: CacheKey, outcome: SearchOutcome);
    fn clear(&self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ResultCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<SearchOutcome> {
        None
    }

    fn put(&self, _key: CacheKey, _outcome: SearchOutcome) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}

/// Bounded least-recently-used cache.
///
/// Zero capacity stores nothing, like [`NoCache`].
pub struct LruCache {
    capacity: usize,
    entries: Option<Mutex<lru::LruCache<CacheKey, SearchOutcome>>>,
}

impl LruCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(lru::LruCache::new(cap))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Debug for LruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

impl ResultCache for LruCache {
    fn get(&self, key: &CacheKey) -> Option<SearchOutcome> {
        self.entries.as_ref()?.lock().get(key).cloned()
    }

    fn put(&self, key: CacheKey, outcome: SearchOutcome) {
        let Some(entries) = &self.entries else {
            return;
        };
        let mut entries = entries.lock();
        // `push` also hands back the old pair when a key is overwritten.
        if let Some((evicted, _)) = entries.push(key, outcome) {
            if !entries.contains(&evicted) {
                tracing::trace!(tokens = ?evicted.tokens, "evicted cached search");
            }
        }
    }

    fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.lock().clear();
        }
    }

    fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.lock().len())
    }
}
