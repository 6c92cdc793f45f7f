// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score everything, keep the matches, sort, truncate.
//!
//! Sort order:
//! 1. **Score** - descending (more matching tokens wins)
//! 2. **Corpus index** - ascending, so equal scores keep the order the caller
//!    supplied
//!
//! The index tiebreak makes the order total. That matters for the parallel
//! path: rayon may score items in any order, but the sort puts them back
//! exactly where the sequential path would.

use crate::contracts::check_ranked;
use crate::scoring::core::{haystack_with, score_haystack};
use crate::types::{
    ContentItem, ScoredResult, SearchFields, SearchMode, SearchOptions, DEFAULT_LIMIT,
};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A matching item, identified by its position in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub score: u32,
}

/// Everything the ranker needs besides the items and tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub limit: usize,
    pub fields: SearchFields,
    pub mode: SearchMode,
    pub fold_diacritics: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            fields: SearchFields::default(),
            mode: SearchMode::Any,
            fold_diacritics: false,
        }
    }
}

impl From<&SearchOptions> for RankOptions {
    fn from(options: &SearchOptions) -> Self {
        Self {
            limit: options.effective_limit(),
            fields: options.fields(),
            mode: options.mode,
            fold_diacritics: options.fold_diacritics,
        }
    }
}

/// Compare two hits for ranking. `Less` means `a` ranks first.
#[inline]
pub fn compare_results(a: &Hit, b: &Hit) -> Ordering {
    match b.score.cmp(&a.score) {
        Ordering::Equal => a.index.cmp(&b.index),
        ord => ord,
    }
}

/// Score one item, returning a hit only if the mode accepts it.
#[inline]
fn hit_for(index: usize, item: &ContentItem, tokens: &[String], options: &RankOptions) -> Option<Hit> {
    let hay = haystack_with(item, options.fields, options.fold_diacritics);
    let score = score_haystack(tokens, &hay);
    options
        .mode
        .accepts(score, tokens.len())
        .then_some(Hit { index, score })
}

#[cfg(feature = "parallel")]
fn collect_hits(items: &[ContentItem], tokens: &[String], options: &RankOptions) -> Vec<Hit> {
    items
        .par_iter()
        .enumerate()
        .filter_map(|(index, item)| hit_for(index, item, tokens, options))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_hits(items: &[ContentItem], tokens: &[String], options: &RankOptions) -> Vec<Hit> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| hit_for(index, item, tokens, options))
        .collect()
}

/// Every qualifying item, best first. Not truncated: callers that need the
/// total match count or per-kind counts read them from here, then cut to
/// `options.limit` themselves.
pub fn rank_hits(items: &[ContentItem], tokens: &[String], options: &RankOptions) -> Vec<Hit> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut hits = collect_hits(items, tokens, options);
    hits.sort_unstable_by(compare_results);

    check_ranked(&hits, options.mode, tokens.len());
    hits
}

/// Turn the top `limit` hits into results, cloning their items.
pub fn materialize(items: &[ContentItem], hits: &[Hit], limit: usize) -> Vec<ScoredResult> {
    hits.iter()
        .take(limit)
        .map(|hit| ScoredResult {
            item: items[hit.index].clone(),
            score: hit.score,
        })
        .collect()
}

/// Rank `items` against `tokens` with full options.
pub fn rank_with(
    items: &[ContentItem],
    tokens: &[String],
    options: &RankOptions,
) -> Vec<ScoredResult> {
    let hits = rank_hits(items, tokens, options);
    materialize(items, &hits, options.limit)
}

/// Rank `items` against `tokens`, searching title and body, keeping items
/// that match at least one token, and returning at most `limit` results.
///
/// Empty `tokens` returns nothing rather than the whole corpus.
pub fn rank(items: &[ContentItem], tokens: &[String], limit: usize) -> Vec<ScoredResult> {
    rank_with(
        items,
        tokens,
        &RankOptions {
            limit,
            ..RankOptions::default()
        },
    )
}
