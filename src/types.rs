// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through a search.
//!
//! A [`ContentItem`] goes in, a [`ScoredResult`] comes out, and a
//! [`SearchOutcome`] wraps the lot with counts and timing. The search core
//! reads items but never rewrites them: whatever the caller loaded (pricing,
//! ratings, dates, URLs) comes back out byte-for-byte in `extra`.
//!
//! # Invariants
//!
//! - **ContentItem**: `id` is unique within one corpus snapshot. `title` and
//!   `body` always exist (possibly empty) so scoring never sees missing data.
//! - **ScoredResult**: `score >= 1`. Zero-score items are filtered before a
//!   result is ever constructed.
//! - **SearchOutcome**: `results.len() <= total_matched` and the values of
//!   `counts_by_kind` sum to `total_matched`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 10;

/// Key that results add next to an item's own fields.
pub const RESERVED_SCORE_FIELD: &str = "score";

/// Pass-through keys that stand in for `body` when a record has none.
/// Articles carry an `excerpt`, a `content`, or both.
pub const BODY_FALLBACK_FIELDS: [&str; 2] = ["excerpt", "content"];

/// A unit of searchable content: a tool listing, a blog article, anything else.
///
/// Input records come in a few shapes. Tool listings carry `name` and
/// `description`, articles carry `title` plus an `excerpt` and/or `content`,
/// and some feeds say `type` where others say `kind`. All of these load
/// without the caller reshaping anything first. When `body` (or
/// `description`) is absent or empty, it is built from `excerpt` and
/// `content`, which also stay in `extra` untouched.
///
/// `score` is reserved: results carry their own `score` next to the item's
/// fields, so an item may not have one in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct ContentItem {
    pub id: String,
    /// Caller-defined category tag (`tool`, `article`, ...).
    pub kind: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    /// Everything else. Opaque to search, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A record as it appears on the wire, before `body` is resolved.
#[derive(Deserialize)]
struct ItemRecord {
    id: String,
    #[serde(default, alias = "type")]
    kind: String,
    #[serde(default, alias = "name")]
    title: String,
    #[serde(default, alias = "description")]
    body: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<ItemRecord> for ContentItem {
    fn from(record: ItemRecord) -> Self {
        let body = if record.body.is_empty() {
            BODY_FALLBACK_FIELDS
                .iter()
                .filter_map(|key| record.extra.get(*key).and_then(Value::as_str))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            record.body
        };

        Self {
            id: record.id,
            kind: record.kind,
            title: record.title,
            body,
            tags: record.tags,
            extra: record.extra,
        }
    }
}

impl ContentItem {
    /// Build an item with no tags and no extra fields.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            title: title.into(),
            body: body.into(),
            tags: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Replace the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Which text fields feed the haystack.
///
/// Title and body are always searched. Tags are opt-in because tag
/// vocabularies tend to be broad ("AI", "tools") and would otherwise match
/// nearly everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchFields {
    pub tags: bool,
}

impl SearchFields {
    pub const TITLE_AND_BODY: Self = Self { tags: false };
    pub const WITH_TAGS: Self = Self { tags: true };
}

/// How many of the query tokens an item must contain to qualify.
///
/// Both modes rank the same way. They differ only in the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// At least one token. Score is the number of tokens found.
    #[default]
    Any,
    /// Every token. Items missing any token are dropped.
    All,
}

impl SearchMode {
    /// Does an item with `score` matching tokens out of `token_count` qualify?
    #[inline]
    pub fn accepts(self, score: u32, token_count: usize) -> bool {
        match self {
            SearchMode::Any => score > 0,
            SearchMode::All => score > 0 && score as usize >= token_count,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Any => f.write_str("any"),
            SearchMode::All => f.write_str("all"),
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(SearchMode::Any),
            "all" => Ok(SearchMode::All),
            other => Err(format!("unknown search mode '{}' (expected any|all)", other)),
        }
    }
}

/// Knobs for a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Maximum results returned. Zero means [`DEFAULT_LIMIT`].
    pub limit: usize,
    /// Include tags in the haystack.
    pub search_tags: bool,
    pub mode: SearchMode,
    /// Strip diacritics from both query and haystack ("café" finds "cafe").
    /// Only effective with the `unicode-normalization` feature.
    pub fold_diacritics: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            search_tags: false,
            mode: SearchMode::Any,
            fold_diacritics: false,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_tags(mut self, search_tags: bool) -> Self {
        self.search_tags = search_tags;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    /// The limit actually applied: a zero limit falls back to the default.
    #[inline]
    pub fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }

    pub fn fields(&self) -> SearchFields {
        SearchFields {
            tags: self.search_tags,
        }
    }
}

/// An item that matched, paired with how many query tokens it contained.
///
/// Serializes flat: every original item field plus `score`, so presentation
/// code can render it exactly as it rendered the unscored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub item: ContentItem,
    pub score: u32,
}

/// Everything a search call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub results: Vec<ScoredResult>,
    /// Matches before truncation to the limit.
    pub total_matched: usize,
    /// Matches per kind, before truncation.
    pub counts_by_kind: BTreeMap<String, usize>,
    /// Measured wall time for this call.
    pub elapsed_millis: f64,
}

impl SearchOutcome {
    /// The outcome of a query with no terms.
    pub fn empty(elapsed_millis: f64) -> Self {
        Self {
            results: Vec::new(),
            total_matched: 0,
            counts_by_kind: BTreeMap::new(),
            elapsed_millis,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Ids of the returned results, in rank order.
    pub fn ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.item.id.as_str()).collect()
    }
}

/// An autocomplete term and how many items contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub term: String,
    pub frequency: usize,
}

/// JSON envelope for suggestions: `{ "success": true, "suggestions": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub success: bool,
    pub suggestions: Vec<Suggestion>,
}
