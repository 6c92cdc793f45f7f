// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match score: how many query tokens an item contains.
//!
//! The haystack is the item's searchable text flattened into one lowercase
//! string, fields separated by a single space. Tokens never contain
//! whitespace, so the separator keeps a token from matching across the seam
//! between title and body.
//!
//! Matching is plain substring containment. "ai" matches "ai", "AI-powered"
//! and "detail" alike. That is the contract: word-boundary matching would
//! change which items qualify.

use crate::tokenizer::normalize;
use crate::types::{ContentItem, SearchFields};

/// Flatten an item's searchable fields into one lowercase string.
pub fn haystack(item: &ContentItem, fields: SearchFields) -> String {
    haystack_with(item, fields, false)
}

/// [`haystack`], optionally folding diacritics.
pub fn haystack_with(item: &ContentItem, fields: SearchFields, fold_diacritics: bool) -> String {
    let mut raw = String::with_capacity(item.title.len() + item.body.len() + 1);
    raw.push_str(&item.title);
    raw.push(' ');
    raw.push_str(&item.body);
    if fields.tags {
        for tag in &item.tags {
            raw.push(' ');
            raw.push_str(tag);
        }
    }
    normalize(&raw, fold_diacritics)
}

/// Count how many `tokens` occur in `haystack`.
///
/// Each token counts once no matter how often it appears. Repeated tokens in
/// the query count once each, so "ai ai" against an AI tool scores 2.
#[inline]
pub fn score_haystack(tokens: &[String], haystack: &str) -> u32 {
    tokens
        .iter()
        .filter(|token| haystack.contains(token.as_str()))
        .count() as u32
}

/// Score one item against already-tokenized query terms.
///
/// Pure: the same tokens and item always give the same number. Zero means
/// nothing matched.
pub fn score(tokens: &[String], item: &ContentItem, fields: SearchFields) -> u32 {
    if tokens.is_empty() {
        return 0;
    }
    score_haystack(tokens, &haystack(item, fields))
}
