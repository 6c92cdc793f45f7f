// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete: complete the word being typed from the corpus vocabulary.
//!
//! The vocabulary is every whitespace-separated word of every title, body
//! and tag, lowercased, with surrounding ASCII punctuation trimmed so
//! "prompts," and "prompts" are one term. A term's frequency is the number
//! of items that contain it, not the number of occurrences.

use crate::types::{ContentItem, Suggestion, SuggestResponse};
use std::collections::{HashMap, HashSet};

fn terms(item: &ContentItem) -> impl Iterator<Item = String> + '_ {
    std::iter::once(item.title.as_str())
        .chain(std::iter::once(item.body.as_str()))
        .chain(item.tags.iter().map(String::as_str))
        .flat_map(str::split_whitespace)
        .filter_map(clean_word)
}

/// Lowercase with surrounding ASCII punctuation trimmed; `None` if nothing is left.
fn clean_word(word: &str) -> Option<String> {
    let trimmed = word.trim_matches(|c: char| c.is_ascii_punctuation());
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Suggest up to `limit` terms completing the last word of `input`.
///
/// The last word is cleaned like vocabulary terms, so "vid," completes to
/// "video". Ordered by frequency (descending), then alphabetically. Blank
/// input gets no suggestions.
pub fn suggest(input: &str, corpus: &[ContentItem], limit: usize) -> Vec<Suggestion> {
    let prefix = match input.split_whitespace().next_back().and_then(clean_word) {
        Some(word) => word,
        None => return Vec::new(),
    };
    if limit == 0 {
        return Vec::new();
    }

    let mut frequency: HashMap<String, usize> = HashMap::new();
    for item in corpus {
        let matched: HashSet<String> = terms(item).filter(|t| t.starts_with(&prefix)).collect();
        for term in matched {
            *frequency.entry(term).or_insert(0) += 1;
        }
    }

    let mut suggestions: Vec<Suggestion> = frequency
        .into_iter()
        .map(|(term, frequency)| Suggestion { term, frequency })
        .collect();
    suggestions.sort_unstable_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.term.cmp(&b.term))
    });
    suggestions.truncate(limit);

    tracing::debug!(prefix = %prefix, count = suggestions.len(), "suggestions");
    suggestions
}

/// [`suggest`] wrapped in the `{ success, suggestions }` envelope.
pub fn suggest_response(input: &str, corpus: &[ContentItem], limit: usize) -> SuggestResponse {
    SuggestResponse {
        success: true,
        suggestions: suggest(input, corpus, limit),
    }
}
