// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content store: a validated, immutable snapshot of items.
//!
//! Search functions take a plain `&[ContentItem]`, so a `Corpus` is optional.
//! What it adds is the unique-id check and loading from the two JSON shapes
//! directory feeds come in:
//!
//! ```text
//! flat:     [ {"id": "...", "kind": "tool", ...}, ... ]
//! grouped:  { "tool": [ {...}, ... ], "article": [ {...}, ... ] }
//! ```
//!
//! Grouped input is read in key order. An item with no `kind` of its own
//! takes its group's key; an explicit `kind` is left alone.

use crate::error::CorpusError;
use crate::types::{ContentItem, RESERVED_SCORE_FIELD};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Flat(Vec<ContentItem>),
    Grouped(BTreeMap<String, Vec<ContentItem>>),
}

impl CorpusFile {
    fn into_items(self) -> Vec<ContentItem> {
        match self {
            CorpusFile::Flat(items) => items,
            CorpusFile::Grouped(groups) => groups
                .into_iter()
                .flat_map(|(kind, items)| {
                    items.into_iter().map(move |mut item| {
                        if item.kind.is_empty() {
                            item.kind = kind.clone();
                        }
                        item
                    })
                })
                .collect(),
        }
    }
}

/// An ordered set of items with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    items: Vec<ContentItem>,
}

impl Corpus {
    /// Validate and wrap `items`, keeping their order.
    ///
    /// Ids must be unique, and no item may carry a `score` of its own.
    pub fn from_items(items: Vec<ContentItem>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CorpusError::DuplicateId {
                    id: item.id.clone(),
                });
            }
            if item.extra.contains_key(RESERVED_SCORE_FIELD) {
                return Err(CorpusError::ReservedField {
                    id: item.id.clone(),
                    field: RESERVED_SCORE_FIELD,
                });
            }
        }
        Ok(Self { items })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        Self::from_items(file.into_items())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_reader(reader)?;
        Self::from_items(file.into_items())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), items = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Item count per kind, over the whole corpus.
    pub fn counts_by_kind(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.kind.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl Deref for Corpus {
    type Target = [ContentItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl AsRef<[ContentItem]> for Corpus {
    fn as_ref(&self) -> &[ContentItem] {
        &self.items
    }
}

impl TryFrom<Vec<ContentItem>> for Corpus {
    type Error = CorpusError;

    fn try_from(items: Vec<ContentItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}
