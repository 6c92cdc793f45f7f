// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Searching itself can only fail two ways, both checked before any scoring
//! starts. Loading a corpus or a config file has its own errors, kept apart
//! so search callers never have to match on I/O variants.
//!
//! | Variant | Raised When |
//! |---------|-------------|
//! | `SearchError::InvalidQuery` | An untyped (JSON) query is not a string |
//! | `SearchError::EmptyCorpus` | The corpus has no items |
//! | `CorpusError::Io` | The corpus file can't be read |
//! | `CorpusError::Json` | The corpus isn't a list or a kind-grouped map of items |
//! | `CorpusError::DuplicateId` | Two items share an `id` |
//! | `CorpusError::ReservedField` | An item carries its own `score` |
//! | `ConfigError::*` | The config file can't be read or parsed |

use std::path::PathBuf;
use thiserror::Error;

/// Why a search call was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query was not a string. Fatal to the call, never retried.
    #[error("invalid query: expected a string, found {found}")]
    InvalidQuery {
        /// JSON type name of the offending value.
        found: &'static str,
    },

    /// Nothing to search yet. Callers should show "no data" rather than fail.
    #[error("corpus is empty")]
    EmptyCorpus,
}

impl SearchError {
    /// `EmptyCorpus` means "try again once data arrives", not "something broke".
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SearchError::EmptyCorpus)
    }
}

/// Why a corpus could not be built.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate item id '{id}'")]
    DuplicateId { id: String },

    #[error("item '{id}' uses reserved field '{field}'")]
    ReservedField { id: String, field: &'static str },
}

/// Why a config file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
