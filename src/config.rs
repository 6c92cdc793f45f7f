// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: a TOML file, environment overrides, then CLI flags.
//!
//! ```toml
//! [search]
//! limit = 10
//! search_tags = false
//! mode = "any"
//! fold_diacritics = false
//!
//! [cache]
//! capacity = 128
//! ```
//!
//! Every key is optional. Precedence, lowest to highest: built-in defaults,
//! the file, `SIFTER_*` environment variables, command-line flags.

use crate::corpus::Corpus;
use crate::error::ConfigError;
use crate::search::CachedSearcher;
use crate::types::{SearchMode, SearchOptions, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable for the result limit.
pub const ENV_LIMIT: &str = "SIFTER_LIMIT";
/// Environment variable enabling tag search (`1`/`true`/`yes`).
pub const ENV_SEARCH_TAGS: &str = "SIFTER_SEARCH_TAGS";
/// Environment variable for the match mode (`any`/`all`).
pub const ENV_MODE: &str = "SIFTER_MODE";

/// Default capacity of the result cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SifterConfig {
    pub search: SearchSection,
    pub cache: CacheSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub limit: usize,
    pub search_tags: bool,
    pub mode: SearchMode,
    pub fold_diacritics: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    pub capacity: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            search_tags: false,
            mode: SearchMode::Any,
            fold_diacritics: false,
        }
    }
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl SifterConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Load from a TOML file, falling back to defaults if it's missing or
    /// broken. A broken file is logged, not ignored silently.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "using default config");
                Self::default()
            }
        }
    }

    /// Apply `SIFTER_*` overrides from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Unparseable values are logged
    /// and skipped.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => self.search.limit = limit,
                Err(_) => tracing::warn!(var = ENV_LIMIT, value = %raw, "ignoring invalid value"),
            }
        }
        if let Some(raw) = lookup(ENV_SEARCH_TAGS) {
            match parse_flag(&raw) {
                Some(flag) => self.search.search_tags = flag,
                None => {
                    tracing::warn!(var = ENV_SEARCH_TAGS, value = %raw, "ignoring invalid value")
                }
            }
        }
        if let Some(raw) = lookup(ENV_MODE) {
            match raw.parse::<SearchMode>() {
                Ok(mode) => self.search.mode = mode,
                Err(err) => tracing::warn!(var = ENV_MODE, error = %err, "ignoring invalid value"),
            }
        }
        self
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.search.limit,
            search_tags: self.search.search_tags,
            mode: self.search.mode,
            fold_diacritics: self.search.fold_diacritics,
        }
    }

    /// A cached searcher over `corpus` sized and defaulted from this config.
    pub fn searcher(&self, corpus: Corpus) -> CachedSearcher {
        CachedSearcher::with_lru(corpus, self.cache.capacity).with_defaults(self.search_options())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
