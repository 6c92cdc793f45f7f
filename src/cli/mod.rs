// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sifter command-line interface.
//!
//! Three subcommands: `search` to rank a corpus against a query, `inspect` to
//! summarize a corpus file, and `suggest` to complete a partial word. Each
//! takes the corpus as a JSON file, either a flat list of items or an object
//! grouping items by kind.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use sifter::SearchMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sifter",
    about = "Keyword relevance search over a directory of tools and articles",
    version
)]
pub struct Cli {
    /// TOML config file (defaults to ./sifter.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results
    Search {
        /// Path to corpus JSON file
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also match against item tags
        #[arg(long, overrides_with = "no_tags")]
        tags: bool,

        /// Don't match against tags, even if config enables it
        #[arg(long, overrides_with = "tags")]
        no_tags: bool,

        /// Match mode: any token, or all tokens
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Ignore diacritics ("cafe" finds "café")
        #[arg(long, overrides_with = "no_fold")]
        fold: bool,

        /// Match diacritics exactly, even if config enables folding
        #[arg(long, overrides_with = "fold")]
        no_fold: bool,

        /// Print the outcome as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize a corpus file
    Inspect {
        /// Path to corpus JSON file
        corpus: PathBuf,
    },

    /// Suggest completions for the last word of the input
    Suggest {
        /// Path to corpus JSON file
        corpus: PathBuf,

        /// Partial input, e.g. "ai vid"
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value = "8")]
        limit: usize,

        /// Print the suggestions as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Any,
    All,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Any => SearchMode::Any,
            ModeArg::All => SearchMode::All,
        }
    }
}

/// Resolve a `--flag`/`--no-flag` pair against the configured value.
/// clap keeps only the last of the pair, so at most one is set.
pub fn flag_override(on: bool, off: bool, configured: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        configured
    }
}
