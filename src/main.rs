// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use sifter::{
    suggest_response, tokenize_with, ConfigError, Corpus, CorpusError, SearchError,
    SearchOptions, SearchOutcome, SifterConfig,
};
use std::collections::BTreeSet;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{
    dim, kind_badge, pad_right, row, score_value, section_bot, section_mid, section_top,
    timing_ms, title, truncate,
};
use cli::{flag_override, Cli, Commands};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "sifter.toml";

/// Log filter variable; defaults to `warn`.
const LOG_ENV: &str = "SIFTER_LOG";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SifterConfig, CliError> {
    let config = match path {
        Some(path) => SifterConfig::load(path)?,
        None => SifterConfig::load_or_default(DEFAULT_CONFIG),
    };
    Ok(config.apply_env())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            tags,
            no_tags,
            mode,
            fold,
            no_fold,
            json,
        } => {
            let mut options = config.search_options();
            if let Some(limit) = limit {
                options.limit = limit;
            }
            if let Some(mode) = mode {
                options.mode = mode.into();
            }
            options.search_tags = flag_override(tags, no_tags, options.search_tags);
            options.fold_diacritics = flag_override(fold, no_fold, options.fold_diacritics);

            let corpus = Corpus::from_path(&corpus)?;
            run_search(&config, corpus, &query, &options, json)
        }
        Commands::Inspect { corpus } => {
            let corpus = Corpus::from_path(&corpus)?;
            inspect_corpus(&corpus);
            Ok(())
        }
        Commands::Suggest {
            corpus,
            prefix,
            limit,
            json,
        } => {
            let corpus = Corpus::from_path(&corpus)?;
            let response = suggest_response(&prefix, &corpus, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                section_top("SUGGESTIONS");
                if response.suggestions.is_empty() {
                    row(&dim(" no completions"));
                }
                for s in &response.suggestions {
                    row(&format!(" {} {}", pad_right(&s.term, 40), dim(&s.frequency.to_string())));
                }
                section_bot();
            }
            Ok(())
        }
    }
}

fn run_search(
    config: &SifterConfig,
    corpus: Corpus,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<(), CliError> {
    let searcher = config.searcher(corpus);
    let start = Instant::now();
    let outcome = match searcher.search_with(query, options) {
        Ok(outcome) => outcome,
        Err(err) if err.is_recoverable() => {
            eprintln!("corpus is empty, nothing to search");
            SearchOutcome::empty(start.elapsed().as_secs_f64() * 1000.0)
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let tokens = tokenize_with(query, options.fold_diacritics);
    print_outcome(query, &tokens, options, &outcome);
    Ok(())
}

fn print_outcome(query: &str, tokens: &[String], options: &SearchOptions, outcome: &SearchOutcome) {
    title("SIFTER SEARCH");

    section_top("QUERY");
    row(&format!(" {}", query));
    row(&dim(&format!(
        " tokens: [{}]  mode: {}  limit: {}  tags: {}",
        tokens.join(", "),
        options.mode,
        options.effective_limit(),
        if options.search_tags { "on" } else { "off" }
    )));

    section_mid(&format!(
        "RESULTS ({} of {})",
        outcome.results.len(),
        outcome.total_matched
    ));
    if outcome.results.is_empty() {
        row(&dim(" no matches"));
    }
    for (rank, result) in outcome.results.iter().enumerate() {
        let item = &result.item;
        row(&format!(
            " {:>2}. {} {} {}",
            rank + 1,
            score_value(result.score, tokens.len()),
            kind_badge(&item.kind),
            truncate(&item.title, 56)
        ));
        if !item.body.is_empty() {
            row(&dim(&format!("        {}", truncate(&item.body, 70))));
        }
    }

    if !outcome.counts_by_kind.is_empty() {
        section_mid("BY KIND");
        for (kind, count) in &outcome.counts_by_kind {
            row(&format!(" {} {}", pad_right(&kind_badge(kind), 16), count));
        }
    }

    section_mid("TIMING");
    row(&format!(" {}", timing_ms(outcome.elapsed_millis)));
    section_bot();
}

fn inspect_corpus(corpus: &Corpus) {
    let tags: BTreeSet<String> = corpus
        .iter()
        .flat_map(|item| item.tags.iter().map(|t| t.to_lowercase()))
        .collect();
    let untitled = corpus.iter().filter(|item| item.title.is_empty()).count();
    let extra_fields: BTreeSet<&str> = corpus
        .iter()
        .flat_map(|item| item.extra.keys().map(String::as_str))
        .collect();

    title("SIFTER CORPUS");

    section_top("ITEMS");
    row(&format!(" {:<18}{}", "total", corpus.len()));
    row(&format!(" {:<18}{}", "untitled", untitled));
    row(&format!(" {:<18}{}", "distinct tags", tags.len()));

    section_mid("BY KIND");
    for (kind, count) in corpus.counts_by_kind() {
        row(&format!(" {} {}", pad_right(&kind_badge(&kind), 16), count));
    }

    if !extra_fields.is_empty() {
        section_mid("PASS-THROUGH FIELDS");
        let joined = extra_fields.into_iter().collect::<Vec<_>>().join(", ");
        row(&format!(" {}", truncate(&joined, 78)));
    }
    section_bot();
}
