//! Runtime contracts for ranked output.
//!
//! Debug-mode assertions for the properties every ranking must satisfy.
//! They cost nothing in release builds (`debug_assert!`) and fail loudly
//! during development and tests.
//!
//! | Contract Function        | Property                                          |
//! |--------------------------|---------------------------------------------------|
//! | `check_ranked`           | Sorted by score desc, ties by index, all accepted |
//! | `check_limit_respected`  | `results <= limit` and `results <= total_matched` |
//! | `check_counts_consistent`| Per-kind counts sum to `total_matched`            |

use crate::scoring::ranking::{compare_results, Hit};
use crate::types::{SearchMode, SearchOutcome};
use std::cmp::Ordering;

/// Check that hits are strictly ordered and that the mode accepted each one.
///
/// Strict (`Less`, never `Equal`) because corpus indices are unique, so two
/// equal hits would mean an item was scored twice.
#[inline]
pub fn check_ranked(hits: &[Hit], mode: SearchMode, token_count: usize) {
    for (i, pair) in hits.windows(2).enumerate() {
        debug_assert!(
            compare_results(&pair[0], &pair[1]) == Ordering::Less,
            "Contract violation: hits[{}] {:?} does not rank before hits[{}] {:?}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }

    for hit in hits {
        debug_assert!(
            mode.accepts(hit.score, token_count),
            "Contract violation: hit {:?} not accepted by mode {} with {} tokens",
            hit,
            mode,
            token_count
        );
    }
}

/// Check the size relationships of a finished outcome.
#[inline]
pub fn check_limit_respected(outcome: &SearchOutcome, limit: usize) {
    debug_assert!(
        outcome.results.len() <= limit,
        "Contract violation: {} results exceed limit {}",
        outcome.results.len(),
        limit
    );
    debug_assert!(
        outcome.results.len() <= outcome.total_matched,
        "Contract violation: {} results exceed total_matched {}",
        outcome.results.len(),
        outcome.total_matched
    );
}

/// Check that per-kind counts add up to the total.
#[inline]
pub fn check_counts_consistent(outcome: &SearchOutcome) {
    let sum: usize = outcome.counts_by_kind.values().sum();
    debug_assert_eq!(
        sum, outcome.total_matched,
        "Contract violation: counts_by_kind sum {} != total_matched {}",
        sum, outcome.total_matched
    );
}
