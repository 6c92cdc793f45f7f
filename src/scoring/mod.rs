// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A score is a count of query tokens found in an item, nothing more. No
//! field weights, no position bonuses, no confidence values. Ranking sorts
//! by that count and breaks ties by corpus order.

mod core;
pub mod ranking;

pub use core::*;
