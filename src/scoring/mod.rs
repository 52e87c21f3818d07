// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a row earns its place in the results.
//!
//! Plain Okapi BM25 with fixed parameters. No field weights, no stemming, no
//! fuzzy terms: a row scores only on exact token overlap with the query.

mod bm25;

pub use bm25::{idf, score, tf_norm, ScoredResult, B, K1};
