// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Okapi BM25 over one collection.
//!
//! ```text
//! score(d) = Σ_t idf(t) · tf·(k1 + 1) / (tf + k1·(1 − b + b·dl/avgdl))
//! idf(t)   = ln((N − df + 0.5) / (df + 0.5) + 1)
//! ```
//!
//! The `+ 1` inside the log keeps idf positive even for terms present in every
//! document, so a score is never negative. Terms the collection has never seen
//! (`df = 0`) are skipped outright.
//!
//! Every document gets a score, including zero. Filtering and truncation belong
//! to the orchestrator.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;

use crate::corpus::{Collection, Document};

/// Term-frequency saturation.
pub const K1: f64 = 1.5;

/// Length normalization strength.
pub const B: f64 = 0.75;

/// A document and its relevance to a query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    pub score: f64,
    #[serde(rename = "fields")]
    pub document: Arc<Document>,
}

/// Inverse document frequency for a term in `df` of `n` documents.
pub fn idf(n: usize, df: usize) -> f64 {
    let n = n as f64;
    let df = df as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// Saturated, length-normalized term frequency.
pub fn tf_norm(tf: u32, doc_len: usize, avg_len: f64) -> f64 {
    let tf = f64::from(tf);
    let dl = doc_len as f64;
    (tf * (K1 + 1.0)) / (tf + K1 * (1.0 - B + B * dl / avg_len))
}

/// Score every document of `collection` against `query_tokens`.
///
/// Repeated query terms are counted once per occurrence. The result is sorted
/// by descending score with a stable sort, so equal scores keep collection
/// order.
pub fn score(query_tokens: &[String], collection: &Collection) -> Vec<ScoredResult> {
    if collection.is_empty() {
        return Vec::new();
    }

    let n = collection.len();
    let avg_len = collection.avg_len();

    // (term, idf) for every query occurrence the collection knows about.
    // A term with df > 0 implies at least one token, so avg_len > 0 below.
    let weighted: Vec<(&str, f64)> = query_tokens
        .iter()
        .filter_map(|term| {
            let df = collection.doc_freq(term);
            (df > 0).then(|| (term.as_str(), idf(n, df)))
        })
        .collect();

    let mut scored: Vec<ScoredResult> = collection
        .documents()
        .iter()
        .map(|doc| {
            let dl = doc.len();
            let score = weighted
                .iter()
                .map(|&(term, idf)| idf * tf_norm(doc.term_frequency(term), dl, avg_len))
                .sum();
            ScoredResult {
                score,
                document: Arc::clone(doc),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}
