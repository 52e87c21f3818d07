// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-collection search: one query, many domains, top-K per domain.
//!
//! # Flow
//!
//! ```text
//! query ──tokenize──▶ tokens ─┐
//!                             ├─▶ bm25::score ──▶ top-K, score > 0 ──▶ SearchResponse
//! domain/stack ──cache──▶ Collection ┘
//! ```
//!
//! A domain with no positive scores is simply absent from the response, and so
//! is a stack table that does not exist. Callers cannot tell "no matches" from
//! "no such source", and are not meant to.
//!
//! With the `parallel` feature, domains are scored on the rayon pool. Results
//! are gathered back in [`Domain::ALL`] order, so the response is identical to
//! the sequential one.

pub mod format;

use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::config::DEFAULT_MAX_RESULTS;
use crate::corpus::{Collection, CollectionCache, Domain, Source};
use crate::scoring::{self, ScoredResult};
use crate::tokenize::tokenize;

/// Response key for stack-scoped hits.
pub const STACK_KEY: &str = "stack";

/// A query string and its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    tokens: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Query {
            raw: raw.to_string(),
            tokens: tokenize(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Scope and budget for one search call.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Domain name to restrict to. Unknown names search every domain.
    pub domain: Option<String>,
    /// Stack table to search in addition to the domains.
    pub stack: Option<String>,
    /// Maximum hits kept per section.
    pub max_results: usize,
    /// Score domains on the rayon pool (only with the `parallel` feature).
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            domain: None,
            stack: None,
            max_results: DEFAULT_MAX_RESULTS,
            parallel: true,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        SearchOptions::default()
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Domains this search will visit.
    ///
    /// A recognized name selects just that domain; a missing or unrecognized
    /// one selects all of them.
    pub fn selected_domains(&self) -> Vec<Domain> {
        match self.domain.as_deref() {
            None => Domain::ALL.to_vec(),
            Some(name) => match Domain::from_name(name) {
                Some(domain) => vec![domain],
                None => {
                    warn!(domain = name, "unknown domain filter; searching all domains");
                    Domain::ALL.to_vec()
                }
            },
        }
    }
}

/// Ranked hits per section, in insertion order.
///
/// Sections are `"stack"` (if any) followed by domains in [`Domain::ALL`]
/// order. Every list is non-empty, sorted by descending score, and holds only
/// positive scores.
#[derive(Debug, Clone, Default)]
pub struct SearchResponse {
    sections: Vec<(String, Vec<ScoredResult>)>,
}

impl SearchResponse {
    pub fn new() -> Self {
        SearchResponse::default()
    }

    /// Add or replace a section. Empty hit lists are ignored.
    pub fn insert(&mut self, key: impl Into<String>, hits: Vec<ScoredResult>) {
        if hits.is_empty() {
            return;
        }
        let key = key.into();
        match self.sections.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = hits,
            None => self.sections.push((key, hits)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[ScoredResult]> {
        self.sections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, hits)| hits.as_slice())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScoredResult])> + '_ {
        self.sections
            .iter()
            .map(|(k, hits)| (k.as_str(), hits.as_slice()))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Hits across all sections.
    pub fn total_hits(&self) -> usize {
        self.sections.iter().map(|(_, hits)| hits.len()).sum()
    }
}

impl Serialize for SearchResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (key, hits) in &self.sections {
            map.serialize_entry(key, hits)?;
        }
        map.end()
    }
}

/// Keep the best `k` hits, then drop non-positive scores.
pub fn top_hits(scored: Vec<ScoredResult>, k: usize) -> Vec<ScoredResult> {
    scored
        .into_iter()
        .take(k)
        .filter(|hit| hit.score > 0.0)
        .collect()
}

/// Search engine over a data directory, with its own collection cache.
#[derive(Debug)]
pub struct Searcher {
    data_dir: PathBuf,
    cache: CollectionCache,
}

impl Searcher {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Searcher {
            data_dir: data_dir.into(),
            cache: CollectionCache::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn cache(&self) -> &CollectionCache {
        &self.cache
    }

    /// Load (or fetch from cache) the collection behind `source`.
    ///
    /// A source that does not resolve is an empty collection, same as a
    /// missing file, and is never cached.
    pub fn collection(&self, source: &Source) -> Arc<Collection> {
        match source.resolve(&self.data_dir) {
            Some(path) => self.cache.get_or_load(&path),
            None => {
                warn!(source = ?source, "source name is not a plain file name; ignoring");
                Arc::new(Collection::empty())
            }
        }
    }

    /// Run `query` over the selected domains (and stack, if any).
    pub fn search(&self, query: &str, options: &SearchOptions) -> SearchResponse {
        let query = Query::parse(query);
        let k = options.max_results;
        let mut response = SearchResponse::new();

        if let Some(stack) = options.stack.as_deref() {
            response.insert(STACK_KEY, self.stack_hits(&query, stack, k));
        }

        let domains = options.selected_domains();
        for (domain, hits) in self.score_domains(&query, &domains, k, options.parallel) {
            response.insert(domain.name(), hits);
        }

        debug!(
            query = query.raw(),
            tokens = query.tokens().len(),
            sections = response.len(),
            hits = response.total_hits(),
            "search complete"
        );
        response
    }

    /// Top `k` positive hits from one stack table, without touching the
    /// domains. Unknown stacks give an empty list.
    pub fn search_stack(&self, query: &str, stack: &str, k: usize) -> Vec<ScoredResult> {
        self.stack_hits(&Query::parse(query), stack, k)
    }

    fn stack_hits(&self, query: &Query, stack: &str, k: usize) -> Vec<ScoredResult> {
        let collection = self.collection(&Source::Stack(stack.to_string()));
        top_hits(scoring::score(query.tokens(), &collection), k)
    }

    fn score_domain(&self, query: &Query, domain: Domain, k: usize) -> (Domain, Vec<ScoredResult>) {
        let collection = self.collection(&Source::Domain(domain));
        (domain, top_hits(scoring::score(query.tokens(), &collection), k))
    }

    #[cfg(feature = "parallel")]
    fn score_domains(
        &self,
        query: &Query,
        domains: &[Domain],
        k: usize,
        parallel: bool,
    ) -> Vec<(Domain, Vec<ScoredResult>)> {
        if parallel && domains.len() > 1 {
            // Indexed collect keeps input order.
            domains
                .par_iter()
                .map(|&domain| self.score_domain(query, domain, k))
                .collect()
        } else {
            domains
                .iter()
                .map(|&domain| self.score_domain(query, domain, k))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_domains(
        &self,
        query: &Query,
        domains: &[Domain],
        k: usize,
        _parallel: bool,
    ) -> Vec<(Domain, Vec<ScoredResult>)> {
        domains
            .iter()
            .map(|&domain| self.score_domain(query, domain, k))
            .collect()
    }
}
