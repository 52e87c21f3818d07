// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25 search over small UI/UX design tables, plus the design tooling that
//! consumes it.
//!
//! A query is tokenized once and ranked independently against each design
//! domain (styles, colors, typography, UX rules, ...), each backed by a CSV
//! table loaded lazily and cached for the life of the [`Searcher`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ tokenize.rs │────▶│   corpus/    │────▶│  scoring/   │────▶│   search/    │
//! │  (tokens)   │     │ (Collection, │     │   (BM25)    │     │ (Searcher,   │
//! │             │     │  cache)      │     │             │     │  response)   │
//! └─────────────┘     └──────────────┘     └─────────────┘     └──────────────┘
//!                                                                     │
//!                      ┌──────────────────────────────────────────────┘
//!                      ▼
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │ design/  (system generator, contrast, palette, tokens, typography, audit)   │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use design_intel::{SearchOptions, Searcher};
//!
//! let searcher = Searcher::new("data");
//! let response = searcher.search("fintech dashboard", &SearchOptions::new().max_results(5));
//! for (domain, hits) in response.iter() {
//!     println!("{domain}: {} hits, best {:.3}", hits.len(), hits[0].score);
//! }
//! ```
//!
//! Scoring a single in-memory collection:
//!
//! ```
//! use design_intel::{score, tokenize, Collection};
//!
//! let styles = Collection::from_rows(vec![
//!     vec![("Name", "Glassmorphism"), ("Keywords", "frosted blur dark")],
//!     vec![("Name", "Brutalism"), ("Keywords", "raw loud")],
//! ]);
//! let ranked = score(&tokenize("dark glass"), &styles);
//! assert_eq!(ranked[0].document.get("Name"), Some("Glassmorphism"));
//! ```

pub mod config;
pub mod corpus;
pub mod design;
mod error;
pub mod scoring;
pub mod search;
pub mod testing;
mod tokenize;

pub use config::{data_dir, DomainBudget, FieldPriority, SystemConfig, DATA_DIR_ENV, DEFAULT_MAX_RESULTS};
pub use corpus::{Collection, CollectionCache, Document, Domain, Source};
pub use error::{Error, Result};
pub use scoring::{score, ScoredResult};
pub use search::{Query, SearchOptions, SearchResponse, Searcher, STACK_KEY};
pub use tokenize::{is_word_char, tokenize};
