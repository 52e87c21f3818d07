// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading design tables into memory: sources, documents, and the cache.

mod cache;
mod document;
mod source;

pub use cache::CollectionCache;
pub use document::{Collection, Document};
pub use source::{Domain, Source, STACKS_DIR};
