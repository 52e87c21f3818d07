// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Documents and collections: rows of a design table plus the term statistics
//! BM25 needs.
//!
//! Everything here is computed once when a table is loaded and never mutated
//! afterwards, which is what lets the cache hand out `Arc<Collection>` to any
//! number of concurrent searches without locking.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::tokenize::tokenize;

/// One row of a design table.
///
/// Fields keep the source column order. Values are returned verbatim to
/// consumers; only the token sequence is normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Vec<(String, String)>,
    tokens: Vec<String>,
    term_freqs: HashMap<String, u32>,
}

impl Document {
    /// Build a document from ordered `(field, value)` pairs.
    ///
    /// The token source is every value joined by a single space, in field order.
    pub fn new(fields: Vec<(String, String)>) -> Self {
        let text = fields
            .iter()
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let tokens = tokenize(&text);

        let mut term_freqs: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *term_freqs.entry(token.clone()).or_insert(0) += 1;
        }

        Document {
            fields,
            tokens,
            term_freqs,
        }
    }

    /// Ordered `(field, value)` pairs.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Token sequence of the concatenated field values.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Token count (`dl` in the BM25 formula).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Occurrences of `term` in this document.
    pub fn term_frequency(&self, term: &str) -> u32 {
        self.term_freqs.get(term).copied().unwrap_or(0)
    }
}

/// Serializes as a JSON object of the raw fields, in column order.
impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// All documents loaded from one source, with collection-wide statistics.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    documents: Vec<Arc<Document>>,
    avg_len: f64,
    doc_freqs: HashMap<String, usize>,
}

impl Collection {
    /// A collection with no documents. Missing sources load as this.
    pub fn empty() -> Self {
        Collection::default()
    }

    /// Build a collection and its statistics from already-parsed documents.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let documents: Vec<Arc<Document>> = documents.into_iter().map(Arc::new).collect();
        if documents.is_empty() {
            return Collection::empty();
        }

        let total_len: usize = documents.iter().map(|d| d.len()).sum();
        let avg_len = total_len as f64 / documents.len() as f64;

        let mut doc_freqs: HashMap<String, usize> = HashMap::new();
        for doc in &documents {
            let seen: HashSet<&str> = doc.tokens().iter().map(String::as_str).collect();
            for term in seen {
                *doc_freqs.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        Collection {
            documents,
            avg_len,
            doc_freqs,
        }
    }

    /// Convenience for tests and callers holding plain rows.
    pub fn from_rows<I, R, K, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Collection::from_documents(
            rows.into_iter()
                .map(|row| {
                    Document::new(
                        row.into_iter()
                            .map(|(k, v)| (k.into(), v.into()))
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    /// Read a CSV table with a header row.
    ///
    /// Never fails: a missing file is an empty collection, and so is a file
    /// that cannot be parsed (logged at `warn`). Short rows are padded with
    /// empty strings; cells beyond the header are dropped.
    pub fn load(path: &Path) -> Self {
        match read_table(path) {
            Ok(documents) => {
                debug!(
                    path = %path.display(),
                    documents = documents.len(),
                    "loaded collection"
                );
                Collection::from_documents(documents)
            }
            Err(err) if is_not_found(&err) => {
                debug!(path = %path.display(), "no such source; using empty collection");
                Collection::empty()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable source; using empty collection");
                Collection::empty()
            }
        }
    }

    pub fn documents(&self) -> &[Arc<Document>] {
        &self.documents
    }

    /// Number of documents (`N`).
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Mean token count across documents; 0 for an empty collection.
    pub fn avg_len(&self) -> f64 {
        self.avg_len
    }

    /// Number of documents containing `term` at least once.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms in the collection.
    pub fn vocabulary_len(&self) -> usize {
        self.doc_freqs.len()
    }
}

fn read_table(path: &Path) -> Result<Vec<Document>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut documents = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();
        documents.push(Document::new(fields));
    }
    Ok(documents)
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound)
}
