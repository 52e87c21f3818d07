// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::fs;
use std::path::{Path, PathBuf};

use crate::corpus::{Collection, Domain};

/// Write a CSV table with proper quoting, creating `dir` if needed.
///
/// Panics on I/O failure; only meant for fixtures.
pub fn write_table(dir: &Path, file: &str, headers: &[&str], rows: &[&[&str]]) -> PathBuf {
    fs::create_dir_all(dir).expect("create fixture dir");
    let path = dir.join(file);
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&path)
        .expect("open fixture table");
    writer.write_record(headers).expect("write header");
    for row in rows {
        writer.write_record(*row).expect("write row");
    }
    writer.flush().expect("flush fixture table");
    path
}

/// Write a single-column (`text`) table for `domain`.
pub fn write_domain(dir: &Path, domain: Domain, texts: &[&str]) -> PathBuf {
    let rows: Vec<[&str; 1]> = texts.iter().map(|t| [*t]).collect();
    let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    write_table(dir, domain.file_name(), &["text"], &rows)
}

/// In-memory collection with one `text` field per document.
pub fn collection_from_texts(texts: &[&str]) -> Collection {
    Collection::from_rows(texts.iter().map(|t| vec![("text", *t)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "t.csv",
            &["Name", "Note"],
            &[&["a, b", "\"quoted\""], &["short"]],
        );
        let collection = Collection::load(&path);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.documents()[0].get("Name"), Some("a, b"));
        assert_eq!(collection.documents()[0].get("Note"), Some("\"quoted\""));
        assert_eq!(collection.documents()[1].get("Note"), Some(""));
    }

    #[test]
    fn test_write_domain_uses_domain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_domain(dir.path(), Domain::Ux, &["one", "two"]);
        assert!(path.ends_with("ux-guidelines.csv"));
        assert_eq!(Collection::load(&path).len(), 2);
    }

    #[test]
    fn test_collection_from_texts() {
        let collection = collection_from_texts(&["dark mode", "light"]);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.doc_freq("dark"), 1);
    }
}
