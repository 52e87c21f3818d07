//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use design_intel::testing::write_domain;
use design_intel::{Domain, Searcher};
use tempfile::TempDir;

// Re-export canonical test utilities from design_intel::testing
pub use design_intel::testing::{collection_from_texts, write_table};

/// The bundled sample tables shipped under `data/`.
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// A source file under `tests/fixtures/audit/`.
pub fn audit_fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/audit")
        .join(name)
}

/// Searcher over the bundled sample tables.
pub fn fixture_searcher() -> Searcher {
    Searcher::new(fixture_dir())
}

/// A temporary data directory with one single-column table per entry.
///
/// Keep the returned `TempDir` alive for as long as the searcher is used.
pub fn temp_searcher(tables: &[(Domain, &[&str])]) -> (TempDir, Searcher) {
    let dir = tempfile::tempdir().expect("create temp data dir");
    for (domain, texts) in tables {
        write_domain(dir.path(), *domain, texts);
    }
    let searcher = Searcher::new(dir.path());
    (dir, searcher)
}

/// Write `stacks/<name>.csv` with a single `text` column.
pub fn write_stack(dir: &Path, name: &str, texts: &[&str]) -> PathBuf {
    let rows: Vec<[&str; 1]> = texts.iter().map(|t| [*t]).collect();
    let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    write_table(&dir.join("stacks"), &format!("{name}.csv"), &["text"], &rows)
}
