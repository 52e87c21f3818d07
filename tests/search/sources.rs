//! Loading, caching and degraded data sources.

use std::fs;
use std::sync::Arc;

use design_intel::{Domain, SearchOptions, Searcher, Source};

use crate::common::{temp_searcher, write_table};

#[test]
fn test_missing_data_dir_is_empty_not_an_error() {
    let searcher = Searcher::new("/definitely/not/here");
    assert!(searcher.search("dark", &SearchOptions::new()).is_empty());
}

#[test]
fn test_collections_are_cached() {
    let (_dir, searcher) = temp_searcher(&[(Domain::Style, &["dark"])]);

    let first = searcher.collection(&Source::Domain(Domain::Style));
    let second = searcher.collection(&Source::Domain(Domain::Style));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_cache_survives_file_changes_until_invalidated() {
    let (dir, searcher) = temp_searcher(&[(Domain::Style, &["dark"])]);
    assert_eq!(searcher.search("dark", &SearchOptions::new()).total_hits(), 1);

    write_table(dir.path(), Domain::Style.file_name(), &["text"], &[&["dark"], &["dark too"]]);
    assert_eq!(searcher.search("dark", &SearchOptions::new()).total_hits(), 1);

    let path = Source::Domain(Domain::Style).resolve(dir.path()).unwrap();
    assert!(searcher.cache().invalidate(&path));
    assert_eq!(searcher.search("dark", &SearchOptions::new()).total_hits(), 2);
}

#[test]
fn test_short_rows_are_padded() {
    let dir = tempfile::tempdir().unwrap();
    write_table(
        dir.path(),
        Domain::Ux.file_name(),
        &["Category", "Issue", "Do"],
        &[&["Forms", "validation"]],
    );
    let searcher = Searcher::new(dir.path());
    let response = searcher.search("validation", &SearchOptions::new());

    let hit = &response.get("ux").unwrap()[0];
    assert_eq!(hit.document.get("Do"), Some(""));
}

#[test]
fn test_binary_garbage_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(Domain::Color.file_name()), [0xff, 0xfe, 0x00, 0x81]).unwrap();
    let searcher = Searcher::new(dir.path());
    assert!(searcher.search("blue", &SearchOptions::new()).is_empty());
}
