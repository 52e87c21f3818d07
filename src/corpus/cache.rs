// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized collections, keyed by resolved source path.
//!
//! Tables are tiny and static, so the cache never evicts on its own: an entry
//! is valid until [`CollectionCache::invalidate`] or [`CollectionCache::clear`]
//! is called, or the cache is dropped. Only the map is locked. Collections are
//! immutable and handed out as `Arc`, so readers never contend on documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use super::document::Collection;

/// Path-keyed store of loaded collections.
#[derive(Debug, Default)]
pub struct CollectionCache {
    entries: RwLock<HashMap<PathBuf, Arc<Collection>>>,
}

impl CollectionCache {
    pub fn new() -> Self {
        CollectionCache::default()
    }

    /// Return the cached collection for `path`, loading it on first use.
    ///
    /// The file is read outside the lock. If two threads miss on the same path
    /// at once, both read it but the first insert wins and both get that `Arc`.
    pub fn get_or_load(&self, path: &Path) -> Arc<Collection> {
        if let Some(hit) = self.entries.read().get(path) {
            trace!(path = %path.display(), "collection cache hit");
            return Arc::clone(hit);
        }

        let loaded = Arc::new(Collection::load(path));
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(path.to_path_buf()).or_insert(loaded))
    }

    /// Cached collection for `path`, without loading.
    pub fn get(&self, path: &Path) -> Option<Arc<Collection>> {
        self.entries.read().get(path).cloned()
    }

    /// Forget one source so the next lookup re-reads it. Returns whether an
    /// entry was present.
    pub fn invalidate(&self, path: &Path) -> bool {
        self.entries.write().remove(path).is_some()
    }

    /// Forget every source.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of cached sources (empty collections included).
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_second_load_returns_same_arc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.csv");
        fs::write(&path, "Name\nGlass\n").unwrap();

        let cache = CollectionCache::new();
        let first = cache.get_or_load(&path);
        let second = cache.get_or_load(&path);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_collection_ignores_file_changes_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.csv");
        fs::write(&path, "Name\nTeal\n").unwrap();

        let cache = CollectionCache::new();
        assert_eq!(cache.get_or_load(&path).len(), 1);

        fs::write(&path, "Name\nTeal\nCoral\n").unwrap();
        assert_eq!(cache.get_or_load(&path).len(), 1);

        assert!(cache.invalidate(&path));
        assert_eq!(cache.get_or_load(&path).len(), 2);
    }

    #[test]
    fn test_missing_source_is_cached_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let cache = CollectionCache::new();
        assert!(cache.get_or_load(&path).is_empty());
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&path).is_some());
    }

    #[test]
    fn test_clear_drops_everything() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CollectionCache::new();
        cache.get_or_load(&dir.path().join("a.csv"));
        cache.get_or_load(&dir.path().join("b.csv"));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.invalidate(&dir.path().join("a.csv")));
    }

    #[test]
    fn test_distinct_paths_get_distinct_entries() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        fs::write(&a, "Name\nOne\n").unwrap();
        fs::write(&b, "Name\nOne\n").unwrap();

        let cache = CollectionCache::new();
        assert!(!Arc::ptr_eq(&cache.get_or_load(&a), &cache.get_or_load(&b)));
    }
}
