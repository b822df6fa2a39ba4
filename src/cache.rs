//! Memoization of resource lookups
//!
//! Entries are created lazily, one per distinct `category/name.ext` key, and
//! are never invalidated on their own: negative results are cached like any
//! other answer. Only [`ResolutionCache::clear`] (called by cascade
//! re-initialization and `reset_cache`) forgets them.

use std::collections::HashMap;
use std::fmt;

use crate::resolver::Resolution;

/// Normalized lookup key: `category/name.ext`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionKey(String);

impl ResolutionKey {
    pub fn new(category: &str, name: &str, extension: &str) -> Self {
        Self(format!("{category}/{name}.{extension}"))
    }

    /// The key as a relative path, ready to join onto a root.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cache of resolution results, keyed by [`ResolutionKey`]
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: HashMap<ResolutionKey, Resolution>,
}

impl ResolutionCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached result, or compute and cache it if not present
    pub fn get_or_resolve<F>(&mut self, key: ResolutionKey, resolve: F) -> Resolution
    where
        F: FnOnce(&ResolutionKey) -> Resolution,
    {
        if let Some(cached) = self.entries.get(&key) {
            log::debug!("cache hit for {key}");
            return cached.clone();
        }

        let result = resolve(&key);
        self.entries.insert(key, result.clone());
        result
    }

    /// Check if a key exists in cache
    pub fn contains(&self, key: &ResolutionKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Clear all cached entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
