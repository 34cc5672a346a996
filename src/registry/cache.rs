//! Time-windowed latest-version cache
//!
//! Entries are valid for a fixed freshness window and checked lazily on read;
//! there is no background eviction. The cache is owned by one RegistryClient
//! instance, never shared across engines.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a cached registry lookup stays valid
pub const CACHE_WINDOW: Duration = Duration::from_secs(5 * 60);

/// A cached latest-version lookup
#[derive(Debug, Clone)]
struct CachedVersion {
    version: String,
    fetched_at: Instant,
}

/// Per-package latest-version cache with lazy expiry
#[derive(Debug)]
pub struct VersionCache {
    entries: HashMap<String, CachedVersion>,
    window: Duration,
}

impl VersionCache {
    /// Create a cache with the default freshness window
    pub fn new() -> Self {
        Self::with_window(CACHE_WINDOW)
    }

    /// Create a cache with a custom freshness window
    pub fn with_window(window: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            window,
        }
    }

    /// Look up a package, honoring the freshness window
    ///
    /// An expired entry is treated as absent; it will be overwritten by the
    /// next insert for the same name.
    pub fn get(&self, package: &str) -> Option<&str> {
        let entry = self.entries.get(package)?;
        if entry.fetched_at.elapsed() < self.window {
            Some(&entry.version)
        } else {
            None
        }
    }

    /// Store a freshly fetched version, stamped now
    pub fn insert(&mut self, package: impl Into<String>, version: impl Into<String>) {
        self.entries.insert(
            package.into(),
            CachedVersion {
                version: version.into(),
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop every entry unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones awaiting overwrite
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VersionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_within_window() {
        let mut cache = VersionCache::new();
        cache.insert("http_parser", "4.0.2");
        assert_eq!(cache.get("http_parser"), Some("4.0.2"));
    }

    #[test]
    fn test_cache_miss_unknown_package() {
        let cache = VersionCache::new();
        assert_eq!(cache.get("provider"), None);
    }

    #[test]
    fn test_cache_expiry_after_window() {
        let mut cache = VersionCache::with_window(Duration::from_millis(10));
        cache.insert("dio", "5.4.0");
        assert_eq!(cache.get("dio"), Some("5.4.0"));

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("dio"), None);
    }

    #[test]
    fn test_cache_insert_overwrites() {
        let mut cache = VersionCache::new();
        cache.insert("dio", "5.3.0");
        cache.insert("dio", "5.4.0");
        assert_eq!(cache.get("dio"), Some("5.4.0"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = VersionCache::new();
        cache.insert("a", "1.0.0");
        cache.insert("b", "2.0.0");
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_default_window() {
        assert_eq!(CACHE_WINDOW, Duration::from_secs(300));
    }
}
