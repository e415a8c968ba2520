//! TTL response cache to avoid redundant API calls.
//!
//! Keys are fingerprints derived from normalized query text. Entries expire
//! after a fixed time-to-live; when the cache is full, the least recently
//! used entry is evicted.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Derive a cache key from query text.
///
/// Normalization: lowercase, whitespace collapsed to single spaces. Two
/// queries differing only in case or spacing share a fingerprint.
pub fn fingerprint(query: &str) -> String {
    query
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    inserted_at: Instant,
    last_used: Instant,
}

/// In-memory response cache with TTL expiry and LRU eviction on overflow.
#[derive(Debug)]
pub struct QueryCache {
    capacity: usize,
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl QueryCache {
    /// Create a cache with the given capacity and time-to-live.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Look up a cached response, refreshing its recency on hit.
    ///
    /// Expired entries are removed and reported as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        self.get_at(key, Instant::now())
    }

    /// Store a response, evicting the least recently used entry if full.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.insert_at(key, value, Instant::now());
    }

    /// Number of live entries (including any not yet expired-on-read).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_at(&mut self, key: &str, now: Instant) -> Option<String> {
        match self.entries.get_mut(key) {
            Some(entry) if now.duration_since(entry.inserted_at) < self.ttl => {
                entry.last_used = now;
                Some(entry.value.clone())
            }
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert_at(&mut self, key: &str, value: &str, now: Instant) {
        if self.capacity == 0 {
            return;
        }

        // Drop expired entries before considering eviction
        self.entries
            .retain(|_, e| now.duration_since(e.inserted_at) < self.ttl);

        if !self.entries.contains_key(key) && self.entries.len() >= self.capacity {
            let lru_key = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone());
            if let Some(k) = lru_key {
                self.entries.remove(&k);
            }
        }

        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                inserted_at: now,
                last_used: now,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_normalizes_case_and_whitespace() {
        assert_eq!(fingerprint("  What is  Rust? "), "what is rust?");
        assert_eq!(fingerprint("What is Rust?"), fingerprint("what IS rust?"));
        assert_ne!(fingerprint("what is rust"), fingerprint("what is go"));
    }

    #[test]
    fn test_hit_and_miss() {
        let mut cache = QueryCache::new(10, Duration::from_secs(600));
        assert!(cache.get("q").is_none());
        cache.insert("q", "answer");
        assert_eq!(cache.get("q").as_deref(), Some("answer"));
    }

    #[test]
    fn test_ttl_expiry() {
        let mut cache = QueryCache::new(10, Duration::from_secs(600));
        let start = Instant::now();
        cache.insert_at("q", "answer", start);

        // Still fresh just before the deadline
        let almost = start + Duration::from_secs(599);
        assert_eq!(cache.get_at("q", almost).as_deref(), Some("answer"));

        // Expired at the deadline
        let later = start + Duration::from_secs(600);
        assert!(cache.get_at("q", later).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lru_eviction_on_overflow() {
        let mut cache = QueryCache::new(2, Duration::from_secs(600));
        let t0 = Instant::now();
        cache.insert_at("a", "1", t0);
        cache.insert_at("b", "2", t0 + Duration::from_secs(1));

        // Touch "a" so "b" becomes least recently used
        assert!(cache.get_at("a", t0 + Duration::from_secs(2)).is_some());

        cache.insert_at("c", "3", t0 + Duration::from_secs(3));
        assert_eq!(cache.len(), 2);
        assert!(cache.get_at("b", t0 + Duration::from_secs(4)).is_none());
        assert!(cache.get_at("a", t0 + Duration::from_secs(4)).is_some());
        assert!(cache.get_at("c", t0 + Duration::from_secs(4)).is_some());
    }

    #[test]
    fn test_reinsert_updates_value_without_eviction() {
        let mut cache = QueryCache::new(2, Duration::from_secs(600));
        let t0 = Instant::now();
        cache.insert_at("a", "1", t0);
        cache.insert_at("b", "2", t0);
        cache.insert_at("a", "updated", t0 + Duration::from_secs(1));
        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.get_at("a", t0 + Duration::from_secs(2)).as_deref(),
            Some("updated")
        );
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut cache = QueryCache::new(0, Duration::from_secs(600));
        cache.insert("q", "answer");
        assert!(cache.get("q").is_none());
    }
}
