//! Expiring result cache keyed by the full search request.
//!
//! Entries are scoped to one `(query, mode, result_count)` tuple; nothing is
//! shared across distinct queries. The clock is a trait so tests can advance
//! time without sleeping.

use crate::types::{SearchMode, SearchResultSet};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Time source for expiry checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    pub query: String,
    pub mode: SearchMode,
    pub result_count: u32,
}

pub(crate) struct ResultCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, (SearchResultSet, Instant)>>,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return a clone of the cached result set, evicting it when expired.
    pub fn get(&self, key: &CacheKey, now: Instant) -> Option<SearchResultSet> {
        let mut entries = self.entries.lock().expect("cache lock");
        if let Some((value, stored_at)) = entries.get(key) {
            if now.duration_since(*stored_at) < self.ttl {
                return Some(value.clone());
            }
            entries.remove(key);
        }
        None
    }

    pub fn put(&self, key: CacheKey, value: SearchResultSet, now: Instant) {
        let mut entries = self.entries.lock().expect("cache lock");
        entries.insert(key, (value, now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrganicHit;

    fn key(q: &str) -> CacheKey {
        CacheKey {
            query: q.to_string(),
            mode: SearchMode::Search,
            result_count: 10,
        }
    }

    fn result_set() -> SearchResultSet {
        SearchResultSet {
            organic: vec![OrganicHit {
                title: "t".into(),
                snippet: "s".into(),
                link: None,
            }],
            news: vec![],
        }
    }

    #[test]
    fn hit_within_ttl() {
        let cache = ResultCache::new(Duration::from_secs(3600));
        let t0 = Instant::now();
        cache.put(key("rust"), result_set(), t0);

        let got = cache.get(&key("rust"), t0 + Duration::from_secs(3599));
        assert!(got.is_some());
    }

    #[test]
    fn entry_expires_after_ttl() {
        let cache = ResultCache::new(Duration::from_secs(3600));
        let t0 = Instant::now();
        cache.put(key("rust"), result_set(), t0);

        assert!(cache.get(&key("rust"), t0 + Duration::from_secs(3600)).is_none());
        // Expired entries are dropped, not resurrected.
        assert!(cache.get(&key("rust"), t0).is_none());
    }

    #[test]
    fn keys_do_not_collide_across_mode_or_count() {
        let cache = ResultCache::new(Duration::from_secs(3600));
        let t0 = Instant::now();
        cache.put(key("rust"), result_set(), t0);

        let news_key = CacheKey {
            query: "rust".into(),
            mode: SearchMode::News,
            result_count: 10,
        };
        let wider_key = CacheKey {
            query: "rust".into(),
            mode: SearchMode::Search,
            result_count: 20,
        };
        assert!(cache.get(&news_key, t0).is_none());
        assert!(cache.get(&wider_key, t0).is_none());
    }
}
