//! Short-lived cache of list responses.
//!
//! Holds the latest raw list body per resource and query string. Any
//! successful mutation on a resource drops that resource's entries so the
//! next list goes back to the server.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Key {
    resource: &'static str,
    query: String,
}

/// Latest list bodies keyed by resource and query.
#[derive(Debug)]
pub struct ListCache {
    ttl: Duration,
    entries: Mutex<HashMap<Key, (Instant, serde_json::Value)>>,
}

impl ListCache {
    /// A zero `ttl` disables caching.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Cached body for `resource` and `query`, if still fresh.
    pub fn get(&self, resource: &'static str, query: &str) -> Option<serde_json::Value> {
        if !self.is_enabled() {
            return None;
        }
        let key = Key {
            resource,
            query: query.to_string(),
        };
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(&key) {
            Some((stored, value)) if stored.elapsed() < self.ttl => Some(value.clone()),
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, resource: &'static str, query: &str, value: serde_json::Value) {
        if !self.is_enabled() {
            return;
        }
        let key = Key {
            resource,
            query: query.to_string(),
        };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, (Instant::now(), value));
    }

    /// Drop every entry for `resource`.
    pub fn invalidate(&self, resource: &'static str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|key, _| key.resource != resource);
        let dropped = before - entries.len();
        if dropped > 0 {
            tracing::debug!(resource, dropped, "invalidated cached lists");
        }
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn stores_and_returns_fresh_entries() {
        let cache = ListCache::new(Duration::from_secs(30));
        cache.put("vendor", "page=1", json!([1]));
        assert_eq!(cache.get("vendor", "page=1"), Some(json!([1])));
        assert_eq!(cache.get("vendor", "page=2"), None);
    }

    #[test]
    fn invalidation_is_per_resource() {
        let cache = ListCache::new(Duration::from_secs(30));
        cache.put("vendor", "page=1", json!([1]));
        cache.put("vendor", "page=2", json!([2]));
        cache.put("unit", "page=1", json!([3]));
        cache.invalidate("vendor");
        assert_eq!(cache.get("vendor", "page=1"), None);
        assert_eq!(cache.get("unit", "page=1"), Some(json!([3])));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_ttl_disables_cache() {
        let cache = ListCache::new(Duration::ZERO);
        cache.put("vendor", "page=1", json!([1]));
        assert!(cache.is_empty());
        assert_eq!(cache.get("vendor", "page=1"), None);
    }

    #[test]
    fn expired_entries_are_dropped() {
        let cache = ListCache::new(Duration::from_millis(1));
        cache.put("vendor", "page=1", json!([1]));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("vendor", "page=1"), None);
        assert!(cache.is_empty());
    }
}
