//! Session-scoped, request-deduplicating query cache
//!
//! A key is requested at most once per session: the first `begin` for a key
//! records it as pending and tells the caller to issue the request; every
//! later `begin` for the same key is a cache hit, whether the request is
//! still in flight, resolved, or failed.

use std::collections::HashMap;

/// Query key of the cat-of-the-day image search
pub const CAT_OF_THE_DAY_KEY: &str = "catOfTheDay";

/// Status of one cached query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Pending,
    Ready(String),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<&'static str, QueryStatus>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the caller must issue the request for `key`
    pub fn begin(&mut self, key: &'static str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key, QueryStatus::Pending);
        true
    }

    /// Record the outcome of the request for `key`.
    ///
    /// A resolved value is immutable: later resolutions are ignored.
    pub fn resolve(&mut self, key: &'static str, value: Option<String>) {
        let status = match value {
            Some(v) => QueryStatus::Ready(v),
            None => QueryStatus::Failed,
        };
        match self.entries.get(key) {
            Some(QueryStatus::Ready(_)) => {}
            _ => {
                self.entries.insert(key, status);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryStatus> {
        self.entries.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_begin_issues_request() {
        let mut cache = QueryCache::new();
        assert!(cache.begin(CAT_OF_THE_DAY_KEY));
        assert_eq!(cache.get(CAT_OF_THE_DAY_KEY), Some(&QueryStatus::Pending));
    }

    #[test]
    fn test_pending_key_is_deduplicated() {
        let mut cache = QueryCache::new();
        assert!(cache.begin(CAT_OF_THE_DAY_KEY));
        assert!(!cache.begin(CAT_OF_THE_DAY_KEY));
    }

    #[test]
    fn test_resolved_key_is_cached() {
        let mut cache = QueryCache::new();
        cache.begin(CAT_OF_THE_DAY_KEY);
        cache.resolve(CAT_OF_THE_DAY_KEY, Some("https://x.test/cat.jpg".into()));
        assert!(!cache.begin(CAT_OF_THE_DAY_KEY));
        assert_eq!(
            cache.get(CAT_OF_THE_DAY_KEY),
            Some(&QueryStatus::Ready("https://x.test/cat.jpg".into()))
        );
    }

    #[test]
    fn test_failed_key_is_not_retried() {
        let mut cache = QueryCache::new();
        cache.begin(CAT_OF_THE_DAY_KEY);
        cache.resolve(CAT_OF_THE_DAY_KEY, None);
        assert_eq!(cache.get(CAT_OF_THE_DAY_KEY), Some(&QueryStatus::Failed));
        assert!(!cache.begin(CAT_OF_THE_DAY_KEY));
    }

    #[test]
    fn test_ready_value_is_immutable() {
        let mut cache = QueryCache::new();
        cache.begin(CAT_OF_THE_DAY_KEY);
        cache.resolve(CAT_OF_THE_DAY_KEY, Some("first".into()));
        cache.resolve(CAT_OF_THE_DAY_KEY, Some("second".into()));
        cache.resolve(CAT_OF_THE_DAY_KEY, None);
        assert_eq!(
            cache.get(CAT_OF_THE_DAY_KEY),
            Some(&QueryStatus::Ready("first".into()))
        );
    }
}
