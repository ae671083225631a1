// In-memory cache of raw sheet rows, keyed by range string.
// Entries expire after a fixed TTL and are lazily ignored, never evicted.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Default TTL for cached range reads: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub rows: Vec<Vec<String>>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        let age = Utc::now()
            .signed_duration_since(self.fetched_at)
            .to_std()
            .unwrap_or(Duration::MAX);
        age < ttl
    }
}

#[derive(Debug)]
pub struct RangeCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl RangeCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Rows for a range if a fresh entry exists. Stale entries stay in the
    /// map; they are simply not returned.
    pub fn get_fresh(&self, range: &str) -> Option<Vec<Vec<String>>> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(range)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.rows.clone())
    }

    pub fn put(&self, range: &str, rows: Vec<Vec<String>>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(range.to_string(), CacheEntry::new(rows));
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    #[cfg(test)]
    pub(crate) fn backdate(&self, range: &str, age: Duration) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(range) {
            entry.fetched_at = Utc::now()
                - chrono::Duration::from_std(age).expect("age fits in chrono::Duration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![vec!["key".to_string(), "value".to_string()]]
    }

    #[test]
    fn test_fresh_entry_is_served() {
        let cache = RangeCache::new(DEFAULT_TTL);
        cache.put("About!A:B", rows());
        assert_eq!(cache.get_fresh("About!A:B"), Some(rows()));
    }

    #[test]
    fn test_missing_entry_is_a_miss() {
        let cache = RangeCache::new(DEFAULT_TTL);
        assert_eq!(cache.get_fresh("About!A:B"), None);
    }

    #[test]
    fn test_entry_just_inside_ttl_is_fresh() {
        let ttl = Duration::from_secs(300);
        let cache = RangeCache::new(ttl);
        cache.put("Skills!A:B", rows());
        cache.backdate("Skills!A:B", ttl - Duration::from_secs(1));
        assert!(cache.get_fresh("Skills!A:B").is_some());
    }

    #[test]
    fn test_entry_past_ttl_is_stale() {
        let ttl = Duration::from_secs(300);
        let cache = RangeCache::new(ttl);
        cache.put("Skills!A:B", rows());
        cache.backdate("Skills!A:B", ttl + Duration::from_secs(1));
        assert!(cache.get_fresh("Skills!A:B").is_none());
    }

    #[test]
    fn test_put_refreshes_stale_entry() {
        let ttl = Duration::from_secs(300);
        let cache = RangeCache::new(ttl);
        cache.put("Contact!A:B", rows());
        cache.backdate("Contact!A:B", ttl + Duration::from_secs(1));

        let newer = vec![vec!["email".to_string(), "new@example.com".to_string()]];
        cache.put("Contact!A:B", newer.clone());
        assert_eq!(cache.get_fresh("Contact!A:B"), Some(newer));
    }

    #[test]
    fn test_clear_removes_entries() {
        let cache = RangeCache::new(DEFAULT_TTL);
        cache.put("About!A:B", rows());
        cache.clear();
        assert_eq!(cache.get_fresh("About!A:B"), None);
    }
}
