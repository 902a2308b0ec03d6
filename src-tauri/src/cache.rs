//! Short-lived per-query cache.
//!
//! Collections fetched from the backend are kept for a few seconds so that
//! view switches don't refetch, and are explicitly invalidated after every
//! mutation that touches the resource. Nothing here is durable; the cache
//! is wiped on logout.

use std::{
    collections::HashMap,
    sync::RwLock,
    time::{Duration, Instant},
};

use serde::{de::DeserializeOwned, Serialize};

const DEFAULT_TTL: Duration = Duration::from_secs(30);

/// One key per cached collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Appointments,
    /// All coaches' open slots, already grouped.
    OpenSlots,
    /// The signed-in coach's own availability.
    MyAvailability,
    Coaches,
    Clients,
    Applications,
    Resumes,
}

struct Entry {
    value: serde_json::Value,
    stored_at: Instant,
}

pub struct QueryCache {
    ttl: Duration,
    entries: RwLock<HashMap<QueryKey, Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh cached value for `key`, if any. Expired entries read as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(&key)?;
        if entry.stored_at.elapsed() > self.ttl {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn put<T: Serialize>(&self, key: QueryKey, value: &T) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        let mut entries = self.entries.write().unwrap();
        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&self, key: QueryKey) {
        self.entries.write().unwrap().remove(&key);
    }

    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_on_empty_cache() {
        let cache = QueryCache::new();
        assert_eq!(cache.get::<Vec<i32>>(QueryKey::Appointments), None);
    }

    #[test]
    fn put_then_get_round_trip() {
        let cache = QueryCache::new();
        cache.put(QueryKey::Appointments, &vec![1, 2, 3]);
        assert_eq!(
            cache.get::<Vec<i32>>(QueryKey::Appointments),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn invalidate_forces_refetch() {
        let cache = QueryCache::new();
        cache.put(QueryKey::Appointments, &vec![1]);
        cache.invalidate(QueryKey::Appointments);
        assert_eq!(cache.get::<Vec<i32>>(QueryKey::Appointments), None);
    }

    #[test]
    fn invalidate_is_scoped_to_one_key() {
        let cache = QueryCache::new();
        cache.put(QueryKey::Appointments, &vec![1]);
        cache.put(QueryKey::OpenSlots, &vec![2]);
        cache.invalidate(QueryKey::Appointments);
        assert_eq!(cache.get::<Vec<i32>>(QueryKey::OpenSlots), Some(vec![2]));
    }

    #[test]
    fn expired_entry_reads_as_miss() {
        let cache = QueryCache::with_ttl(Duration::from_millis(0));
        cache.put(QueryKey::Coaches, &vec![1]);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get::<Vec<i32>>(QueryKey::Coaches), None);
    }

    #[test]
    fn clear_empties_every_key() {
        let cache = QueryCache::new();
        cache.put(QueryKey::Appointments, &vec![1]);
        cache.put(QueryKey::Clients, &vec![2]);
        cache.clear();
        assert_eq!(cache.get::<Vec<i32>>(QueryKey::Appointments), None);
        assert_eq!(cache.get::<Vec<i32>>(QueryKey::Clients), None);
    }
}
