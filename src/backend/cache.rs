use std::{
    collections::HashMap,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

#[derive(Clone)]
struct CacheEntry {
    created_at: Instant,
    expires_at: Instant,
    text: String,
}

/// In-memory explanation cache keyed by the normalized publication.
pub struct ExplainCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl ExplainCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            let entry = entries.get(key)?;

            if entry.expires_at > now {
                return Some(entry.text.clone());
            }
        }

        let mut entries = self.entries.write().await;
        purge_expired_entries(&mut entries, now);
        None
    }

    pub async fn insert(&self, key: String, text: String) {
        self.insert_at(key, text, Instant::now()).await;
    }

    async fn insert_at(&self, key: String, text: String, now: Instant) {
        let mut entries = self.entries.write().await;

        purge_expired_entries(&mut entries, now);

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            evict_oldest_entry(&mut entries);
        }

        entries.insert(
            key,
            CacheEntry {
                created_at: now,
                expires_at: now + self.ttl,
                text,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

fn purge_expired_entries(entries: &mut HashMap<String, CacheEntry>, now: Instant) {
    entries.retain(|_, entry| entry.expires_at > now);
}

fn evict_oldest_entry(entries: &mut HashMap<String, CacheEntry>) {
    let Some(key_to_remove) = entries
        .iter()
        .min_by_key(|(_, entry)| entry.created_at)
        .map(|(key, _)| key.clone())
    else {
        return;
    };

    entries.remove(&key_to_remove);
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: usize = 16;

    async fn filled_cache() -> (ExplainCache, Instant) {
        let cache = ExplainCache::new(Duration::from_secs(10_000), CAPACITY);
        let start = Instant::now();
        for index in 0..CAPACITY {
            cache
                .insert_at(
                    format!("key-{index}"),
                    format!("text-{index}"),
                    start + Duration::from_secs(index as u64),
                )
                .await;
        }
        (cache, start)
    }

    #[tokio::test]
    async fn overwrite_at_capacity_does_not_evict_oldest() {
        let (cache, start) = filled_cache().await;

        cache
            .insert_at(
                "key-10".to_string(),
                "updated".to_string(),
                start + Duration::from_secs(100),
            )
            .await;

        assert_eq!(cache.len().await, CAPACITY);
        assert_eq!(cache.get("key-0").await.as_deref(), Some("text-0"));
        assert_eq!(cache.get("key-10").await.as_deref(), Some("updated"));
    }

    #[tokio::test]
    async fn new_key_at_capacity_evicts_oldest() {
        let (cache, start) = filled_cache().await;

        cache
            .insert_at(
                "fresh".to_string(),
                "fresh text".to_string(),
                start + Duration::from_secs(100),
            )
            .await;

        assert_eq!(cache.len().await, CAPACITY);
        assert_eq!(cache.get("key-0").await, None);
        assert_eq!(cache.get("key-1").await.as_deref(), Some("text-1"));
        assert_eq!(cache.get("fresh").await.as_deref(), Some("fresh text"));
    }

    #[tokio::test]
    async fn expired_entries_are_not_returned() {
        let cache = ExplainCache::new(Duration::from_secs(5), CAPACITY);
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(60))
            .unwrap_or_else(Instant::now);
        cache
            .insert_at("stale".to_string(), "old".to_string(), long_ago)
            .await;

        assert_eq!(cache.get("stale").await, None);
        assert_eq!(cache.len().await, 0);
    }
}
