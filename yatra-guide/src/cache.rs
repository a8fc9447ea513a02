//! TTL-bounded LRU cache for generated replies

use lru::LruCache;
use parking_lot::RwLock;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone)]
struct CacheEntry {
    reply: String,
    timestamp: u64,
    ttl: u64,
}

pub struct ReplyCache {
    cache: Arc<RwLock<LruCache<u64, CacheEntry>>>,
}

impl ReplyCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, 10_000);
        let capacity = NonZeroUsize::new(capacity).expect("capacity is at least 1");
        Self {
            cache: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let hash = hash_key(key);
        let mut cache = self.cache.write();
        if let Some(entry) = cache.get(&hash) {
            let now = now_secs();
            if entry.timestamp > now {
                // Clock went backwards; treat the entry as stale.
                cache.pop(&hash);
                return None;
            }
            if now.saturating_sub(entry.timestamp) < entry.ttl {
                return Some(entry.reply.clone());
            }
            cache.pop(&hash);
        }
        None
    }

    pub fn set(&self, key: &str, reply: String, ttl: u64) {
        if reply.len() > 1_000_000 {
            tracing::warn!("Reply too large to cache ({} bytes), skipping", reply.len());
            return;
        }
        let entry = CacheEntry {
            reply,
            timestamp: now_secs(),
            ttl: ttl.min(86400 * 7),
        };
        self.cache.write().put(hash_key(key), entry);
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

fn hash_key(key: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let cache = ReplyCache::new(10);
        cache.set("place:Agra:en", "The Taj Mahal awaits.".to_string(), 3600);
        assert_eq!(cache.get("place:Agra:en"), Some("The Taj Mahal awaits.".to_string()));
        assert_eq!(cache.get("place:Delhi:en"), None);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache = ReplyCache::new(10);
        cache.set("k", "v".to_string(), 0);
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_capacity_eviction() {
        let cache = ReplyCache::new(1);
        cache.set("a", "1".to_string(), 3600);
        cache.set("b", "2".to_string(), 3600);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some("2".to_string()));
    }

    #[test]
    fn test_clear() {
        let cache = ReplyCache::new(10);
        cache.set("a", "1".to_string(), 3600);
        cache.clear();
        assert_eq!(cache.get("a"), None);
    }
}
