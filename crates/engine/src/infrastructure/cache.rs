//! Idle-expiring cache for per-session state.
//!
//! Entries expire after going unused for the configured idle period. Every
//! read or write through the cache counts as a use, so an active session
//! never expires.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// A thread-safe cache with sliding (idle) expiration.
///
/// Expired entries are invisible to readers but are not removed until
/// `cleanup_expired()` is called.
pub struct SessionCache<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    idle: Duration,
}

struct CacheEntry<V> {
    value: V,
    last_access: Instant,
}

impl<V> CacheEntry<V> {
    fn is_live(&self, idle: Duration) -> bool {
        self.last_access.elapsed() < idle
    }
}

impl<K, V> SessionCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Create a new cache with the specified idle timeout.
    pub fn new(idle: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            idle,
        }
    }

    /// Get a live value and mark it as used.
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut guard = self.entries.write().await;
        let entry = guard.get_mut(key).filter(|e| e.is_live(self.idle))?;
        entry.last_access = Instant::now();
        Some(entry.value.clone())
    }

    /// Insert a value with an explicit last-access time (tests only).
    #[cfg(test)]
    pub async fn insert_at(&self, key: K, value: V, last_access: Instant) {
        let entry = CacheEntry { value, last_access };
        self.entries.write().await.insert(key, entry);
    }

    /// Replace the value under `key` with `f(current)` and return the new
    /// value. A missing or expired entry starts from `init()`.
    ///
    /// The read-modify-write happens under one write lock, so concurrent
    /// updates to the same session never lose each other's changes.
    pub async fn update<I, F>(&self, key: K, init: I, f: F) -> V
    where
        I: FnOnce() -> V,
        F: FnOnce(V) -> V,
    {
        let mut guard = self.entries.write().await;
        let current = match guard.remove(&key) {
            Some(entry) if entry.is_live(self.idle) => entry.value,
            _ => init(),
        };
        let next = f(current);
        guard.insert(
            key,
            CacheEntry {
                value: next.clone(),
                last_access: Instant::now(),
            },
        );
        next
    }

    /// Like [`update`](Self::update) for fallible changes. On error the
    /// stored value is left as it was.
    pub async fn try_update<I, F, E>(&self, key: K, init: I, f: F) -> Result<V, E>
    where
        I: FnOnce() -> V,
        F: FnOnce(V) -> Result<V, E>,
    {
        let mut guard = self.entries.write().await;
        let current = match guard.get(&key) {
            Some(entry) if entry.is_live(self.idle) => entry.value.clone(),
            _ => init(),
        };
        let next = f(current)?;
        guard.insert(
            key,
            CacheEntry {
                value: next.clone(),
                last_access: Instant::now(),
            },
        );
        Ok(next)
    }

    /// Remove all expired entries and return the count of removed entries.
    pub async fn cleanup_expired(&self) -> usize {
        let mut guard = self.entries.write().await;
        let before_count = guard.len();
        guard.retain(|_, entry| entry.is_live(self.idle));
        before_count - guard.len()
    }

    /// Get the current number of entries (including expired ones not yet cleaned).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
