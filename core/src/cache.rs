//! Append-only read-through cache for immutable API resources.

use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;

/// Map from key to a shared, never-mutated value.
///
/// The first value stored for a key wins and is never replaced. Failed fetches are not
/// stored, so the next lookup tries again.
#[derive(Debug)]
pub struct ReadThroughCache<K, V> {
    name: &'static str,
    entries: RwLock<HashMap<K, Arc<V>>>,
}

impl<K, V> ReadThroughCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store `value` unless the key is already present. Returns the cached value.
    pub fn insert(&self, key: K, value: V) -> Arc<V> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.get(&key) {
            return Arc::clone(existing);
        }
        tracing::debug!(cache = self.name, key = ?key, "cache fill");
        let value = Arc::new(value);
        entries.insert(key, Arc::clone(&value));
        value
    }

    /// Return the cached value, or run `fetch` and cache its success.
    ///
    /// No lock is held while `fetch` runs. When two fetches for one key race, the first
    /// to finish is kept and both callers get it.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let value = fetch().await?;
        Ok(self.insert(key, value))
    }
}
