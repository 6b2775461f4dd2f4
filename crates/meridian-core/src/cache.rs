//! Get-or-compute memoisation.

use std::hash::Hash;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// A concurrent memo table that computes each key at most once.
///
/// The shard holding a key stays locked while its value is computed, so two
/// threads asking for the same missing key never both run the computation.
/// A compute closure must not read back into the same cache.
///
/// Failed computations are not cached; the next call retries.
///
/// ```rust
/// use meridian_core::MemoCache;
///
/// let cache: MemoCache<u32, u64> = MemoCache::new();
/// let v = cache.get_or_insert_with(7, || 49);
/// assert_eq!(v, 49);
/// // second call returns the stored value without recomputing
/// assert_eq!(cache.get_or_insert_with(7, || unreachable!()), 49);
/// ```
#[derive(Debug)]
pub struct MemoCache<K, V>
where
    K: Eq + Hash,
{
    entries: DashMap<K, V>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the cached value or computes, stores and returns it.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let value = compute();
                entry.insert(value.clone());
                value
            }
        }
    }

    /// Fallible variant of [`get_or_insert_with`](Self::get_or_insert_with).
    pub fn get_or_try_insert_with<F, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let value = compute()?;
                entry.insert(value.clone());
                Ok(value)
            }
        }
    }

    /// Returns a clone of the cached value, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    /// True if the key has been computed.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
