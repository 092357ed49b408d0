//! LRU cache for text deduplication.
//!
//! `FrequencyCache` is a fixed-capacity map from normalized text to an
//! observation count with least-recently-used eviction. Unlike a plain
//! presence cache it answers "how many times", which is what separates a
//! one-off repeated pull-quote from chronic boilerplate.
//!
//! The structure is self-contained: a `HashMap` from key to slot index plus
//! a slab-backed doubly-linked recency list, giving O(1) get, put and
//! eviction. Reads are also touches - a `get` hit marks the key
//! most-recently-used.
//!
//! Not internally synchronized. A `get` followed by a conditional `put` is a
//! read-modify-write sequence, so concurrent callers must either use one
//! cache per document or serialize access around the whole pair.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Sentinel slot index for list ends.
const NIL: usize = usize::MAX;

struct Slot {
    key: String,
    count: usize,
    prev: usize,
    next: usize,
}

/// Bounded map from text key to observation count with LRU eviction.
///
/// # Example
///
/// ```rust
/// use rs_dedup::FrequencyCache;
///
/// let mut cache = FrequencyCache::with_capacity(2)?;
/// cache.put("first", 1);
/// cache.put("second", 1);
/// cache.put("third", 1); // evicts "first"
///
/// assert_eq!(cache.get("first"), None);
/// assert_eq!(cache.get("second"), Some(1));
/// # Ok::<(), rs_dedup::Error>(())
/// ```
pub struct FrequencyCache {
    capacity: usize,
    map: HashMap<String, usize>,
    slots: Vec<Slot>,
    head: usize,
    tail: usize,
}

impl FrequencyCache {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCacheCapacity` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCacheCapacity);
        }

        Ok(Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        })
    }

    /// Returns the stored count for `key`, marking it most-recently-used.
    ///
    /// A miss returns `None` and leaves the recency order untouched.
    pub fn get(&mut self, key: &str) -> Option<usize> {
        let idx = *self.map.get(key)?;
        self.detach(idx);
        self.push_front(idx);
        Some(self.slots[idx].count)
    }

    /// Inserts or updates `key` with `count`, marking it most-recently-used.
    ///
    /// Inserting a new key at capacity evicts the least-recently-used entry
    /// first, so the size never exceeds the configured capacity.
    pub fn put(&mut self, key: &str, count: usize) {
        if let Some(&idx) = self.map.get(key) {
            self.slots[idx].count = count;
            self.detach(idx);
            self.push_front(idx);
            return;
        }

        let idx = if self.map.len() == self.capacity {
            // Reuse the evicted entry's slot for the new key.
            let idx = self.tail;
            self.detach(idx);
            let old_key = std::mem::replace(&mut self.slots[idx].key, key.to_string());
            self.map.remove(&old_key);
            self.slots[idx].count = count;
            idx
        } else {
            self.slots.push(Slot {
                key: key.to_string(),
                count,
                prev: NIL,
                next: NIL,
            });
            self.slots.len() - 1
        };

        self.push_front(idx);
        self.map.insert(key.to_string(), idx);
    }

    /// Returns true if `key` is present, without touching recency.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The fixed capacity this cache was built with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Unlinks a slot from the recency list.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);

        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
    }

    /// Links a detached slot in at the most-recently-used end.
    fn push_front(&mut self, idx: usize) {
        self.slots[idx].prev = NIL;
        self.slots[idx].next = self.head;

        if self.head != NIL {
            self.slots[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == NIL {
            self.tail = idx;
        }
    }
}

impl std::fmt::Debug for FrequencyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}
