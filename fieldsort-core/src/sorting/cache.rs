//! Per-sort memoization of field lookups
//!
//! Each (object, segment) pair is looked up at most once for the lifetime of
//! a [`ValueCache`]. Objects are identified without hashing their contents:
//! top-level elements by their position in the input, nested records by the
//! address of their shared allocation.

use std::collections::HashMap;
use std::sync::Arc;

use fieldsort_model::{Record, Value};

/// Identity of an object whose fields are cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {
    /// A top-level element, by its position in the sequence being sorted.
    Element(usize),
    /// A nested record, by the address of its `Arc` allocation.
    Shared(usize),
}

impl ObjectId {
    pub fn element(position: usize) -> Self {
        ObjectId::Element(position)
    }

    /// Address identity of a shared record.
    ///
    /// Only stable while the `Arc` is alive; the cache keeps every nested
    /// record it has handed out, so addresses cannot be reused mid-sort.
    pub fn shared(record: &Arc<dyn Record>) -> Self {
        ObjectId::Shared(Arc::as_ptr(record) as *const () as usize)
    }
}

/// Lookup counters for one cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn hit_rate(&self) -> f32 {
        if self.lookups() == 0 {
            0.0
        } else {
            self.hits as f32 / self.lookups() as f32
        }
    }
}

/// Memoized `(object, segment) -> value` table
#[derive(Debug, Default)]
pub struct ValueCache {
    entries: HashMap<ObjectId, HashMap<String, Value>>,
    stats: CacheStats,
}

impl ValueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `segment` of `id`, computing it with `f`
    /// on first use.
    ///
    /// Failures are not cached; the error is returned to the caller and the
    /// slot stays empty.
    pub fn get_or_try_insert_with<E, F>(
        &mut self,
        id: ObjectId,
        segment: &str,
        f: F,
    ) -> Result<Value, E>
    where
        F: FnOnce() -> Result<Value, E>,
    {
        let fields = self.entries.entry(id).or_default();
        if let Some(value) = fields.get(segment) {
            self.stats.hits += 1;
            return Ok(value.clone());
        }

        self.stats.misses += 1;
        let value = f()?;
        fields.insert(segment.to_owned(), value.clone());
        Ok(value)
    }

    /// Number of cached (object, segment) pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
