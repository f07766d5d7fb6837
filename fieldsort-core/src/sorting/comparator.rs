//! The per-sort comparator
//!
//! A [`FieldComparator`] owns the [`ValueCache`] for exactly one sort call.
//! Elements are passed together with their position in the input so that
//! cached lookups can be keyed by that position.

use std::cmp::Ordering;

use fieldsort_model::Record;

use super::cache::{CacheStats, ObjectId, ValueCache};
use super::keys::compare_resolved;
use super::options::SortOptions;
use super::resolver::resolve;
use super::fields::FieldSpec;
use crate::error::Result;

/// Compares elements field by field, memoizing every lookup
#[derive(Debug)]
pub struct FieldComparator<'a> {
    fields: &'a [FieldSpec],
    options: SortOptions,
    cache: ValueCache,
    comparisons: u64,
}

impl<'a> FieldComparator<'a> {
    pub fn new(fields: &'a [FieldSpec], options: SortOptions) -> Self {
        Self {
            fields,
            options,
            cache: ValueCache::new(),
            comparisons: 0,
        }
    }

    /// Compare two `(position, element)` pairs.
    ///
    /// Positions must identify elements uniquely for the lifetime of this
    /// comparator; two different elements sharing a position would share
    /// cached values.
    pub fn compare<T>(&mut self, a: (usize, &T), b: (usize, &T)) -> Result<Ordering>
    where
        T: Record + ?Sized,
    {
        self.comparisons += 1;
        let fields = self.fields;
        self.compare_fields(fields, a, b)
    }

    /// Fields are consulted lazily: the tail is only reached on a tie.
    fn compare_fields<T>(
        &mut self,
        fields: &'a [FieldSpec],
        a: (usize, &T),
        b: (usize, &T),
    ) -> Result<Ordering>
    where
        T: Record + ?Sized,
    {
        let Some((field, rest)) = fields.split_first() else {
            return Ok(Ordering::Equal);
        };

        let left = resolve(ObjectId::element(a.0), a.1, field.path(), &mut self.cache)?;
        let right = resolve(ObjectId::element(b.0), b.1, field.path(), &mut self.cache)?;
        let ordering = field
            .direction()
            .apply(compare_resolved(&left, &right, self.options, field.path())?);

        if ordering == Ordering::Equal && !rest.is_empty() {
            self.compare_fields(rest, a, b)
        } else {
            Ok(ordering)
        }
    }

    pub fn fields(&self) -> &'a [FieldSpec] {
        self.fields
    }

    pub fn options(&self) -> SortOptions {
        self.options
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of calls to [`FieldComparator::compare`] so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }
}
