//! Reusable multi-field sort definitions

use std::cmp::Ordering;
use std::fmt;

use fieldsort_model::Record;
use tracing::{debug, warn};

use super::comparator::FieldComparator;
use super::options::SortOptions;
use super::fields::{FieldArg, FieldSpec};
use super::utils::{reorder_by_indices, try_is_sorted_by, try_sort_by};
use crate::error::{Result, SortError};

/// An ordered list of fields plus the policies to compare them with
///
/// Building a `FieldSort` normalizes every descriptor up front, so malformed
/// fields fail before any element is touched. The definition is immutable
/// and can be reused across any number of sort calls; each call gets a fresh
/// [`FieldComparator`] and therefore a fresh value cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSort {
    fields: Vec<FieldSpec>,
    options: SortOptions,
}

impl FieldSort {
    /// Normalize `fields` with default options.
    pub fn new<I, F>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldArg>,
    {
        let fields = fields
            .into_iter()
            .map(FieldSpec::parse)
            .collect::<Result<Vec<_>>>()?;
        Self::from_specs(fields)
    }

    /// Use already normalized fields.
    pub fn from_specs(fields: Vec<FieldSpec>) -> Result<Self> {
        if fields.is_empty() {
            return Err(SortError::InvalidField(
                "at least one field is required".to_string(),
            ));
        }

        let sort = Self {
            fields,
            options: SortOptions::default(),
        };
        debug!("Built sort over {} field(s): {}", sort.fields.len(), sort);
        Ok(sort)
    }

    pub fn with_options(mut self, options: SortOptions) -> Self {
        self.options = options;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = case_sensitive;
        self
    }

    pub fn nil_last(mut self, nil_last: bool) -> Self {
        self.options.nil_last = nil_last;
        self
    }

    /// Append a tie-breaking field.
    pub fn then_by(mut self, field: impl Into<FieldArg>) -> Result<Self> {
        self.fields.push(FieldSpec::parse(field)?);
        Ok(self)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn options(&self) -> SortOptions {
        self.options
    }

    /// A fresh comparator with an empty cache.
    pub fn comparator(&self) -> FieldComparator<'_> {
        FieldComparator::new(&self.fields, self.options)
    }

    /// Positions of `items` in sorted order.
    pub fn sorted_indices<T: Record>(&self, items: &[T]) -> Result<Vec<usize>> {
        let mut comparator = self.comparator();
        let mut indices: Vec<usize> = (0..items.len()).collect();

        let result = try_sort_by(&mut indices, |&a, &b| {
            comparator.compare((a, &items[a]), (b, &items[b]))
        });

        if let Err(err) = result {
            warn!("Sort by {} aborted: {}", self, err);
            return Err(err);
        }

        let stats = comparator.cache_stats();
        debug!(
            "Sorted {} items by {}: {} comparisons, {} cache hits, {} misses",
            items.len(),
            self,
            comparator.comparisons(),
            stats.hits,
            stats.misses
        );
        Ok(indices)
    }

    /// Sort `items`, returning them in a new order.
    pub fn sort<T: Record>(&self, items: Vec<T>) -> Result<Vec<T>> {
        let indices = self.sorted_indices(&items)?;
        Ok(reorder_by_indices(items, &indices))
    }

    /// Sorted references into `items`; the input is left untouched.
    pub fn sort_refs<'t, T: Record>(&self, items: &'t [T]) -> Result<Vec<&'t T>> {
        let indices = self.sorted_indices(items)?;
        Ok(indices.into_iter().map(|i| &items[i]).collect())
    }

    /// Whether `items` is already in this order.
    pub fn is_sorted<T: Record>(&self, items: &[T]) -> Result<bool> {
        let mut comparator = self.comparator();
        let positions: Vec<usize> = (0..items.len()).collect();
        try_is_sorted_by(&positions, |&a, &b| {
            comparator.compare((a, &items[a]), (b, &items[b]))
        })
    }

    /// Compare two standalone elements with a throwaway cache.
    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Result<Ordering> {
        self.comparator().compare((0, a), (1, b))
    }
}

impl fmt::Display for FieldSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Sort `items` by `fields` in one call.
///
/// ```
/// use fieldsort_core::{fields, sort_by_field, Object, Record, SortOptions};
///
/// let items = vec![
///     Object::new().with("name", "B"),
///     Object::new().with("name", "a"),
/// ];
/// let sorted = sort_by_field(items, fields!["name"], SortOptions::default())?;
/// assert_eq!(sorted[0].get("name")?.as_str(), Some("a"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn sort_by_field<T, I, F>(items: Vec<T>, fields: I, options: SortOptions) -> Result<Vec<T>>
where
    T: Record,
    I: IntoIterator<Item = F>,
    F: Into<FieldArg>,
{
    FieldSort::new(fields)?.with_options(options).sort(items)
}
