use std::collections::BTreeMap;

use crate::error::{AccessError, Result};
use crate::record::Record;
use crate::value::Value;

/// A record backed by a name -> value map.
///
/// Useful for ad hoc data and tests where declaring a struct per shape is not
/// worth it.
#[derive(Debug, Clone, Default)]
pub struct Object {
    fields: BTreeMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style insert of a nested record.
    pub fn with_record<R: Record + 'static>(mut self, name: impl Into<String>, record: R) -> Self {
        self.fields.insert(name.into(), Value::record(record));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for Object {
    fn get(&self, name: &str) -> Result<Value> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| AccessError::unknown_field(name))
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
