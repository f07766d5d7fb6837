//! Record fixtures for integration tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use fieldsort_core::{AccessError, Object, Record, Value};

/// Per (label, field) read counts, shared by every [`Counted`] record of a
/// fixture.
#[derive(Debug, Clone, Default)]
pub struct ReadLog(Arc<Mutex<BTreeMap<(String, String), usize>>>);

impl ReadLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, label: &str, field: &str) {
        let mut reads = self.0.lock().unwrap();
        *reads.entry((label.to_owned(), field.to_owned())).or_default() += 1;
    }

    pub fn reads(&self, label: &str, field: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .get(&(label.to_owned(), field.to_owned()))
            .copied()
            .unwrap_or(0)
    }

    /// Largest read count of any single (label, field) pair.
    pub fn max_reads(&self) -> usize {
        self.0.lock().unwrap().values().copied().max().unwrap_or(0)
    }

    pub fn total_reads(&self) -> usize {
        self.0.lock().unwrap().values().sum()
    }
}

/// A record that logs every field read.
#[derive(Debug, Clone)]
pub struct Counted {
    label: String,
    fields: BTreeMap<String, Value>,
    log: ReadLog,
}

impl Counted {
    pub fn new(label: &str, log: &ReadLog) -> Self {
        Self {
            label: label.to_owned(),
            fields: BTreeMap::new(),
            log: log.clone(),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_owned(), value.into());
        self
    }

    pub fn with_record(mut self, name: &str, record: impl Record + 'static) -> Self {
        self.fields.insert(name.to_owned(), Value::record(record));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Record for Counted {
    fn get(&self, name: &str) -> Result<Value, AccessError> {
        self.log.record(&self.label, name);
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| AccessError::unknown_field(name))
    }
}

pub fn labels(items: &[Counted]) -> Vec<&str> {
    items.iter().map(Counted::label).collect()
}

/// The `ex_type` fixture: four parameters with sticky flags, weights and
/// group weights, tagged `e1`..`e4`.
pub fn ex_type_fixture() -> Vec<Object> {
    let ex_type = |sticky: &str, name: &str, weight: i64, group_weight: i64| {
        Object::new()
            .with("sticky", sticky)
            .with("name", name)
            .with("weight", weight)
            .with_record("group", Object::new().with("weight", group_weight))
    };

    let e1 = Object::new()
        .with("tag", "e1")
        .with_record("ex_type", ex_type("true", ".fileType", 0, 50));
    let e2 = Object::new()
        .with("tag", "e2")
        .with_record("ex_type", ex_type("false", ".thumbMaxWidth", 0, 50));
    let e3 = Object::new()
        .with("tag", "e3")
        .with_record("ex_type", ex_type("true", "Param Name", 5, 45));
    let e4 = Object::new()
        .with("tag", "e4")
        .with_record("ex_type", ex_type("false", "Onclick", 10, 40));

    vec![e4, e2, e3, e1]
}

/// Values of `tag` in order.
pub fn tags<R: Record>(items: &[R]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item.get("tag") {
            Ok(value) => value.as_str().unwrap_or("-").to_owned(),
            Err(_) => "-".to_owned(),
        })
        .collect()
}
