//! [`Record`] support for `serde_json` documents.
//!
//! Objects are looked up by key, arrays by decimal index (`"tags.0"`).
//! Nested objects and arrays come back as [`Value::Record`].

use serde_json::Value as Json;

use crate::error::{AccessError, Result};
use crate::record::Record;
use crate::value::{Value, ValueKind};

impl Record for Json {
    fn get(&self, name: &str) -> Result<Value> {
        let field = match self {
            Json::Object(map) => map.get(name),
            Json::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
            other => return Err(AccessError::not_a_record(name, scalar_kind(other))),
        };

        field
            .map(to_value)
            .ok_or_else(|| AccessError::unknown_field(name))
    }

    fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }
}

fn to_value(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::UInt(u)
            } else {
                n.as_f64().map_or(Value::Null, Value::from)
            }
        }
        Json::String(s) => Value::from(s.as_str()),
        Json::Array(_) | Json::Object(_) => Value::record(json.clone()),
    }
}

fn scalar_kind(json: &Json) -> ValueKind {
    match json {
        Json::Null => ValueKind::Null,
        Json::Bool(_) => ValueKind::Bool,
        Json::Number(n) if n.is_f64() => ValueKind::Float,
        Json::Number(_) => ValueKind::Int,
        Json::String(_) => ValueKind::Str,
        Json::Array(_) | Json::Object(_) => ValueKind::Record,
    }
}
