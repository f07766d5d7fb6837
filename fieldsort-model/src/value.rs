//! Dynamic values produced by record accessors.
//!
//! A [`Value`] is what a single field lookup returns. Scalars carry their
//! natural ordering; [`Value::Record`] carries a nested record that further
//! path segments can be resolved against.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use ordered_float::OrderedFloat;

use crate::record::Record;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// A value read from a record field.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(OrderedFloat<f64>),
    Str(Arc<str>),
    #[cfg(feature = "chrono")]
    Timestamp(DateTime<Utc>),
    Record(Arc<dyn Record>),
}

/// Discriminant of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Str,
    #[cfg(feature = "chrono")]
    Timestamp,
    Record,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            #[cfg(feature = "chrono")]
            ValueKind::Timestamp => "timestamp",
            ValueKind::Record => "record",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Wrap a nested record. Records that report themselves null collapse
    /// to [`Value::Null`].
    pub fn record<R: Record + 'static>(record: R) -> Self {
        if record.is_null() {
            Value::Null
        } else {
            Value::Record(Arc::new(record))
        }
    }

    /// Wrap an already shared record without reallocating it.
    pub fn shared(record: Arc<dyn Record>) -> Self {
        if record.is_null() {
            Value::Null
        } else {
            Value::Record(record)
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            #[cfg(feature = "chrono")]
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Record(_) => ValueKind::Record,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Arc<dyn Record>> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Natural ordering between two non-null values.
    ///
    /// Integers and floats compare numerically across kinds. Returns `None`
    /// for kinds with no mutual order, records, and nulls.
    pub fn natural_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            #[cfg(feature = "chrono")]
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::UInt(a), Value::UInt(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::UInt(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
            (Value::UInt(a), Value::Int(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
            (Value::Float(a), Value::Float(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Int(b)) => Some(cmp_float_int(*a, i128::from(*b))),
            (Value::Float(a), Value::UInt(b)) => Some(cmp_float_int(*a, i128::from(*b))),
            (Value::Int(a), Value::Float(b)) => {
                Some(cmp_float_int(*b, i128::from(*a)).reverse())
            }
            (Value::UInt(a), Value::Float(b)) => {
                Some(cmp_float_int(*b, i128::from(*a)).reverse())
            }
            _ => None,
        }
    }
}

/// 2^64, the first float above every `u64`.
const U64_END: f64 = 18_446_744_073_709_551_616.0;
/// -2^63, the smallest `i64`.
const I64_START: f64 = -9_223_372_036_854_775_808.0;

/// Exact comparison of a float with an integer from the `i64`/`u64` range.
///
/// NaN sorts after every integer, matching `OrderedFloat`.
fn cmp_float_int(float: OrderedFloat<f64>, int: i128) -> Ordering {
    let f = float.0;
    if f.is_nan() || f >= U64_END {
        return Ordering::Greater;
    }
    if f < I64_START {
        return Ordering::Less;
    }

    // In range, so the truncated value is an exact integer
    let whole = f.trunc() as i128;
    whole.cmp(&int).then_with(|| {
        let fract = f.fract();
        if fract > 0.0 {
            Ordering::Greater
        } else if fract < 0.0 {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(&x.0).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            #[cfg(feature = "chrono")]
            Value::Timestamp(t) => f.debug_tuple("Timestamp").field(t).finish(),
            Value::Record(r) => {
                write!(f, "Record({:p})", Arc::as_ptr(r) as *const ())
            }
        }
    }
}

/// Scalars compare by value, records by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => self.natural_cmp(other) == Some(Ordering::Equal),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::UInt(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(OrderedFloat(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(OrderedFloat(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Arc::from(value))
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Value::Str(value)
    }
}

#[cfg(feature = "chrono")]
impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
