//! # fieldsort
//!
//! Sort collections of records by one or more named fields.
//!
//! Fields are given the way a caller would write them by hand: a plain name
//! (`"name"`), a dotted path into nested records (`"group.weight"`), or an
//! explicit list of segments (`["ex_type", "group", "weight"]`). Any field
//! may end in a direction token (`"weight desc"`). Later fields only break
//! ties left by earlier ones.
//!
//! ```
//! use fieldsort_core::{fields, sort_by_field, Object, Record, SortOptions, Value};
//!
//! let items = vec![
//!     Object::new().with("tie", 1).with("name", "b"),
//!     Object::new().with("tie", 0).with("name", "c"),
//!     Object::new().with("tie", 1).with("name", "a"),
//! ];
//!
//! let sorted = sort_by_field(items, fields!["tie desc", "name"], SortOptions::default())?;
//! let names: Vec<Value> = sorted.iter().map(|o| o.get("name")).collect::<Result<_, _>>()?;
//! assert_eq!(names, [Value::from("a"), Value::from("b"), Value::from("c")]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every lookup made during one sort call is cached per element and path
//! segment, so an accessor runs at most once per (element, segment) no matter
//! how many comparisons touch it.
//!
//! ## Feature Flags
//!
//! - `json`: `serde_json::Value` documents as records
//! - `chrono`: `DateTime<Utc>` timestamp values

#![allow(missing_docs)]

pub mod error;
pub mod sorting;

pub use error::{Result, SortError};
pub use fieldsort_model::{
    self as model, AccessError, Object, Record, Value, ValueKind, impl_record,
};
pub use sorting::{
    CacheStats, Direction, FieldArg, FieldComparator, FieldSort, FieldSpec, SortOptions,
    SortProfile, SortProfiles, sort_by_field,
};

/// Build a `Vec<FieldArg>` from a mix of names, dotted paths and segment
/// arrays.
///
/// ```
/// use fieldsort_core::{fields, FieldArg};
///
/// let list = fields!["sticky desc", ["group", "weight"], "name"];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1], FieldArg::Path(vec!["group".into(), "weight".into()]));
/// ```
#[macro_export]
macro_rules! fields {
    ($($field:expr),* $(,)?) => {
        ::std::vec![$($crate::FieldArg::from($field)),*]
    };
}
