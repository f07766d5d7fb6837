//! The accessor capability sortable elements expose.

use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

/// Anything whose fields can be looked up by name.
///
/// This is the only thing the sorting engine knows about an element: it asks
/// for one field at a time and receives a [`Value`]. Nested records are
/// returned as [`Value::Record`] so that path traversal can continue into
/// them.
pub trait Record: Send + Sync {
    /// Read the field called `name`.
    ///
    /// Unknown names should fail with [`AccessError::UnknownField`] rather
    /// than returning [`Value::Null`]; a missing attribute is a mismatch
    /// between the requested sort and the data, not an absent value.
    ///
    /// [`AccessError::UnknownField`]: crate::AccessError::UnknownField
    fn get(&self, name: &str) -> Result<Value>;

    /// Whether this record stands for "no element at all".
    ///
    /// Null records resolve every path to [`Value::Null`] without their
    /// accessor being consulted.
    fn is_null(&self) -> bool {
        false
    }
}

impl<R: Record> Record for Option<R> {
    fn get(&self, name: &str) -> Result<Value> {
        match self {
            Some(record) => record.get(name),
            None => Ok(Value::Null),
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Some(record) => record.is_null(),
            None => true,
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn get(&self, name: &str) -> Result<Value> {
        (**self).get(name)
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn get(&self, name: &str) -> Result<Value> {
        (**self).get(name)
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn get(&self, name: &str) -> Result<Value> {
        (**self).get(name)
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Implement [`Record`] for a struct by listing its fields.
///
/// Plain fields are converted with `Value::from(self.field.clone())`, so their
/// types must implement `Into<Value>`. Fields listed after `nested` hold
/// records themselves and are wrapped with [`Value::record`].
///
/// ```
/// use fieldsort_model::{impl_record, Record, Value};
///
/// #[derive(Clone)]
/// struct Group {
///     weight: u32,
/// }
///
/// struct Param {
///     name: String,
///     group: Group,
/// }
///
/// impl_record!(Group { weight });
/// impl_record!(Param { name } nested { group });
///
/// let param = Param { name: "width".into(), group: Group { weight: 5 } };
/// assert_eq!(param.get("name").unwrap(), Value::from("width"));
/// assert!(param.get("group").unwrap().as_record().is_some());
/// assert!(param.get("missing").is_err());
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? } $(nested { $($nested:ident),* $(,)? })?) => {
        impl $crate::Record for $ty {
            fn get(
                &self,
                name: &str,
            ) -> ::std::result::Result<$crate::Value, $crate::AccessError> {
                match name {
                    $(stringify!($field) => {
                        ::std::result::Result::Ok($crate::Value::from(self.$field.clone()))
                    })*
                    $($(stringify!($nested) => {
                        ::std::result::Result::Ok($crate::Value::record(self.$nested.clone()))
                    })*)?
                    other => ::std::result::Result::Err($crate::AccessError::unknown_field(other)),
                }
            }
        }
    };
}
