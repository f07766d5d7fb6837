//! Value and record model shared across fieldsort crates.
#![allow(missing_docs)]

#[cfg(feature = "chrono")]
pub use ::chrono;

pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod object;
pub mod record;
pub mod value;

pub use error::{AccessError, Result as AccessResult};
pub use object::Object;
pub use record::Record;
pub use value::{Value, ValueKind};
