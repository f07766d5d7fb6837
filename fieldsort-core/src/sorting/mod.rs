//! Multi-field sorting of records
//!
//! This module provides:
//! - Field descriptor normalization (dotted paths, direction suffixes)
//! - Memoized value resolution along nested paths
//! - A comparator with null placement and case policies
//! - A fallible stable sort to drive it
//! - Named sort profiles loaded from TOML

pub mod cache;
pub mod comparator;
pub mod field_sort;
pub mod fields;
pub mod keys;
pub mod options;
pub mod profile;
pub mod resolver;
pub mod utils;


pub use cache::{CacheStats, ObjectId, ValueCache};
pub use comparator::FieldComparator;
pub use field_sort::{FieldSort, sort_by_field};
pub use fields::{Direction, FieldArg, FieldPath, FieldSpec, normalize};
pub use options::SortOptions;
pub use profile::{SortProfile, SortProfiles};
pub use resolver::resolve;
