use fieldsort_model::{AccessError, ValueKind};
use thiserror::Error;

/// Errors raised while building or running a sort
#[derive(Error, Debug)]
pub enum SortError {
    /// A field descriptor could not be turned into a path.
    #[error("Invalid sort field: {0}")]
    InvalidField(String),

    /// A field path does not match the shape of an element.
    #[error("Cannot resolve `{segment}` of `{path}`: {source}")]
    Configuration {
        path: String,
        segment: String,
        #[source]
        source: AccessError,
    },

    /// Two resolved values have no mutual order.
    #[error("Cannot compare {left} with {right} values of `{path}`")]
    Comparison {
        path: String,
        left: ValueKind,
        right: ValueKind,
    },

    /// A TOML profile could not be parsed.
    #[error("Invalid sort profile: {0}")]
    Profile(#[from] toml::de::Error),

    #[error("Sort profile not found: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, SortError>;
