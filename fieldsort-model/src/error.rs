use std::fmt::{self, Display};

use crate::value::ValueKind;

/// Errors produced when a record cannot answer a field lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The record has no attribute with this name.
    UnknownField { field: String },
    /// Traversal tried to read a field from a value that is not a record.
    NotARecord { field: String, kind: ValueKind },
    /// The accessor exists but failed to produce a value.
    Failed { field: String, message: String },
}

impl AccessError {
    pub fn unknown_field(field: impl Into<String>) -> Self {
        AccessError::UnknownField {
            field: field.into(),
        }
    }

    pub fn not_a_record(field: impl Into<String>, kind: ValueKind) -> Self {
        AccessError::NotARecord {
            field: field.into(),
            kind,
        }
    }

    pub fn failed(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccessError::Failed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field the lookup was made for.
    pub fn field(&self) -> &str {
        match self {
            AccessError::UnknownField { field }
            | AccessError::NotARecord { field, .. }
            | AccessError::Failed { field, .. } => field,
        }
    }
}

impl Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::UnknownField { field } => {
                write!(f, "unknown field `{field}`")
            }
            AccessError::NotARecord { field, kind } => {
                write!(f, "cannot read `{field}` from a {kind} value")
            }
            AccessError::Failed { field, message } => {
                write!(f, "failed to read `{field}`: {message}")
            }
        }
    }
}

impl std::error::Error for AccessError {}

pub type Result<T> = std::result::Result<T, AccessError>;
