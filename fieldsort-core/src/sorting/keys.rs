//! Ordering of resolved values
//!
//! These functions compare two already-resolved [`Value`]s for a single
//! field, applying the null and case policies. Direction is applied by the
//! caller.

use std::cmp::Ordering;

use fieldsort_model::Value;

use super::options::SortOptions;
use super::fields::FieldPath;
use crate::error::{Result, SortError};

/// Order two values where at least one may be missing.
///
/// Returns `None` when both are present and the values themselves decide.
pub fn null_ordering(a_null: bool, b_null: bool, nil_last: bool) -> Option<Ordering> {
    match (a_null, b_null) {
        (true, true) => Some(Ordering::Equal),
        (true, false) if nil_last => Some(Ordering::Greater),
        (true, false) => Some(Ordering::Less),
        (false, true) if nil_last => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

/// Byte-wise comparison after folding ASCII letters to lower case.
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Ascending comparison of two resolved values of `path`.
pub fn compare_resolved(
    a: &Value,
    b: &Value,
    options: SortOptions,
    path: &FieldPath,
) -> Result<Ordering> {
    if let Some(ordering) = null_ordering(a.is_null(), b.is_null(), options.nil_last) {
        return Ok(ordering);
    }

    if !options.case_sensitive
        && let (Some(a), Some(b)) = (a.as_str(), b.as_str())
    {
        return Ok(compare_case_insensitive(a, b));
    }

    a.natural_cmp(b).ok_or_else(|| SortError::Comparison {
        path: path.to_string(),
        left: a.kind(),
        right: b.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::fields::FieldSpec;
    use fieldsort_model::{Object, ValueKind};

    fn path() -> FieldPath {
        FieldSpec::parse("val").unwrap().path().clone()
    }

    #[test]
    fn test_null_ordering() {
        assert_eq!(null_ordering(true, true, false), Some(Ordering::Equal));
        assert_eq!(null_ordering(true, true, true), Some(Ordering::Equal));
        assert_eq!(null_ordering(true, false, false), Some(Ordering::Less));
        assert_eq!(null_ordering(true, false, true), Some(Ordering::Greater));
        assert_eq!(null_ordering(false, true, false), Some(Ordering::Greater));
        assert_eq!(null_ordering(false, true, true), Some(Ordering::Less));
        assert_eq!(null_ordering(false, false, true), None);
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        assert_eq!(compare_case_insensitive("a", "B"), Ordering::Less);
        assert_eq!(compare_case_insensitive("ABC", "abc"), Ordering::Equal);
        assert_eq!(compare_case_insensitive("ab", "ABC"), Ordering::Less);
        assert_ne!(compare_case_insensitive("É", "é"), Ordering::Equal);
    }

    #[test]
    fn test_strings_respect_case_policy() {
        let (a, b) = (Value::from("a"), Value::from("B"));

        let insensitive = SortOptions::default();
        assert_eq!(compare_resolved(&a, &b, insensitive, &path()).unwrap(), Ordering::Less);

        let sensitive = SortOptions::default().case_sensitive(true);
        assert_eq!(compare_resolved(&a, &b, sensitive, &path()).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_numbers_compare_across_kinds() {
        let options = SortOptions::default();
        assert_eq!(
            compare_resolved(&Value::Int(2), &Value::from(1.5), options, &path()).unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            compare_resolved(&Value::UInt(7), &Value::Int(7), options, &path()).unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn test_nulls_before_values_by_default() {
        let options = SortOptions::default();
        assert_eq!(
            compare_resolved(&Value::Null, &Value::Int(1), options, &path()).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            compare_resolved(&Value::Null, &Value::Int(1), options.nil_last(true), &path())
                .unwrap(),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mixed_kinds_fail() {
        let options = SortOptions::default();
        let err = compare_resolved(&Value::from("1"), &Value::Int(1), options, &path()).unwrap_err();
        assert!(matches!(
            err,
            SortError::Comparison {
                left: ValueKind::Str,
                right: ValueKind::Int,
                ..
            }
        ));

        let record = Value::record(Object::new());
        assert!(compare_resolved(&record, &record, SortOptions::default(), &path()).is_err());
    }
}
