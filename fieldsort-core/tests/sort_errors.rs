//! Malformed fields and mismatched data abort the sort with a typed error.

#[path = "support/mod.rs"]
mod support;

use fieldsort_core::{
    AccessError, FieldSort, Object, Record, SortError, SortOptions, Value, ValueKind,
    sort_by_field,
};

#[test]
fn malformed_fields_fail_at_construction() {
    for bad in ["", "a..b", "val.", "val. "] {
        match FieldSort::new([bad]) {
            Err(SortError::InvalidField(message)) => assert!(message.contains(bad)),
            Err(other) => panic!("{bad:?}: unexpected error {other}"),
            Ok(sort) => panic!("{bad:?}: accepted as {sort}"),
        }
    }

    // A direction token alone is a field name
    let sort = FieldSort::new([" desc"]).unwrap();
    assert_eq!(sort.to_string(), "desc");
}

#[test]
fn unknown_attribute_is_a_configuration_error() {
    support::init_tracing();
    let items = vec![
        Object::new().with("name", "b"),
        Object::new().with("name", "a"),
    ];

    let err = sort_by_field(items, ["nmae"], SortOptions::default()).unwrap_err();
    match &err {
        SortError::Configuration { path, segment, source } => {
            assert_eq!(path, "nmae");
            assert_eq!(segment, "nmae");
            assert_eq!(source, &AccessError::unknown_field("nmae"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "Cannot resolve `nmae` of `nmae`: unknown field `nmae`"
    );
}

#[test]
fn traversing_into_a_scalar_is_a_configuration_error() {
    let items = vec![
        Object::new().with("val", 1),
        Object::new().with("val", 2),
    ];

    let err = sort_by_field(items, ["val.name"], SortOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        SortError::Configuration {
            source: AccessError::NotARecord { kind: ValueKind::Int, .. },
            ..
        }
    ));
}

#[test]
fn mixed_kinds_are_a_comparison_error() {
    let items = vec![
        Object::new().with("val", "one"),
        Object::new().with("val", 2),
    ];

    let err = sort_by_field(items, ["val"], SortOptions::default()).unwrap_err();
    assert!(matches!(err, SortError::Comparison { .. }));
    assert!(err.to_string().contains("`val`"));
}

#[test]
fn records_have_no_order() {
    let items = vec![
        Object::new().with_record("val", Object::new()),
        Object::new().with_record("val", Object::new()),
    ];

    let err = sort_by_field(items, ["val"], SortOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        SortError::Comparison {
            left: ValueKind::Record,
            right: ValueKind::Record,
            ..
        }
    ));
}

#[test]
fn nulls_never_reach_value_comparison() -> anyhow::Result<()> {
    // Null against any kind is decided by placement alone
    let items = vec![
        Object::new().with("val", "text"),
        Object::new().with("val", Value::Null),
    ];
    let sorted = sort_by_field(items, ["val"], SortOptions::default())?;
    assert!(sorted[0].get("val")?.is_null());
    Ok(())
}

#[test]
fn accessor_failures_propagate() {
    #[derive(Debug)]
    struct Flaky;

    impl Record for Flaky {
        fn get(&self, name: &str) -> Result<Value, AccessError> {
            Err(AccessError::failed(name, "backend unavailable"))
        }
    }

    let err = sort_by_field(vec![Flaky, Flaky], ["anything"], SortOptions::default()).unwrap_err();
    assert!(err.to_string().contains("backend unavailable"));
    assert!(std::error::Error::source(&err).is_some());
}
