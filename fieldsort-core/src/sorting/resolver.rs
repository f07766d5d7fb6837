//! Field path resolution against a single element

use fieldsort_model::{AccessError, Record, Value};
use tracing::trace;

use super::cache::{ObjectId, ValueCache};
use super::fields::FieldPath;
use crate::error::{Result, SortError};

/// Resolve `path` against `element`, memoizing every hop in `cache`.
///
/// A null element, or a null value partway along the path, resolves to
/// [`Value::Null`]. Reading through a scalar or an unknown attribute is a
/// [`SortError::Configuration`].
pub fn resolve<R>(
    id: ObjectId,
    element: &R,
    path: &FieldPath,
    cache: &mut ValueCache,
) -> Result<Value>
where
    R: Record + ?Sized,
{
    if element.is_null() {
        return Ok(Value::Null);
    }

    let mut segments = path.segments().iter();
    let Some(first) = segments.next() else {
        return Ok(Value::Null);
    };

    let mut current = lookup(id, element, first, path, cache)?;

    for segment in segments {
        let record = match &current {
            Value::Null => return Ok(Value::Null),
            Value::Record(record) if record.is_null() => return Ok(Value::Null),
            Value::Record(record) => record.clone(),
            scalar => {
                return Err(configuration(
                    path,
                    segment,
                    AccessError::not_a_record(segment.as_str(), scalar.kind()),
                ));
            }
        };
        current = lookup(ObjectId::shared(&record), &*record, segment, path, cache)?;
    }

    match current {
        Value::Record(record) if record.is_null() => Ok(Value::Null),
        value => Ok(value),
    }
}

fn lookup<R>(
    id: ObjectId,
    record: &R,
    segment: &str,
    path: &FieldPath,
    cache: &mut ValueCache,
) -> Result<Value>
where
    R: Record + ?Sized,
{
    cache.get_or_try_insert_with(id, segment, || {
        trace!("Reading `{}` of {:?} for `{}`", segment, id, path);
        record
            .get(segment)
            .map_err(|source| configuration(path, segment, source))
    })
}

fn configuration(path: &FieldPath, segment: &str, source: AccessError) -> SortError {
    SortError::Configuration {
        path: path.to_string(),
        segment: segment.to_owned(),
        source,
    }
}
