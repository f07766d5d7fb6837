//! Field descriptors and their normalization
//!
//! Callers describe sort keys loosely: `"name"`, `"group.weight desc"`,
//! `["ex_type", "group", "weight"]`. This module turns each of those into a
//! [`FieldSpec`]: a non-empty path of segment names plus a [`Direction`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};

/// Direction tokens are matched on their first three characters only.
const DESCENDING_PREFIX: &str = "des";

/// Sort direction for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Interpret a trailing direction token.
    ///
    /// `desc`, `DESC`, `descending` and `des` select [`Direction::Descending`];
    /// every other token, including misspellings, means ascending.
    pub fn from_token(token: &str) -> Self {
        let prefix: String = token
            .chars()
            .take(DESCENDING_PREFIX.len())
            .flat_map(char::to_lowercase)
            .collect();

        if prefix == DESCENDING_PREFIX {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// Apply this direction to an ascending comparison result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// A raw, caller-supplied field descriptor
///
/// Deserializes from either a string or a list of strings, so profiles can
/// mix both forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldArg {
    /// A single name or a dotted path, optionally followed by a direction.
    Name(String),
    /// Explicit path segments; only the last may carry a direction.
    Path(Vec<String>),
}

impl FieldArg {
    /// Path segments before direction extraction.
    ///
    /// Dotted names are split on `.`; list segments are taken verbatim.
    pub fn into_segments(self) -> Vec<String> {
        match self {
            FieldArg::Name(name) if name.contains('.') => {
                name.split('.').map(str::to_owned).collect()
            }
            FieldArg::Name(name) => vec![name],
            FieldArg::Path(segments) => segments,
        }
    }
}

impl fmt::Display for FieldArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldArg::Name(name) => f.write_str(name),
            FieldArg::Path(segments) => write!(f, "[{}]", segments.join(", ")),
        }
    }
}

impl From<&str> for FieldArg {
    fn from(name: &str) -> Self {
        FieldArg::Name(name.to_owned())
    }
}

impl From<String> for FieldArg {
    fn from(name: String) -> Self {
        FieldArg::Name(name)
    }
}

impl From<&String> for FieldArg {
    fn from(name: &String) -> Self {
        FieldArg::Name(name.clone())
    }
}

impl<const N: usize> From<[&str; N]> for FieldArg {
    fn from(segments: [&str; N]) -> Self {
        FieldArg::Path(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<&[&str]> for FieldArg {
    fn from(segments: &[&str]) -> Self {
        FieldArg::Path(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<Vec<&str>> for FieldArg {
    fn from(segments: Vec<&str>) -> Self {
        FieldArg::from(segments.as_slice())
    }
}

impl From<Vec<String>> for FieldArg {
    fn from(segments: Vec<String>) -> Self {
        FieldArg::Path(segments)
    }
}

impl From<FieldSpec> for FieldArg {
    fn from(spec: FieldSpec) -> Self {
        let mut segments = spec.path.0;
        if spec.direction == Direction::Descending {
            if let Some(last) = segments.last_mut() {
                last.push_str(" desc");
            }
        }
        FieldArg::Path(segments)
    }
}

/// Ordered, non-empty list of attribute names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_nested(&self) -> bool {
        self.0.len() > 1
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// A normalized sort key: where to read the value and which way to order it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    path: FieldPath,
    direction: Direction,
}

impl FieldSpec {
    /// Build a field spec from explicit segments; segments are not inspected for
    /// direction tokens.
    pub fn new<I, S>(segments: I, direction: Direction) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        validate(&segments, || segments.join("."))?;
        Ok(Self {
            path: FieldPath(segments),
            direction,
        })
    }

    /// Normalize a raw descriptor.
    pub fn parse(field: impl Into<FieldArg>) -> Result<Self> {
        normalize(field.into())
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_descending(&self) -> bool {
        self.direction == Direction::Descending
    }

    /// Same path, opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            path: self.path.clone(),
            direction: self.direction.reverse(),
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Ascending => write!(f, "{}", self.path),
            Direction::Descending => write!(f, "{} desc", self.path),
        }
    }
}

impl FromStr for FieldSpec {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        FieldSpec::parse(s)
    }
}

/// Turn a raw descriptor into a [`FieldSpec`].
///
/// Only the last segment is inspected for a direction token: it is split on
/// its first run of whitespace into the bare name and the token.
pub fn normalize(field: FieldArg) -> Result<FieldSpec> {
    let raw = field.to_string();
    let mut segments = field.into_segments();

    let Some(last) = segments.pop() else {
        return Err(SortError::InvalidField(format!(
            "`{raw}` names no attribute"
        )));
    };
    let (name, direction) = split_direction(&last);
    segments.push(name.to_owned());

    validate(&segments, || raw.clone())?;

    Ok(FieldSpec {
        path: FieldPath(segments),
        direction,
    })
}

fn split_direction(segment: &str) -> (&str, Direction) {
    let segment = segment.trim();
    match segment.split_once(char::is_whitespace) {
        Some((name, token)) => (name, Direction::from_token(token.trim_start())),
        None => (segment, Direction::Ascending),
    }
}

fn validate(segments: &[String], describe: impl Fn() -> String) -> Result<()> {
    if segments.is_empty() {
        return Err(SortError::InvalidField(format!(
            "`{}` names no attribute",
            describe()
        )));
    }
    if segments.iter().any(|s| s.trim().is_empty()) {
        return Err(SortError::InvalidField(format!(
            "`{}` contains an empty path segment",
            describe()
        )));
    }
    Ok(())
}
