//! Sort definitions loaded from TOML
//!
//! A profile names its fields in the same loose forms accepted in code,
//! with the comparison policies alongside:
//!
//! ```toml
//! fields = ["ex_type.sticky desc", ["ex_type", "group", "weight"], "name"]
//! case_sensitive = false
//! nil_last = true
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field_sort::FieldSort;
use super::options::SortOptions;
use super::fields::FieldArg;
use crate::error::{Result, SortError};

/// One serialized sort definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortProfile {
    #[serde(default)]
    pub fields: Vec<FieldArg>,
    #[serde(flatten)]
    pub options: SortOptions,
}

impl SortProfile {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Normalize the fields into a reusable [`FieldSort`].
    pub fn build(&self) -> Result<FieldSort> {
        Ok(FieldSort::new(self.fields.iter().cloned())?.with_options(self.options))
    }
}

impl FromStr for SortProfile {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

impl From<&FieldSort> for SortProfile {
    fn from(sort: &FieldSort) -> Self {
        Self {
            fields: sort.fields().iter().cloned().map(FieldArg::from).collect(),
            options: sort.options(),
        }
    }
}

/// A set of named profiles under a `[profiles.<name>]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortProfiles {
    #[serde(default)]
    pub profiles: BTreeMap<String, SortProfile>,
}

impl SortProfiles {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn get(&self, name: &str) -> Result<&SortProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| SortError::UnknownProfile(name.to_string()))
    }

    /// Look up and build the profile called `name`.
    pub fn build(&self, name: &str) -> Result<FieldSort> {
        self.get(name)?.build()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
