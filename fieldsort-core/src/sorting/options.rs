//! Global comparison policies

use serde::{Deserialize, Serialize};

/// Policies applied to every field of a sort
///
/// Both default to `false`: strings compare ignoring ASCII case, and null
/// values sort before non-null ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Compare strings byte-wise instead of ASCII case-folded.
    pub case_sensitive: bool,
    /// Place nulls after non-null values instead of before them.
    pub nil_last: bool,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn nil_last(mut self, nil_last: bool) -> Self {
        self.nil_last = nil_last;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SortOptions::default();
        assert!(!options.case_sensitive);
        assert!(!options.nil_last);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let options: SortOptions = toml::from_str("nil_last = true").unwrap();
        assert_eq!(options, SortOptions::new().nil_last(true));

        let options: SortOptions = toml::from_str("").unwrap();
        assert_eq!(options, SortOptions::default());
    }
}
