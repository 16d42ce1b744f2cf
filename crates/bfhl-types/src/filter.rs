use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::response::FieldValue;

/// Response fields a user may narrow the display to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Alphabets,
    Numbers,
    HighestLowercaseAlphabet,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [
        FilterField::Alphabets,
        FilterField::Numbers,
        FilterField::HighestLowercaseAlphabet,
    ];

    /// Key in the response body.
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::Alphabets => "alphabets",
            FilterField::Numbers => "numbers",
            FilterField::HighestLowercaseAlphabet => "highest_lowercase_alphabet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Alphabets => "Alphabets",
            FilterField::Numbers => "Numbers",
            FilterField::HighestLowercaseAlphabet => "Highest Lowercase Alphabet",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterField(pub String);

impl fmt::Display for UnknownFilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = FilterField::ALL.iter().map(FilterField::key).collect();
        write!(
            f,
            "unknown filter field '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownFilterField {}

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FilterField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownFilterField(needle.to_string()))
    }
}

/// Set of chosen fields. Iteration follows catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection(BTreeSet<FilterField>);

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        FilterField::ALL.into_iter().collect()
    }

    /// Parse a comma separated list such as `alphabets,numbers`.
    /// Blank input yields an empty selection.
    pub fn parse_list(list: &str) -> Result<Self, UnknownFilterField> {
        list.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(FilterField::from_str)
            .collect()
    }

    pub fn contains(&self, field: FilterField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FilterField> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<FilterField> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = FilterField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Response restricted to the selected fields that the response actually
/// contains. Selected fields missing from the response have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    entries: Vec<(FilterField, FieldValue)>,
}

impl FilteredView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `field`, keeping catalog order.
    pub fn insert(&mut self, field: FilterField, value: FieldValue) {
        match self.entries.binary_search_by_key(&field, |(f, _)| *f) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (field, value)),
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = FilterField> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    pub fn entries(&self) -> &[(FilterField, FieldValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FilteredView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
