use serde::Serialize;
use std::fmt;

/// Upper-cased first character of an item, used to bucket items into sections
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GroupKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One header plus its sorted rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: GroupKey,
    pub items: Vec<String>,
}

/// Immutable, sorted, two-level index (key -> ordered items)
///
/// Built once by [`crate::grouping::build`]; the accessors in
/// [`crate::sections`] only read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedIndex {
    pub(crate) sections: Vec<Section>,
}

/// A resolved row selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection<'a> {
    pub section: usize,
    pub row: usize,
    pub header: &'a str,
    pub item: &'a str,
}
