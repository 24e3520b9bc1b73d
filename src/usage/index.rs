//! Usage index: attribute name to the set of values observed in markup.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::usage::markup;

/// Attributes with this prefix are recorded with their whole value.
pub const DATA_PREFIX: &str = "data-";

/// Immutable per-build snapshot of attribute usage.
///
/// - `data-*` values are kept whole
/// - `class` values are split on whitespace into tokens
/// - `style` values are kept whole
///
/// Every other attribute is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsageIndex {
    attributes: BTreeMap<String, BTreeSet<String>>,
}

impl UsageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the attributes of one markup document.
    pub fn scan(&mut self, document: &str) {
        markup::for_each_attribute(document, |name, value| self.record(name, value));
    }

    /// Record a single attribute occurrence.
    pub fn record(&mut self, name: &str, value: &str) {
        if name == "class" {
            let tokens = self.attributes.entry(name.to_string()).or_default();
            tokens.extend(value.split_whitespace().map(String::from));
        } else if name == "style" || name.starts_with(DATA_PREFIX) {
            self.attributes
                .entry(name.to_string())
                .or_default()
                .insert(value.to_string());
        }
    }

    /// Builder: insert raw values for `name`, bypassing attribute filtering.
    pub fn with<'a>(mut self, name: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
        self.attributes
            .entry(name.to_string())
            .or_default()
            .extend(values.into_iter().map(String::from));
        self
    }

    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn values(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.attributes.get(name)
    }

    /// Number of distinct attribute names.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Build a usage index from a sequence of markup documents.
pub fn build_usage_index<I>(documents: I) -> UsageIndex
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut index = UsageIndex::new();
    for document in documents {
        index.scan(document.as_ref());
    }
    index
}
