use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::text::{DefaultTextTable, TextKey};

/// Caller-supplied replacement strings.
///
/// Keys are open strings so that an override object written against a newer
/// build still loads; keys unknown to this build are kept and flagged, never
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextOverrides(BTreeMap<String, String>);

impl TextOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: TextKey, text: impl Into<String>) -> Self {
        self.set(key, text);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.set_name(name, text);
        self
    }

    pub fn set(&mut self, key: TextKey, text: impl Into<String>) {
        self.0.insert(key.as_str().to_owned(), text.into());
    }

    pub fn set_name(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.0.insert(name.into(), text.into());
    }

    pub fn get(&self, key: TextKey) -> Option<&str> {
        self.get_name(key.as_str())
    }

    pub fn get_name(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys the default table does not define.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|name| !DefaultTextTable::is_valid_key(name))
    }
}

impl From<BTreeMap<String, String>> for TextOverrides {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TextOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
