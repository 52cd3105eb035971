//! Parsed configuration contents

use serde::Serialize;
use std::collections::BTreeMap;

/// Section name → (key → raw value).
///
/// Values are stored exactly as the source produced them; coercion happens
/// per access in the typed getters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigurationMapping {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigurationMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    /// Insert or overwrite `section.key`, creating the section if needed.
    pub fn set(&mut self, section: impl Into<String>, key: impl Into<String>, value: impl Into<String>) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Ensure a section exists even when it has no keys.
    pub fn ensure_section(&mut self, section: impl Into<String>) {
        self.sections.entry(section.into()).or_default();
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// All `(section, key, value)` triples in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections.iter().flat_map(|(section, values)| {
            values
                .iter()
                .map(move |(key, value)| (section.as_str(), key.as_str(), value.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<S, K, V> FromIterator<(S, K, V)> for ConfigurationMapping
where
    S: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (section, key, value) in iter {
            mapping.set(section, key, value);
        }
        mapping
    }
}
