//! Aggregated translation records for one resource set.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

/// All translations of a single resource key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedValue {
    /// Resource key, the `name` attribute of a `<data>` element.
    pub key: String,

    /// Value from the culture-neutral file, if the key appears there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Map from locale identifier → translation.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

impl LocalizedValue {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default: None,
            translations: BTreeMap::new(),
        }
    }

    /// Gets the translation for `locale`, or the default value when `locale` is `None`.
    pub fn get(&self, locale: Option<&str>) -> Option<&str> {
        match locale {
            None => self.default.as_deref(),
            Some(locale) => self.translations.get(locale).map(String::as_str),
        }
    }

    pub(crate) fn set(&mut self, locale: Option<&str>, value: String) {
        match locale {
            None => self.default = Some(value),
            Some(locale) => {
                self.translations.insert(locale.to_string(), value);
            }
        }
    }
}

/// The merged view of a resource set: one record per key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizationTable {
    values: Vec<LocalizedValue>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl LocalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `key` for `locale` (`None` for the default file),
    /// creating the record on first sight and overwriting earlier values.
    pub fn upsert(&mut self, key: &str, locale: Option<&str>, value: String) {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.values.push(LocalizedValue::new(key));
                self.index.insert(key.to_string(), self.values.len() - 1);
                self.values.len() - 1
            }
        };
        self.values[position].set(locale, value);
    }

    pub fn get(&self, key: &str) -> Option<&LocalizedValue> {
        self.index.get(key).map(|&position| &self.values[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalizedValue> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|value| value.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All locale identifiers that hold at least one translation, sorted.
    pub fn locales(&self) -> Vec<String> {
        let locales: BTreeSet<&String> = self
            .values
            .iter()
            .flat_map(|value| value.translations.keys())
            .collect();
        locales.into_iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a LocalizationTable {
    type Item = &'a LocalizedValue;
    type IntoIter = std::slice::Iter<'a, LocalizedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
