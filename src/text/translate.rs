use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{PictureError, PictureResult};

/// Lookup of localized strings by key.
pub trait Translator {
    /// Localized text for `key`, or `None` when no translation exists.
    fn get_translated_text(&self, key: &str) -> Option<String>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn get_translated_text(&self, key: &str) -> Option<String> {
        (**self).get_translated_text(key)
    }
}

impl Translator for HashMap<String, String> {
    fn get_translated_text(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Flat key to caption table, loaded from a JSON object such as `{"1": "Smile!"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Translations {
    entries: BTreeMap<String, String>,
}

impl Translations {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of string values.
    pub fn from_json_str(json: &str) -> PictureResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PictureError::validation(format!("translations json: {e}")))
    }

    /// Read and parse a JSON translations file.
    pub fn from_path(path: &Path) -> PictureResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read translations '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no entry exists.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Translations {
    fn get_translated_text(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/translate.rs"]
mod tests;
