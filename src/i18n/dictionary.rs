//! Dictionary - Static Translation Tables
//!
//! Per-language key -> text tables. Locale files are nested JSON objects
//! flattened into dot-notation keys, so `{"nav": {"home": "Accueil"}}`
//! becomes `nav.home`. Tables are immutable once built and need not share
//! the same key set.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use ahash::AHashMap;
use rust_embed::RustEmbed;
use serde_json::Value;
use tracing::{debug, error};

use super::Language;
use crate::error::Result;

/// Locale files bundled with the crate (`fr.json`, `ar.json`)
#[derive(RustEmbed)]
#[folder = "locales"]
struct LocaleAssets;

static BUILTIN: OnceLock<Dictionary> = OnceLock::new();

/// Result of looking a key up in one language's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Translation present in the table
    Found(&'a str),
    /// No translation; carries the requested key
    Missing(&'a str),
}

impl<'a> Lookup<'a> {
    /// Display text: the translation, or the key itself on a miss
    pub fn as_str(&self) -> &'a str {
        match *self {
            Lookup::Found(text) | Lookup::Missing(text) => text,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing(_))
    }
}

/// Translation tables for every supported language
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: AHashMap<Language, AHashMap<String, String>>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled marketplace dictionary, loaded once per process
    pub fn builtin() -> &'static Dictionary {
        BUILTIN.get_or_init(load_builtin)
    }

    /// Build a dictionary holding a single language parsed from JSON
    pub fn from_json(lang: Language, json: &str) -> Result<Self> {
        Self::new().with_json(lang, json)
    }

    /// Merge a JSON locale file into `lang`'s table
    ///
    /// Later entries overwrite earlier ones with the same key.
    pub fn with_json(mut self, lang: Language, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let table = self.tables.entry(lang).or_default();
        flatten_into(table, String::new(), value);
        Ok(self)
    }

    /// Build a dictionary from `(language, key, text)` triples
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut tables: AHashMap<Language, AHashMap<String, String>> = AHashMap::new();
        for (lang, key, text) in entries {
            tables.entry(lang).or_default().insert(key.into(), text.into());
        }
        Self { tables }
    }

    /// Translation of `key` in `lang`, if any
    ///
    /// Empty texts count as untranslated.
    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Look `key` up in `lang`'s table only
    pub fn lookup<'a>(&'a self, lang: Language, key: &'a str) -> Lookup<'a> {
        match self.get(lang, key) {
            Some(text) => Lookup::Found(text),
            None => Lookup::Missing(key),
        }
    }

    pub fn contains(&self, lang: Language, key: &str) -> bool {
        self.get(lang, key).is_some()
    }

    /// Number of keys translated for `lang`
    pub fn len(&self, lang: Language) -> usize {
        self.tables
            .get(&lang)
            .map_or(0, |table| table.values().filter(|text| !text.is_empty()).count())
    }

    /// Keys translated for `lang`, sorted
    pub fn keys(&self, lang: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&lang)
            .map(|table| {
                table
                    .iter()
                    .filter(|(_, text)| !text.is_empty())
                    .map(|(key, _)| key.as_str())
                    .collect()
            })
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Keys some other language translates but `lang` does not, sorted
    pub fn untranslated(&self, lang: Language) -> Vec<&str> {
        let missing: BTreeSet<&str> = self
            .tables
            .iter()
            .filter(|(other, _)| **other != lang)
            .flat_map(|(other, table)| table.keys().map(move |key| (*other, key.as_str())))
            .filter(|(other, key)| self.contains(*other, key) && !self.contains(lang, key))
            .map(|(_, key)| key)
            .collect();
        missing.into_iter().collect()
    }
}

fn load_builtin() -> Dictionary {
    let mut dictionary = Dictionary::new();

    for lang in Language::ALL {
        let file = format!("{}.json", lang.code());
        let Some(asset) = LocaleAssets::get(&file) else {
            error!(file = %file, "Locale file not bundled");
            continue;
        };

        let parsed = std::str::from_utf8(&asset.data)
            .map_err(|e| e.to_string())
            .and_then(|json| Dictionary::from_json(lang, json).map_err(|e| e.to_string()));

        match parsed {
            Ok(mut single) => {
                if let Some(table) = single.tables.remove(&lang) {
                    debug!(language = %lang, keys = table.len(), "Locale file loaded");
                    dictionary.tables.insert(lang, table);
                }
            }
            Err(e) => error!(error = %e, file = %file, "Failed to parse locale file"),
        }
    }

    dictionary
}

fn flatten_into(table: &mut AHashMap<String, String>, prefix: String, value: Value) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(table, join(&key), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.into_iter().enumerate() {
                flatten_into(table, join(&index.to_string()), child);
            }
        }
        Value::String(text) => {
            table.insert(prefix, text);
        }
        Value::Number(n) => {
            table.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            table.insert(prefix, b.to_string());
        }
        Value::Null => {}
    }
}
