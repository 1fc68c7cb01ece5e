//! Preferences - Key-Value Persistence Collaborator
//!
//! The localization store only needs `get`/`set` of short string values under
//! a fixed key. `MemoryPreferences` lives for the session, `FilePreferences`
//! survives restarts in a TOML file under the platform config directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ahash::AHashMap;
use tracing::{debug, info, warn};

use crate::constants::PREFERENCES_FILE;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;

/// Key-value store for user preferences
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// ==================== Memory ====================

/// Session-scoped preferences; clones share the same values
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<AHashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `key = value`
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|e| Error::PersistenceUnavailable {
            message: format!("memory preferences poisoned: {e}"),
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|e| Error::PersistenceUnavailable {
            message: format!("memory preferences poisoned: {e}"),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ==================== TOML File ====================

/// Durable preferences stored as a flat TOML string table
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Use an explicit file path; parent directories are created on write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `preferences.toml` in the platform config directory
    pub fn in_config_dir() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(PREFERENCES_FILE);
        info!(path = ?path, "Using preference file");
        Ok(Self::new(path))
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(toml::from_str(&content)?)
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(e @ Error::TomlDe { .. }) => {
                warn!(error = %e, path = ?self.path, "Corrupt preference file, rewriting");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, toml::to_string(&values)?)?;
        debug!(key, value, path = ?self.path, "Preference saved");
        Ok(())
    }
}

/// Store whose every operation fails, standing in for an unavailable backend
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct UnavailablePreferences;

#[cfg(test)]
impl PreferenceStore for UnavailablePreferences {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::PersistenceUnavailable {
            message: "storage disabled".to_string(),
        })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::PersistenceUnavailable {
            message: "storage disabled".to_string(),
        })
    }
}
