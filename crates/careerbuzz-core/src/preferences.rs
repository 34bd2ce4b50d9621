//! Key-value preference storage.
//!
//! `PreferenceStore` is the persistence port used by the theme controller.
//! `TomlPreferenceStore` keeps values in `preferences.toml` (edited with
//! `toml_edit` so unrelated keys and comments survive); `MemoryPreferenceStore`
//! is the in-process substitute used by tests and by sessions that should not
//! touch disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use toml_edit::{DocumentMut, value};

use crate::config::{paths, write_atomic};

/// Persistence port for small string preferences.
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the CareerBuzz home directory.
    pub fn at_default_path() -> Self {
        Self::new(paths::preferences_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<DocumentMut> {
        if !self.path.exists() {
            return Ok(DocumentMut::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences from {}", self.path.display()))?;
        contents
            .parse()
            .with_context(|| format!("Failed to parse preferences from {}", self.path.display()))
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let doc = self.read_document()?;
        Ok(doc
            .get(key)
            .and_then(|item| item.as_str())
            .map(ToString::to_string))
    }

    fn set(&self, key: &str, new_value: &str) -> Result<()> {
        let mut doc = match self.read_document() {
            Ok(doc) => doc,
            Err(err) if self.path.exists() => {
                tracing::warn!("Rewriting unreadable preferences file: {err:#}");
                DocumentMut::new()
            }
            Err(err) => return Err(err),
        };
        doc[key] = value(new_value);
        write_atomic(&self.path, &doc.to_string())
    }
}

/// In-memory preference store.
///
/// `unavailable()` builds a store whose reads and writes always fail, standing
/// in for a host where persistence is disabled.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    pub fn unavailable() -> Self {
        Self {
            values: Mutex::default(),
            unavailable: true,
        }
    }

    /// Returns the current value without going through the port.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn insert(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.unavailable {
            return Err(anyhow!("preference store unavailable"));
        }
        let values = self
            .values
            .lock()
            .map_err(|_poisoned| anyhow!("preference store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("preference store unavailable"));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_poisoned| anyhow!("preference store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
