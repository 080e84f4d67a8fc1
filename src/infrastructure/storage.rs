// SPDX-License-Identifier: MPL-2.0
//! Key-value storage adapters.

use crate::application::port::KeyValueStore;
use crate::config;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const STORAGE_FILE: &str = "storage.toml";

/// Stores entries as a flat TOML table, rewriting the file on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default config directory.
    ///
    /// Returns `None` when the platform has no config directory.
    #[must_use]
    pub fn open_default() -> Option<Self> {
        config::config_dir().map(|dir| Self::open(dir.join(STORAGE_FILE)))
    }

    /// Opens the store at `path`. A missing or unreadable file starts empty.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(error) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), %error, "ignoring unreadable storage file");
                }
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store, for tests and for platforms without a config directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
