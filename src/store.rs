//! Persistence collaborator - a minimal string key-value contract
//!
//! The engine reads and writes best times and score history through `Store`.
//! Failures never reach engine logic: implementations swallow errors, warn
//! through the `log` facade, and behave as if the value were absent.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// `get`/`set` contract for persisted scalar values.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and as a fallback when no data directory is
/// usable. Contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one flat JSON object, loaded once and written through
/// on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`. A missing or unreadable file starts empty;
    /// a corrupt file is discarded with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load(&path);
        Self { path, values }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("score store: cannot read {}: {err}", path.display());
                }
                return HashMap::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(values) => values,
            Err(err) => {
                log::warn!("score store: discarding corrupt {}: {err}", path.display());
                HashMap::new()
            }
        }
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = fs::create_dir_all(parent) {
                    log::warn!("score store: cannot create {}: {err}", parent.display());
                    return;
                }
            }
        }
        let text = match serde_json::to_string_pretty(&self.values) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("score store: cannot serialize: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, text) {
            log::warn!("score store: cannot write {}: {err}", self.path.display());
        }
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.save();
    }
}
