//! Persistence bridge between the in-memory collections and the key-value store.
//!
//! Each collection is one JSON record under a fixed key and is always written
//! whole. Links and folders are written independently, so a crash between the
//! two writes can leave them out of step until both are reloaded together.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::{Database, KeyValueStore};
use crate::types::errors::VaultError;
use crate::types::folder::Folder;
use crate::types::link::Link;

pub const LINKS_KEY: &str = "links";
pub const FOLDERS_KEY: &str = "folders";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Both collections as read at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub links: Vec<Link>,
    pub folders: Vec<Folder>,
}

/// Loads and persists links, folders and the theme flag.
pub struct Store {
    db: Arc<Database>,
}

impl Store {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Reads both collections. Never fails: absent, unreadable or non-array
    /// records come back as empty collections, and entries that do not decode
    /// are skipped individually.
    pub fn load(&self) -> Collections {
        Collections {
            links: self.load_record(LINKS_KEY),
            folders: self.load_record(FOLDERS_KEY),
        }
    }

    pub fn persist_links(&self, links: &[Link]) -> Result<(), VaultError> {
        self.write_record(LINKS_KEY, links)
    }

    pub fn persist_folders(&self, folders: &[Folder]) -> Result<(), VaultError> {
        self.write_record(FOLDERS_KEY, folders)
    }

    /// Theme flag; anything other than the string `"true"` reads as light mode.
    pub fn dark_mode(&self) -> bool {
        matches!(self.db.get(DARK_MODE_KEY), Ok(Some(v)) if v == "true")
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), VaultError> {
        let value = if enabled { "true" } else { "false" };
        self.db
            .set(DARK_MODE_KEY, value)
            .map_err(|e| VaultError::Persistence(e.to_string()))
    }

    fn load_record<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.db.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read record, starting empty");
                return Vec::new();
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed record, starting empty");
                return Vec::new();
            }
        };

        // A bad entry is dropped on its own; the rest of the collection survives.
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(position, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(key, position, error = %e, "skipping malformed entry");
                    None
                }
            })
            .collect()
    }

    fn write_record<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), VaultError> {
        let json = serde_json::to_string(items)
            .map_err(|e| VaultError::Persistence(format!("failed to serialize {}: {}", key, e)))?;
        self.db
            .set(key, &json)
            .map_err(|e| VaultError::Persistence(format!("failed to write {}: {}", key, e)))?;
        tracing::debug!(key, count = items.len(), "persisted record");
        Ok(())
    }
}
