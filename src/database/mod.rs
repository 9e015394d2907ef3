//! LinkVault database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! string key-value interface that the rest of the crate persists through.
//!
//! # Usage
//!
//! ```no_run
//! use linkvault::database::{Database, KeyValueStore};
//!
//! let db = Database::open("linkvault.db").expect("failed to open database");
//! db.set("darkMode", "true").expect("write failed");
//! assert_eq!(db.get("darkMode").unwrap().as_deref(), Some("true"));
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;

/// Opaque string records under fixed keys.
///
/// Writes overwrite the whole value; there are no partial updates and no
/// transactions spanning several keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, rusqlite::Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error>;
    /// Returns whether a record was removed.
    fn remove(&self, key: &str) -> Result<bool, rusqlite::Error>;
}
