//! Unit tests for the LinkVault database layer (connection, migrations, key-value access).

use linkvault::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use linkvault::database::{Database, KeyValueStore};
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    assert!(Database::open_in_memory().is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_kv_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "kv_store should exist after migrations");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let result = linkvault::database::migrations::run_all(db.connection());
    assert!(result.is_ok(), "Running migrations twice should succeed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_get_absent_key_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get("links").unwrap(), None);
}

#[test]
fn test_set_overwrites_whole_value() {
    let db = Database::open_in_memory().unwrap();
    db.set("links", "[1,2,3]").unwrap();
    db.set("links", "[]").unwrap();
    assert_eq!(db.get("links").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_keys_are_independent() {
    let db = Database::open_in_memory().unwrap();
    db.set("links", "a").unwrap();
    db.set("folders", "b").unwrap();
    assert_eq!(db.get("links").unwrap().as_deref(), Some("a"));
    assert_eq!(db.get("folders").unwrap().as_deref(), Some("b"));
}

#[test]
fn test_remove() {
    let db = Database::open_in_memory().unwrap();
    db.set("darkMode", "true").unwrap();
    assert!(db.remove("darkMode").unwrap());
    assert!(!db.remove("darkMode").unwrap());
    assert_eq!(db.get("darkMode").unwrap(), None);
}

#[test]
fn test_file_database_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.db");

    {
        let db = Database::open(&path).unwrap();
        db.set("darkMode", "true").unwrap();
    }

    assert!(path.exists(), "Database file should exist on disk");
    let db = Database::open(&path).unwrap();
    assert_eq!(db.get("darkMode").unwrap().as_deref(), Some("true"));
}
