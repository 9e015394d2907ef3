//! Unit tests for the Store persistence bridge.
//!
//! Covers tolerant loading (absent, malformed and legacy records), whole-record
//! writes, the theme flag, and surfacing of storage failures.

use std::sync::Arc;

use linkvault::database::{Database, KeyValueStore};
use linkvault::managers::store::{Store, DARK_MODE_KEY, FOLDERS_KEY, LINKS_KEY};
use linkvault::types::errors::VaultError;
use linkvault::types::folder::{Folder, FolderTag};
use linkvault::types::link::Link;

fn setup() -> (Arc<Database>, Store) {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let store = Store::new(db.clone());
    (db, store)
}

#[test]
fn test_load_from_empty_store() {
    let (_db, store) = setup();
    let loaded = store.load();
    assert!(loaded.links.is_empty());
    assert!(loaded.folders.is_empty());
}

#[test]
fn test_persist_then_load() {
    let (_db, store) = setup();
    let links = vec![
        Link::new("https://a.com", "x, y", "first", "Work", 1),
        Link::new("https://b.com", "", "", "", 2),
    ];
    let folders = vec![Folder {
        id: "f-1".to_string(),
        name: "Work".to_string(),
        tag: FolderTag::Red,
        created_at: 1,
    }];

    store.persist_links(&links).unwrap();
    store.persist_folders(&folders).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.links, links);
    assert_eq!(loaded.folders, folders);
}

#[test]
fn test_records_use_fixed_keys_and_camel_case() {
    let (db, store) = setup();
    store
        .persist_links(&[Link::new("https://a.com", "", "", "", 5)])
        .unwrap();

    let raw = db.get(LINKS_KEY).unwrap().expect("links record written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["createdAt"], 5);
    assert_eq!(value[0]["url"], "https://a.com");
    assert_eq!(db.get(FOLDERS_KEY).unwrap(), None);
}

#[test]
fn test_malformed_record_loads_empty() {
    let (db, store) = setup();
    db.set(LINKS_KEY, "{not json").unwrap();
    db.set(FOLDERS_KEY, r#"[{"id":"1","name":"A","tag":"red","createdAt":0}]"#)
        .unwrap();

    let loaded = store.load();
    assert!(loaded.links.is_empty());
    assert_eq!(loaded.folders.len(), 1);
}

#[test]
fn test_legacy_records_load() {
    let (db, store) = setup();
    db.set(
        LINKS_KEY,
        r#"[{"url":"https://old.com","tags":["a",""],"note":"n","createdAt":10}]"#,
    )
    .unwrap();
    db.set(
        FOLDERS_KEY,
        r#"[{"id":"1700000000000","name":"Old","createdAt":10}]"#,
    )
    .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.links.len(), 1);
    assert!(!loaded.links[0].id.is_empty());
    assert_eq!(loaded.links[0].folder, "");
    assert_eq!(loaded.folders[0].tag, FolderTag::Green);
    assert_eq!(loaded.folders[0].id, "1700000000000");

    db.set(
        FOLDERS_KEY,
        r#"[{"name":"Work","tag":"red"},{"name":"Home","tag":"green"}]"#,
    )
    .unwrap();
    let folders = store.load().folders;
    let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Home"]);
    assert_eq!(folders[0].tag, FolderTag::Red);
    assert!(!folders[0].id.is_empty());
    assert_ne!(folders[0].id, folders[1].id);
}

#[test]
fn test_bad_entry_is_skipped_not_whole_record() {
    let (db, store) = setup();
    db.set(
        LINKS_KEY,
        r#"[{"url":"https://a.com","createdAt":1},{"note":"no url"},{"url":"https://b.com","createdAt":2}]"#,
    )
    .unwrap();
    db.set(FOLDERS_KEY, r#"[{"name":"Work"},42]"#).unwrap();

    let loaded = store.load();
    let urls: Vec<&str> = loaded.links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    assert_eq!(loaded.folders.len(), 1);
    assert_eq!(loaded.folders[0].name, "Work");
}

#[test]
fn test_dark_mode_flag() {
    let (db, store) = setup();
    assert!(!store.dark_mode());

    store.set_dark_mode(true).unwrap();
    assert!(store.dark_mode());
    assert_eq!(db.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

    store.set_dark_mode(false).unwrap();
    assert!(!store.dark_mode());

    db.set(DARK_MODE_KEY, "yes").unwrap();
    assert!(!store.dark_mode(), "only the string \"true\" enables dark mode");
}

#[test]
fn test_write_failure_is_persistence_error() {
    let (db, store) = setup();
    db.connection().execute_batch("DROP TABLE kv_store;").unwrap();

    let result = store.persist_links(&[Link::new("https://a.com", "", "", "", 0)]);
    assert!(matches!(result, Err(VaultError::Persistence(_))));

    // Reads still degrade to empty collections.
    assert!(store.load().links.is_empty());
}
