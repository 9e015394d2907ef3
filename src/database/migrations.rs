//! Schema migrations for the LinkVault SQLite database.
//!
//! `MIGRATIONS` is applied in order; `schema_version` records the highest
//! version applied, so reopening a database only runs what is new.

use rusqlite::{params, Connection};

/// Version and SQL for each schema step, oldest first.
const MIGRATIONS: &[(i32, &str)] = &[(
    1,
    "CREATE TABLE IF NOT EXISTS kv_store (
         key TEXT PRIMARY KEY,
         value TEXT NOT NULL,
         updated_at INTEGER NOT NULL
     );",
)];

/// Highest version in `MIGRATIONS`.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Applied schema version, 0 for a fresh database.
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |row| row.get(0))
        .unwrap_or(0)
}

/// Runs every migration newer than the stored version. Safe on every open.
pub fn run_all(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);")?;

    let current = get_schema_version(conn);
    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO schema_version (version) VALUES (?1)", params![version])?;
        tracing::debug!(version, "applied schema migration");
    }
    Ok(())
}
