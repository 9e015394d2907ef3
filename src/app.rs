//! App Core for LinkVault.
//!
//! Central struct holding the settings engine and the link vault, wired to
//! one SQLite-backed store.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::link_vault::LinkVault;
use crate::managers::store::Store;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub vault: LinkVault,
}

impl App {
    /// Opens the store at `db_path` and loads the vault.
    ///
    /// Settings come from `settings_path`, or the platform config file when `None`.
    pub fn new(db_path: &str, settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;

        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let db = Arc::new(Database::open(db_path)?);
        let vault = LinkVault::open(Store::new(db), &settings);

        tracing::info!(db_path, config = settings_engine.get_config_path(), "app initialized");
        Ok(Self {
            settings_engine,
            vault,
        })
    }

    /// Opens the app using the configured (or platform default) database path.
    pub fn from_config(settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path.clone());
        settings_engine.load()?;
        let db_path = settings_engine.database_path();
        Self::new(&db_path.to_string_lossy(), settings_path)
    }
}
