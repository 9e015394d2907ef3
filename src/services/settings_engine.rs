//! Vault settings, kept in one JSON file.
//!
//! The file is optional. A missing file means defaults, and a file that names
//! only some fields gets the rest from [`VaultSettings::default`]. Individual
//! settings are addressed as `section.field`, e.g. `links.insert_order`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::VaultSettings;

const SETTINGS_FILE: &str = "settings.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<VaultSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &VaultSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

pub struct SettingsEngine {
    config_path: String,
    settings: VaultSettings,
}

impl SettingsEngine {
    /// Uses `path_override` as the settings file, or `settings.json` in the
    /// platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join(SETTINGS_FILE)
                .to_string_lossy()
                .into_owned()
        });
        Self {
            config_path,
            settings: VaultSettings::default(),
        }
    }

    /// Database file to open: the configured path, or the platform default.
    pub fn database_path(&self) -> PathBuf {
        match &self.settings.storage.database_path {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => platform::default_database_path(),
        }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> SettingsError {
        SettingsError::IoError(format!("cannot {} {}: {}", action, self.config_path, e))
    }
}

/// The slot for a `section.field` key. Sections are flat, so anything deeper
/// or shallower than two parts is rejected.
fn setting_slot<'t>(tree: &'t mut Value, key: &str) -> Result<&'t mut Value, SettingsError> {
    let invalid = || SettingsError::InvalidKey(format!("unknown setting '{}'", key));
    let (section, field) = key.split_once('.').ok_or_else(invalid)?;
    if field.contains('.') {
        return Err(invalid());
    }
    tree.get_mut(section)
        .and_then(|s| s.get_mut(field))
        .ok_or_else(invalid)
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the settings file. A malformed file is an error, not a silent reset.
    fn load(&mut self) -> Result<VaultSettings, SettingsError> {
        self.settings = match fs::read_to_string(&self.config_path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                SettingsError::SerializationError(format!("{}: {}", self.config_path, e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path, "no settings file, using defaults");
                VaultSettings::default()
            }
            Err(e) => return Err(self.io_error("read", e)),
        };
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(dir) = Path::new(&self.config_path).parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error("create directory for", e))?;
        }
        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(&self.config_path, json).map_err(|e| self.io_error("write", e))?;
        tracing::debug!(path = %self.config_path, "settings saved");
        Ok(())
    }

    fn get_settings(&self) -> &VaultSettings {
        &self.settings
    }

    /// Replaces one setting and saves. The value must decode as that field's
    /// type; on failure the current settings are left alone.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        let mut tree = serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        *setting_slot(&mut tree, key)? = value;

        self.settings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        tracing::info!(key, "setting changed");
        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = VaultSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
