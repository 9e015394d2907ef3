// LinkVault platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Overrides the data directory, e.g. for a sandboxed presentation shell.
pub const DATA_DIR_ENV: &str = "LINKVAULT_DATA_DIR";

/// File name of the SQLite store inside the data directory.
pub const DATABASE_FILE: &str = "linkvault.db";

/// Returns the platform-specific configuration directory for LinkVault.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the data directory, honoring `LINKVAULT_DATA_DIR` when set.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Default location of the database file.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}
