// LinkVault platform paths for macOS
// Config and data: ~/Library/Application Support/LinkVault

use std::env;
use std::path::PathBuf;

fn app_support_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("LinkVault")
}

/// `~/Library/Application Support/LinkVault`
pub fn get_config_dir() -> PathBuf {
    app_support_dir()
}

/// `~/Library/Application Support/LinkVault`
pub fn get_data_dir() -> PathBuf {
    app_support_dir()
}
