use std::fmt;

// === VaultError ===

/// Errors reported by link and folder operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// A required field was empty.
    Validation(String),
    /// Another folder already uses this name (compared case-insensitively).
    DuplicateName(String),
    /// The referenced folder or link does not exist.
    NotFound(String),
    /// Reading from or writing to the durable store failed.
    Persistence(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            VaultError::DuplicateName(name) => {
                write!(f, "Folder name already exists: {}", name)
            }
            VaultError::NotFound(what) => write!(f, "Not found: {}", what),
            VaultError::Persistence(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for VaultError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
