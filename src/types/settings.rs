use serde::{Deserialize, Serialize};

use super::folder::FolderTag;

/// Top-level vault settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VaultSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub links: LinkSettings,
    #[serde(default)]
    pub folders: FolderSettings,
}

/// Where the durable store lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// Explicit database file. `None` means `<data_dir>/linkvault.db`.
    pub database_path: Option<String>,
}

/// Link collection behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LinkSettings {
    #[serde(default)]
    pub insert_order: InsertOrder,
    /// Reject links whose folder name matches no existing folder.
    #[serde(default)]
    pub strict_folder_assignment: bool,
}

/// Where a new link lands in the collection. Display order is insertion order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InsertOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Folder defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FolderSettings {
    #[serde(default)]
    pub default_tag: FolderTag,
}
