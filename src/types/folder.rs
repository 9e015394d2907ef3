use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Emoji shown for a folder whose tag is missing or not recognised.
pub const DEFAULT_FOLDER_EMOJI: &str = "📁";

/// Visual classification of a folder. Has no behavioral effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FolderTag {
    Red,
    Yellow,
    #[default]
    Green,
}

impl FolderTag {
    pub fn emoji(&self) -> &'static str {
        match self {
            FolderTag::Red => "🔴",
            FolderTag::Yellow => "🟡",
            FolderTag::Green => "🟢",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FolderTag::Red => "red",
            FolderTag::Yellow => "yellow",
            FolderTag::Green => "green",
        }
    }
}

impl fmt::Display for FolderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FolderTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(FolderTag::Red),
            "yellow" => Ok(FolderTag::Yellow),
            "green" => Ok(FolderTag::Green),
            other => Err(format!("unknown folder tag: {}", other)),
        }
    }
}

/// Maps a raw tag string to its emoji. Total: anything unrecognised gets 📁.
pub fn folder_emoji(tag: Option<&str>) -> &'static str {
    tag.and_then(|t| t.parse::<FolderTag>().ok())
        .map(|t| t.emoji())
        .unwrap_or(DEFAULT_FOLDER_EMOJI)
}

/// A named, color-tagged grouping that links reference by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(default = "new_folder_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_tag")]
    pub tag: FolderTag,
    #[serde(default)]
    pub created_at: i64,
}

/// Folders saved as bare `{name, tag}` pairs get an id on load.
fn new_folder_id() -> String {
    Uuid::new_v4().to_string()
}

impl Folder {
    /// Case-insensitive name comparison used for uniqueness checks.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Stored folders may carry a null or unknown tag; those decode as the default.
fn lenient_tag<'de, D>(deserializer: D) -> Result<FolderTag, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.parse::<FolderTag>().ok())
        .unwrap_or_default())
}
