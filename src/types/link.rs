use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved URL bookmark.
///
/// `folder` holds a folder *name*, not an id. An empty string means the link is
/// unfiled. The name is not checked against the folder collection, so a link may
/// keep pointing at a folder that has since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default = "new_link_id")]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub folder: String,
    pub created_at: i64,
}

/// Records written before links carried an id get one on load.
fn new_link_id() -> String {
    Uuid::new_v4().to_string()
}

impl Link {
    /// Builds a new link from raw form input.
    ///
    /// The url is trimmed and `tags_raw` is split on commas; empty pieces are
    /// dropped and entry order is kept. Callers check that the url is non-empty.
    pub fn new(url: &str, tags_raw: &str, note: &str, folder: &str, created_at: i64) -> Self {
        Self {
            id: new_link_id(),
            url: url.trim().to_string(),
            tags: parse_tags(tags_raw),
            note: note.to_string(),
            folder: folder.to_string(),
            created_at,
        }
    }

    /// Returns the hostname of the link's url, if it parses.
    pub fn domain(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }

    /// True when the link is assigned to some folder name.
    pub fn is_filed(&self) -> bool {
        !self.folder.is_empty()
    }
}

/// Splits comma-separated tag input into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
