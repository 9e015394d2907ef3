//! Query engine: derives the visible subset of links from search text and a
//! folder filter.
//!
//! Matching is plain case-insensitive substring containment over url, tags and
//! note. The result keeps the source order; nothing is ranked or re-sorted.

use crate::types::link::Link;

/// A search query plus an optional folder filter. Empty strings match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFilter {
    query: String,
    folder: String,
}

impl LinkFilter {
    pub fn new(query: &str, folder: &str) -> Self {
        Self {
            query: query.to_lowercase(),
            folder: folder.to_string(),
        }
    }

    /// True when this filter lets every link through.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.folder.is_empty()
    }

    /// Folder filter compares exactly; the text query ignores case.
    pub fn matches(&self, link: &Link) -> bool {
        self.matches_folder(link) && self.matches_text(link)
    }

    fn matches_folder(&self, link: &Link) -> bool {
        self.folder.is_empty() || link.folder == self.folder
    }

    fn matches_text(&self, link: &Link) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.as_str();
        link.url.to_lowercase().contains(q)
            || link.tags.iter().any(|t| t.to_lowercase().contains(q))
            || link.note.to_lowercase().contains(q)
    }

    pub fn apply<'a>(&self, links: &'a [Link]) -> Vec<&'a Link> {
        links.iter().filter(|l| self.matches(l)).collect()
    }
}

/// Returns the links matching `query` and `folder_filter`, in collection order.
pub fn visible_links<'a>(links: &'a [Link], query: &str, folder_filter: &str) -> Vec<&'a Link> {
    LinkFilter::new(query, folder_filter).apply(links)
}
