//! Link Vault for LinkVault.
//!
//! Implements `LinkVaultTrait`, the single owner and mutator of the link and
//! folder collections. Every mutation writes the affected collection back
//! through the [`Store`] before returning.
//!
//! Links reference folders by name. Renaming a folder rewrites every link that
//! carried the old name; deleting a folder leaves links untouched, so they keep
//! a label for a folder that no longer exists.

use uuid::Uuid;

use crate::managers::store::Store;
use crate::services::query::visible_links;
use crate::services::time_ago::now_millis;
use crate::types::errors::VaultError;
use crate::types::folder::{Folder, FolderTag};
use crate::types::link::Link;
use crate::types::settings::{InsertOrder, VaultSettings};

/// Result of a rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed {
        old_name: String,
        new_name: String,
        links_updated: usize,
    },
    /// The new name was empty or identical to the current one.
    Unchanged,
    NotFound,
}

/// Trait defining link and folder operations.
pub trait LinkVaultTrait {
    fn links(&self) -> &[Link];
    fn folders(&self) -> &[Folder];
    fn visible_links(&self, query: &str, folder_filter: &str) -> Vec<&Link>;
    fn create_link(&mut self, url: &str, tags_raw: &str, note: &str, folder: &str) -> Result<Link, VaultError>;
    fn delete_link(&mut self, id: &str) -> Result<Option<Link>, VaultError>;
    fn delete_link_at(&mut self, index: usize) -> Result<Option<Link>, VaultError>;
    fn create_folder(&mut self, name: &str, tag: Option<FolderTag>) -> Result<Folder, VaultError>;
    fn rename_folder(&mut self, id: &str, new_name: &str) -> Result<RenameOutcome, VaultError>;
    fn delete_folder<F>(&mut self, id: &str, confirm: F) -> Result<Option<Folder>, VaultError>
    where
        F: FnOnce(&Folder) -> bool;
}

/// In-memory link and folder collections, mirrored to the store.
pub struct LinkVault {
    store: Store,
    links: Vec<Link>,
    folders: Vec<Folder>,
    insert_order: InsertOrder,
    strict_folder_assignment: bool,
    default_tag: FolderTag,
}

impl LinkVault {
    /// Loads both collections from the store.
    pub fn open(store: Store, settings: &VaultSettings) -> Self {
        let collections = store.load();
        tracing::info!(
            links = collections.links.len(),
            folders = collections.folders.len(),
            "vault loaded"
        );
        Self {
            store,
            links: collections.links,
            folders: collections.folders,
            insert_order: settings.links.insert_order,
            strict_folder_assignment: settings.links.strict_folder_assignment,
            default_tag: settings.folders.default_tag,
        }
    }

    /// Picks up changed link and folder settings for later operations.
    pub fn apply_settings(&mut self, settings: &VaultSettings) {
        self.insert_order = settings.links.insert_order;
        self.strict_folder_assignment = settings.links.strict_folder_assignment;
        self.default_tag = settings.folders.default_tag;
    }

    /// Looks up a folder by id.
    pub fn folder(&self, id: &str) -> Result<&Folder, VaultError> {
        self.folders
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| VaultError::NotFound(format!("folder {}", id)))
    }

    /// Exact-name lookup, as used for a link's folder reference.
    pub fn folder_by_name(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    /// Tag of the folder a link points at, if that folder still exists.
    pub fn folder_tag_for(&self, link: &Link) -> Option<FolderTag> {
        if !link.is_filed() {
            return None;
        }
        self.folder_by_name(&link.folder).map(|f| f.tag)
    }

    /// Number of links filed under `folder_name`.
    pub fn link_count(&self, folder_name: &str) -> usize {
        self.links.iter().filter(|l| l.folder == folder_name).count()
    }

    /// Folders ordered for display, most recently created first.
    pub fn folders_newest_first(&self) -> Vec<&Folder> {
        let mut sorted: Vec<&Folder> = self.folders.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }

    pub fn dark_mode(&self) -> bool {
        self.store.dark_mode()
    }

    /// Flips the theme flag and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, VaultError> {
        let enabled = !self.store.dark_mode();
        self.store.set_dark_mode(enabled)?;
        Ok(enabled)
    }

    fn name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.folders
            .iter()
            .any(|f| Some(f.id.as_str()) != except_id && f.name_matches(name))
    }
}

impl LinkVaultTrait for LinkVault {
    fn links(&self) -> &[Link] {
        &self.links
    }

    fn folders(&self) -> &[Folder] {
        &self.folders
    }

    fn visible_links(&self, query: &str, folder_filter: &str) -> Vec<&Link> {
        visible_links(&self.links, query, folder_filter)
    }

    /// Adds a link built from raw form input and returns it.
    fn create_link(
        &mut self,
        url: &str,
        tags_raw: &str,
        note: &str,
        folder: &str,
    ) -> Result<Link, VaultError> {
        if url.trim().is_empty() {
            return Err(VaultError::Validation("url required".to_string()));
        }
        if self.strict_folder_assignment && !folder.is_empty() && self.folder_by_name(folder).is_none() {
            return Err(VaultError::NotFound(format!("folder {}", folder)));
        }

        let link = Link::new(url, tags_raw, note, folder, now_millis());
        match self.insert_order {
            InsertOrder::NewestFirst => self.links.insert(0, link.clone()),
            InsertOrder::OldestFirst => self.links.push(link.clone()),
        }
        self.store.persist_links(&self.links)?;

        tracing::info!(id = %link.id, url = %link.url, folder = %link.folder, "link created");
        Ok(link)
    }

    /// Removes a link by id. Unknown ids are a no-op.
    fn delete_link(&mut self, id: &str) -> Result<Option<Link>, VaultError> {
        let Some(index) = self.links.iter().position(|l| l.id == id) else {
            tracing::debug!(id, "delete_link: no such link");
            return Ok(None);
        };
        self.delete_link_at(index)
    }

    /// Removes the link at a position in the full collection, not a filtered view.
    fn delete_link_at(&mut self, index: usize) -> Result<Option<Link>, VaultError> {
        if index >= self.links.len() {
            tracing::debug!(index, "delete_link_at: index out of range");
            return Ok(None);
        }
        let removed = self.links.remove(index);
        self.store.persist_links(&self.links)?;

        tracing::info!(id = %removed.id, url = %removed.url, "link deleted");
        Ok(Some(removed))
    }

    fn create_folder(&mut self, name: &str, tag: Option<FolderTag>) -> Result<Folder, VaultError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VaultError::Validation("name required".to_string()));
        }
        if self.name_taken(name, None) {
            return Err(VaultError::DuplicateName(name.to_string()));
        }

        let folder = Folder {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            tag: tag.unwrap_or(self.default_tag),
            created_at: now_millis(),
        };
        self.folders.push(folder.clone());
        self.store.persist_folders(&self.folders)?;

        tracing::info!(id = %folder.id, name = %folder.name, tag = %folder.tag, "folder created");
        Ok(folder)
    }

    /// Renames a folder and rewrites every link that referenced the old name.
    fn rename_folder(&mut self, id: &str, new_name: &str) -> Result<RenameOutcome, VaultError> {
        let new_name = new_name.trim();
        let Some(index) = self.folders.iter().position(|f| f.id == id) else {
            tracing::debug!(id, "rename_folder: no such folder");
            return Ok(RenameOutcome::NotFound);
        };
        if new_name.is_empty() || self.folders[index].name == new_name {
            return Ok(RenameOutcome::Unchanged);
        }
        if self.name_taken(new_name, Some(id)) {
            return Err(VaultError::DuplicateName(new_name.to_string()));
        }

        // Both collections change in memory before either write, so a failed
        // write cannot leave links pointing at the old name.
        let old_name = std::mem::replace(&mut self.folders[index].name, new_name.to_string());
        let mut links_updated = 0;
        for link in self.links.iter_mut().filter(|l| l.folder == old_name) {
            link.folder = new_name.to_string();
            links_updated += 1;
        }

        self.store.persist_folders(&self.folders)?;
        self.store.persist_links(&self.links)?;

        tracing::info!(id, %old_name, new_name, links_updated, "folder renamed");
        Ok(RenameOutcome::Renamed {
            old_name,
            new_name: new_name.to_string(),
            links_updated,
        })
    }

    /// Removes a folder once `confirm` approves it. Links keep their folder name.
    fn delete_folder<F>(&mut self, id: &str, confirm: F) -> Result<Option<Folder>, VaultError>
    where
        F: FnOnce(&Folder) -> bool,
    {
        let Some(index) = self.folders.iter().position(|f| f.id == id) else {
            tracing::debug!(id, "delete_folder: no such folder");
            return Ok(None);
        };
        if !confirm(&self.folders[index]) {
            tracing::debug!(id, "delete_folder: not confirmed");
            return Ok(None);
        }

        let removed = self.folders.remove(index);
        self.store.persist_folders(&self.folders)?;

        tracing::info!(
            id,
            name = %removed.name,
            orphaned_links = self.link_count(&removed.name),
            "folder deleted"
        );
        Ok(Some(removed))
    }
}
