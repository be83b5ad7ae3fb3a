use std::collections::{HashSet, VecDeque};

use chrono::Utc;
use tracing::{debug, info};

use super::Hierarchy;
use super::validation::{validate_folder_name, validate_id};
use crate::error::{Error, Result};
use crate::types::{Folder, NewFolder};

/// Rename and/or move request for an existing folder.
///
/// `parent_id: Some(None)` moves the folder to the root level; `None` leaves
/// the parent untouched.
#[derive(Debug, Clone, Default)]
pub struct FolderUpdate {
    pub name: Option<String>,
    pub parent_id: Option<Option<i64>>,
}

impl Hierarchy {
    pub fn create_folder(&self, name: &str, parent_id: Option<i64>) -> Result<Folder> {
        let name = validate_folder_name(name)?;
        self.require_active_folder(parent_id, "Parent folder")?;

        let folder = self.store.create_folder(&NewFolder {
            name,
            parent_id,
            created_at: Utc::now(),
        })?;
        debug!(id = folder.id, parent = ?folder.parent_id, "created folder");
        Ok(folder)
    }

    pub fn update_folder(&self, id: i64, update: FolderUpdate) -> Result<Folder> {
        let mut folder = self.folder(id)?;

        if let Some(name) = update.name.as_deref() {
            folder.name = validate_folder_name(name)?;
        }

        if let Some(parent_id) = update.parent_id {
            if parent_id == Some(id) {
                return Err(Error::validation("Folder cannot be its own parent"));
            }
            self.require_active_folder(parent_id, "Parent folder")?;
            if let Some(parent_id) = parent_id {
                if self.is_ancestor_of(id, parent_id)? {
                    return Err(Error::validation("Moving folder would create a cycle"));
                }
            }
            folder.parent_id = parent_id;
        }

        self.store.update_folder(&folder)?;
        Ok(folder)
    }

    /// Returns the active folder called `name` under `parent_id`, creating it
    /// when there is none. The flag is true when a folder was created.
    pub fn find_or_create_folder(
        &self,
        name: &str,
        parent_id: Option<i64>,
    ) -> Result<(Folder, bool)> {
        let name = validate_folder_name(name)?;
        if let Some(existing) = self.store.find_active_folder(&name, parent_id)? {
            return Ok((existing, false));
        }
        Ok((self.create_folder(&name, parent_id)?, true))
    }

    /// Assigns `sort_order = index` to each folder in one batch. The caller
    /// supplies the complete sibling list.
    pub fn reorder_folders(&self, ordered_ids: &[i64]) -> Result<()> {
        validate_ordering(ordered_ids, "Folder")?;
        self.store.set_folder_order(ordered_ids)
    }

    /// Soft-deletes `id`, every active descendant folder, and the bookmarks
    /// inside all of them. Returns how many folders were marked.
    pub fn delete_folder(&self, id: i64) -> Result<usize> {
        self.folder(id)?;

        let subtree = self.collect_subtree(id)?;
        self.store.soft_delete_folders(&subtree)?;

        info!(id, folders = subtree.len(), "moved folder tree to trash");
        Ok(subtree.len())
    }

    /// Breadth-first walk over active child folders, starting at (and
    /// including) `root`. One store read per visited folder.
    pub(crate) fn collect_subtree(&self, root: i64) -> Result<Vec<i64>> {
        let mut seen = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        let mut collected = vec![root];

        while let Some(current) = queue.pop_front() {
            for child in self.store.list_active_child_folder_ids(current)? {
                // Guards against cycles already present in stored data.
                if seen.insert(child) {
                    collected.push(child);
                    queue.push_back(child);
                }
            }
        }

        Ok(collected)
    }

    /// True when `ancestor` appears on the parent chain of `folder_id`,
    /// including `folder_id` itself.
    fn is_ancestor_of(&self, ancestor: i64, folder_id: i64) -> Result<bool> {
        let mut seen = HashSet::new();
        let mut current = Some(folder_id);

        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            if !seen.insert(id) {
                break;
            }
            current = self.store.get_folder(id)?.and_then(|f| f.parent_id);
        }

        Ok(false)
    }
}

pub(super) fn validate_ordering(ordered_ids: &[i64], entity: &str) -> Result<()> {
    if ordered_ids.is_empty() {
        return Err(Error::validation("Ordered id list cannot be empty"));
    }
    let mut seen = HashSet::with_capacity(ordered_ids.len());
    for &id in ordered_ids {
        validate_id(id, entity)?;
        if !seen.insert(id) {
            return Err(Error::validation(format!(
                "{entity} id {id} appears more than once"
            )));
        }
    }
    Ok(())
}
