use tracing::info;

use super::Hierarchy;
use crate::error::{Error, Result};
use crate::types::TrashPurge;

// Restores never cascade: ancestors and descendants keep their own state, so
// the owner restores a tree top-down.
impl Hierarchy {
    pub fn restore_folder(&self, id: i64) -> Result<()> {
        self.folder(id)?;
        if !self.store.restore_folder(id)? {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    pub fn restore_bookmark(&self, id: i64) -> Result<()> {
        self.bookmark(id)?;
        if !self.store.restore_bookmark(id)? {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Permanently removes a trashed folder. Active folders are `NotFound`.
    pub fn purge_folder(&self, id: i64) -> Result<()> {
        self.folder(id)?;
        if !self.store.purge_folder(id)? {
            return Err(Error::NotFound);
        }
        info!(id, "purged folder");
        Ok(())
    }

    /// Permanently removes a trashed bookmark. Active bookmarks are `NotFound`.
    pub fn purge_bookmark(&self, id: i64) -> Result<()> {
        self.bookmark(id)?;
        if !self.store.purge_bookmark(id)? {
            return Err(Error::NotFound);
        }
        info!(id, "purged bookmark");
        Ok(())
    }

    pub fn empty_trash(&self) -> Result<TrashPurge> {
        let purged = self.store.empty_trash()?;
        info!(
            folders = purged.folders,
            bookmarks = purged.bookmarks,
            "emptied trash"
        );
        Ok(purged)
    }
}
