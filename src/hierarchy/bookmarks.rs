use chrono::Utc;
use tracing::debug;

use super::Hierarchy;
use super::folders::validate_ordering;
use super::validation::{validate_description, validate_title, validate_url};
use crate::error::{Error, Result};
use crate::types::{Bookmark, NewBookmark};

/// Input for a new bookmark, before validation.
#[derive(Debug, Clone)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub folder_id: Option<i64>,
}

/// Partial bookmark update. `folder_id: Some(None)` moves to the root level.
#[derive(Debug, Clone, Default)]
pub struct BookmarkUpdate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<Option<String>>,
    pub folder_id: Option<Option<i64>>,
}

impl Hierarchy {
    pub fn create_bookmark(&self, draft: BookmarkDraft) -> Result<Bookmark> {
        let title = validate_title(&draft.title)?;
        let url = validate_url(&draft.url)?;
        let description = validate_description(draft.description.as_deref())?;
        self.require_active_folder(draft.folder_id, "Folder")?;

        let bookmark = self.store.create_bookmark(&NewBookmark {
            title,
            url,
            description,
            folder_id: draft.folder_id,
            created_at: Utc::now(),
        })?;
        debug!(id = bookmark.id, folder = ?bookmark.folder_id, "created bookmark");
        Ok(bookmark)
    }

    /// Applies every present field or none of them.
    pub fn update_bookmark(&self, id: i64, update: BookmarkUpdate) -> Result<Bookmark> {
        let mut bookmark = self.bookmark(id)?;

        if let Some(title) = update.title.as_deref() {
            bookmark.title = validate_title(title)?;
        }
        if let Some(url) = update.url.as_deref() {
            bookmark.url = validate_url(url)?;
        }
        if let Some(description) = update.description {
            bookmark.description = validate_description(description.as_deref())?;
        }
        if let Some(folder_id) = update.folder_id {
            self.require_active_folder(folder_id, "Folder")?;
            bookmark.folder_id = folder_id;
        }

        self.store.update_bookmark(&bookmark)?;
        self.bookmark(id)
    }

    pub fn delete_bookmark(&self, id: i64) -> Result<()> {
        self.bookmark(id)?;
        if !self.store.soft_delete_bookmark(id)? {
            return Err(Error::NotFound);
        }
        debug!(id, "moved bookmark to trash");
        Ok(())
    }

    /// Stores already-validated bookmarks in one batch, skipping any whose
    /// `(url, folder_id)` pair exists. Returns how many were inserted.
    pub(crate) fn insert_bookmark_batch(&self, batch: &[NewBookmark]) -> Result<usize> {
        self.store.insert_bookmarks_if_absent(batch)
    }

    /// Gives the listed bookmarks explicit positions `0..n` in one batch.
    pub fn reorder_bookmarks(&self, ordered_ids: &[i64]) -> Result<()> {
        validate_ordering(ordered_ids, "Bookmark")?;
        self.store.set_bookmark_order(ordered_ids)
    }
}
