mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// Methods taking a slice of ids are batched: every statement they issue runs
/// inside one transaction. Nothing here enforces tree invariants; that is the
/// job of [`crate::hierarchy::Hierarchy`].
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Folder operations
    fn create_folder(&self, folder: &NewFolder) -> Result<Folder>;
    fn get_folder(&self, id: i64) -> Result<Option<Folder>>;
    /// Looks up a non-deleted folder by exact name under `parent_id`.
    fn find_active_folder(&self, name: &str, parent_id: Option<i64>) -> Result<Option<Folder>>;
    fn list_folders(&self, state: RecordState) -> Result<Vec<Folder>>;
    fn list_active_child_folder_ids(&self, parent_id: i64) -> Result<Vec<i64>>;
    fn update_folder(&self, folder: &Folder) -> Result<()>;
    fn set_folder_order(&self, ordered_ids: &[i64]) -> Result<()>;
    /// Marks each folder and the bookmarks directly inside it as deleted.
    fn soft_delete_folders(&self, ids: &[i64]) -> Result<()>;
    fn restore_folder(&self, id: i64) -> Result<bool>;
    /// Removes a trashed folder row. Active folders are left alone.
    fn purge_folder(&self, id: i64) -> Result<bool>;

    // Bookmark operations
    fn create_bookmark(&self, bookmark: &NewBookmark) -> Result<Bookmark>;
    fn get_bookmark(&self, id: i64) -> Result<Option<Bookmark>>;
    fn list_bookmarks(&self, state: RecordState) -> Result<Vec<Bookmark>>;
    fn update_bookmark(&self, bookmark: &Bookmark) -> Result<()>;
    fn set_bookmark_order(&self, ordered_ids: &[i64]) -> Result<()>;
    fn soft_delete_bookmark(&self, id: i64) -> Result<bool>;
    fn restore_bookmark(&self, id: i64) -> Result<bool>;
    fn purge_bookmark(&self, id: i64) -> Result<bool>;
    /// Inserts every bookmark whose `(url, folder_id)` pair is not already
    /// stored, deleted or not. Returns how many rows were inserted.
    fn insert_bookmarks_if_absent(&self, bookmarks: &[NewBookmark]) -> Result<usize>;
    fn search_bookmarks(&self, query: &str, limit: i32) -> Result<Vec<Bookmark>>;

    // Trash
    fn empty_trash(&self) -> Result<TrashPurge>;

    // Settings
    fn get_setting(&self, key: &str) -> Result<Option<String>>;
    fn list_settings(&self) -> Result<Vec<Setting>>;
    fn put_setting(&self, setting: &Setting) -> Result<()>;
    fn insert_setting_if_absent(&self, setting: &Setting) -> Result<bool>;

    fn close(&self) -> Result<()>;
}
