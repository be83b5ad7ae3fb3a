use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    pub sort_order: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub folder_id: Option<i64>,
    pub sort_order: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// A folder that has been validated but not yet stored.
#[derive(Debug, Clone)]
pub struct NewFolder {
    pub name: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// A bookmark that has been validated but not yet stored.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub folder_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Selects active or trashed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Active,
    Deleted,
}

impl RecordState {
    pub(crate) fn flag(self) -> bool {
        matches!(self, RecordState::Deleted)
    }
}

/// Rows removed by an "empty trash" request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrashPurge {
    pub folders: usize,
    pub bookmarks: usize,
}

/// Flat folder and bookmark lists, already in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tree {
    pub folders: Vec<Folder>,
    pub bookmarks: Vec<Bookmark>,
}

impl Tree {
    pub fn child_folders(&self, parent_id: Option<i64>) -> impl Iterator<Item = &Folder> {
        self.folders.iter().filter(move |f| f.parent_id == parent_id)
    }

    pub fn bookmarks_in(&self, folder_id: Option<i64>) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks
            .iter()
            .filter(move |b| b.folder_id == folder_id)
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.bookmarks.is_empty()
    }
}
