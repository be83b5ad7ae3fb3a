use serde::{Deserialize, Deserializer, Serialize};

use crate::hierarchy::{BookmarkDraft, BookmarkUpdate, FolderUpdate};

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Pair with `#[serde(default)]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFolderRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// `null` moves the folder to the root level.
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i64>>,
}

impl From<UpdateFolderRequest> for FolderUpdate {
    fn from(req: UpdateFolderRequest) -> Self {
        Self {
            name: req.name,
            parent_id: req.parent_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub folder_id: Option<i64>,
}

impl From<CreateBookmarkRequest> for BookmarkDraft {
    fn from(req: CreateBookmarkRequest) -> Self {
        Self {
            title: req.title,
            url: req.url,
            description: req.description,
            folder_id: req.folder_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub folder_id: Option<Option<i64>>,
}

impl From<UpdateBookmarkRequest> for BookmarkUpdate {
    fn from(req: UpdateBookmarkRequest) -> Self {
        Self {
            title: req.title,
            url: req.url,
            description: req.description,
            folder_id: req.folder_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ordered_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct PutSettingRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteFolderResponse {
    pub id: i64,
    /// Folders moved to the trash, including the target.
    pub folders: usize,
}
