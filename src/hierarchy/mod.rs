//! Folder and bookmark hierarchy.
//!
//! [`Hierarchy`] is the only writer of folders and bookmarks. It validates
//! input, keeps the parent relation acyclic, cascades soft deletes down the
//! tree and owns the trash lifecycle. Reads for display go through
//! [`crate::query::Catalog`].

mod bookmarks;
mod folders;
mod trash;
pub mod validation;

use std::sync::Arc;

pub use bookmarks::{BookmarkDraft, BookmarkUpdate};
pub use folders::FolderUpdate;

use crate::error::{Error, Result};
use crate::query::Catalog;
use crate::store::Store;
use crate::types::{Bookmark, Folder};

#[derive(Clone)]
pub struct Hierarchy {
    store: Arc<dyn Store>,
}

impl Hierarchy {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Read-only views over the same store.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(Arc::clone(&self.store))
    }

    pub fn folder(&self, id: i64) -> Result<Folder> {
        validation::validate_id(id, "Folder")?;
        self.store.get_folder(id)?.ok_or(Error::NotFound)
    }

    pub fn bookmark(&self, id: i64) -> Result<Bookmark> {
        validation::validate_id(id, "Bookmark")?;
        self.store.get_bookmark(id)?.ok_or(Error::NotFound)
    }

    /// Checks that `folder_id`, when given, names a folder that can hold
    /// children: it exists and is not in the trash.
    fn require_active_folder(&self, folder_id: Option<i64>, role: &str) -> Result<()> {
        let Some(id) = folder_id else {
            return Ok(());
        };
        validation::validate_id(id, role)?;
        match self.store.get_folder(id)? {
            Some(folder) if !folder.is_deleted => Ok(()),
            _ => Err(Error::validation(format!("{role} not found"))),
        }
    }
}
