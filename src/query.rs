//! Read-side views over the record store.

use std::sync::Arc;

use crate::error::Result;
use crate::store::Store;
use crate::types::{Bookmark, RecordState, Tree};

pub const SEARCH_LIMIT: i32 = 50;

#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn Store>,
}

impl Catalog {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Active folders ordered by `(sort_order, name)` and active bookmarks in
    /// their explicit order.
    pub fn active_tree(&self) -> Result<Tree> {
        Ok(Tree {
            folders: self.store.list_folders(RecordState::Active)?,
            bookmarks: self.store.list_bookmarks(RecordState::Active)?,
        })
    }

    /// Trashed folders by name and trashed bookmarks newest first.
    pub fn trash(&self) -> Result<Tree> {
        Ok(Tree {
            folders: self.store.list_folders(RecordState::Deleted)?,
            bookmarks: self.store.list_bookmarks(RecordState::Deleted)?,
        })
    }

    /// Active bookmarks whose title or URL contains `query`. A blank query
    /// matches nothing.
    pub fn search(&self, query: &str) -> Result<Vec<Bookmark>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.store.search_bookmarks(query, SEARCH_LIMIT)
    }
}
