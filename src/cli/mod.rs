mod bookmark;
mod commands;
mod folder;
mod init;
mod transfer;
mod trash;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

pub use bookmark::{
    run_bookmark_add, run_bookmark_delete, run_bookmark_edit, run_bookmark_reorder,
};
pub use commands::{BookmarkCommands, FolderCommands, TransferCommands, TrashCommands};
pub use folder::{
    run_folder_create, run_folder_delete, run_folder_move, run_folder_rename, run_folder_reorder,
};
pub use init::run_init;
pub use transfer::{run_export, run_import};
pub use trash::{
    run_trash_empty, run_trash_list, run_trash_purge_bookmark, run_trash_purge_folder,
    run_trash_restore_bookmark, run_trash_restore_folder,
};
pub use view::{run_search, run_tree};

use crate::config::ServerConfig;
use crate::hierarchy::Hierarchy;
use crate::store::SqliteStore;

/// Open the hierarchy in a data directory, checking the database exists
pub fn open_hierarchy(data_dir: &str) -> anyhow::Result<Hierarchy> {
    let config = ServerConfig {
        data_dir: PathBuf::from(data_dir),
        ..ServerConfig::default()
    };
    let db_path = config.db_path();

    if !db_path.exists() {
        anyhow::bail!(
            "Database not found at {}. Run 'bookstash init' first.",
            db_path.display()
        );
    }

    let store = SqliteStore::new(&db_path)?;
    Ok(Hierarchy::new(Arc::new(store)))
}
