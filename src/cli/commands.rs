use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum FolderCommands {
    /// Create a folder
    Create {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Folder name
        name: String,

        /// Parent folder ID (omit for the root level)
        #[arg(long)]
        parent: Option<i64>,
    },

    /// Rename a folder
    Rename {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Folder ID
        id: i64,

        /// New name
        name: String,
    },

    /// Move a folder under another folder or to the root level
    Move {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Folder ID
        id: i64,

        /// New parent folder ID
        #[arg(long, conflicts_with = "root", required_unless_present = "root")]
        parent: Option<i64>,

        /// Move to the root level
        #[arg(long)]
        root: bool,
    },

    /// Move a folder and everything inside it to the trash
    Delete {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Folder ID
        id: i64,
    },

    /// Set the order of sibling folders
    Reorder {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Folder IDs in their new order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand)]
pub enum BookmarkCommands {
    /// Add a bookmark
    Add {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Bookmark title
        title: String,

        /// Bookmark URL (http or https)
        url: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,

        /// Folder ID (omit for the root level)
        #[arg(long)]
        folder: Option<i64>,
    },

    /// Change a bookmark's fields
    Edit {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Bookmark ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New description
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,

        /// Move into this folder
        #[arg(long, conflicts_with = "root")]
        folder: Option<i64>,

        /// Move to the root level
        #[arg(long)]
        root: bool,
    },

    /// Move a bookmark to the trash
    Delete {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Bookmark ID
        id: i64,
    },

    /// Set the order of bookmarks
    Reorder {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Bookmark IDs in their new order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand)]
pub enum TrashCommands {
    /// Show trashed folders and bookmarks
    List {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Restore one trashed folder (its contents stay in the trash)
    RestoreFolder {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Folder ID
        id: i64,
    },

    /// Restore one trashed bookmark
    RestoreBookmark {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Bookmark ID
        id: i64,
    },

    /// Permanently delete a trashed folder
    PurgeFolder {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Folder ID
        id: i64,
    },

    /// Permanently delete a trashed bookmark
    PurgeBookmark {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Bookmark ID
        id: i64,
    },

    /// Permanently delete everything in the trash
    Empty {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,
    },
}

#[derive(Subcommand)]
pub enum TransferCommands {
    /// Import a Netscape bookmark file
    Import {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Bookmark file to read
        file: PathBuf,
    },

    /// Export all active bookmarks as a Netscape bookmark file
    Export {
        /// Data directory containing the database
        #[arg(long, default_value = "./data", env = "BOOKSTASH_DATA_DIR")]
        data_dir: String,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
